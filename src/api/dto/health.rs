//! DTOs for service descriptor and health endpoints.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::entities::RegistrySummary;

/// Response for `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub status: String,
    pub service: String,
    pub version: String,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

/// Response for `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub statistics: RegistrySummary,
}
