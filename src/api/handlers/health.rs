//! Handlers for the service descriptor and health check.

use axum::{Json, extract::State};
use std::collections::BTreeMap;

use crate::api::dto::health::{HealthResponse, ServiceInfo};
use crate::state::AppState;

pub const SERVICE_NAME: &str = "URL Shortener API";

/// Describes the service and its public endpoints.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Json<ServiceInfo> {
    let endpoints = BTreeMap::from([
        ("shorten", "POST /api/shorten"),
        ("redirect", "GET /{short_code}"),
        ("stats", "GET /api/stats/{short_code}"),
        ("list", "GET /api/urls"),
        ("delete", "DELETE /api/urls/{short_code}"),
        ("health", "GET /api/health"),
    ]);

    Json(ServiceInfo {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}

/// Reports liveness together with registry totals.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "message": "URL Shortener API is running",
///   "statistics": { "total_urls": 2, "total_clicks": 5, "average_clicks": 2.5 }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let statistics = state.stats_service.summary().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        message: format!("{SERVICE_NAME} is running"),
        statistics,
    })
}
