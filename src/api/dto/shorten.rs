//! DTOs for link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Registration;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten. Scheme may be omitted; `http://` is assumed.
    #[validate(length(min = 1, message = "Missing 'url' field in request body"))]
    pub url: String,
}

/// Result of a shortening request.
///
/// `message` is only present when the URL had been shortened before.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ShortenResponse {
    pub fn from_registration(registration: &Registration, base_url: &str) -> Self {
        let record = registration.record();
        let message = (!registration.is_created()).then(|| "URL was already shortened".to_string());

        Self {
            short_code: record.short_code.clone(),
            short_url: record.short_url(base_url),
            original_url: record.original_url.clone(),
            created_at: record.created_at,
            message,
        }
    }
}
