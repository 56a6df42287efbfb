//! DTOs for per-link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlRecord;

/// Current state of a single short link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub short_code: String,
    pub original_url: String,
    pub click_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub short_url: String,
}

impl StatsResponse {
    pub fn from_record(record: UrlRecord, base_url: &str) -> Self {
        let short_url = record.short_url(base_url);

        Self {
            short_code: record.short_code,
            original_url: record.original_url,
            click_count: record.click_count,
            created_at: record.created_at,
            updated_at: record.updated_at,
            short_url,
        }
    }
}
