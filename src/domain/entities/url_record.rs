//! URL record entity representing a registered short link.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A registered URL with its short code and click counter.
///
/// Records are owned by the registry; callers only ever receive snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlRecord {
    pub short_code: String,
    pub original_url: String,
    pub click_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a fresh record with a zero click counter.
    pub fn new(short_code: String, original_url: String) -> Self {
        let now = Utc::now();
        Self {
            short_code,
            original_url,
            click_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Increments the click counter by one and refreshes `updated_at`.
    pub fn record_click(&mut self) {
        self.click_count += 1;
        self.updated_at = Utc::now();
    }

    /// Builds the public short link for this record under `base_url`.
    pub fn short_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.short_code)
    }
}

/// Outcome of registering a URL.
///
/// Both variants carry the live record for the URL. `Existing` means the URL was
/// already registered and nothing in the registry changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Created(UrlRecord),
    Existing(UrlRecord),
}

impl Registration {
    /// Returns true if this call inserted a new record.
    pub fn is_created(&self) -> bool {
        matches!(self, Registration::Created(_))
    }

    pub fn record(&self) -> &UrlRecord {
        match self {
            Registration::Created(record) | Registration::Existing(record) => record,
        }
    }

    pub fn into_record(self) -> UrlRecord {
        match self {
            Registration::Created(record) | Registration::Existing(record) => record,
        }
    }
}

/// Aggregate totals across all live records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegistrySummary {
    pub total_urls: usize,
    pub total_clicks: u64,
    pub average_clicks: f64,
}

impl RegistrySummary {
    /// Computes the average from totals, yielding 0 for an empty registry.
    pub fn from_totals(total_urls: usize, total_clicks: u64) -> Self {
        let average_clicks = if total_urls > 0 {
            total_clicks as f64 / total_urls as f64
        } else {
            0.0
        };

        Self {
            total_urls,
            total_clicks,
            average_clicks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_record_creation() {
        let record = UrlRecord::new("abc123".to_string(), "https://example.com/".to_string());

        assert_eq!(record.short_code, "abc123");
        assert_eq!(record.original_url, "https://example.com/");
        assert_eq!(record.click_count, 0);
        assert_eq!(record.created_at, record.updated_at);
    }

    #[test]
    fn test_record_click_increments_and_touches() {
        let mut record = UrlRecord::new("abc123".to_string(), "https://example.com/".to_string());
        let created_at = record.created_at;

        record.record_click();
        record.record_click();

        assert_eq!(record.click_count, 2);
        assert_eq!(record.created_at, created_at);
        assert!(record.updated_at >= created_at);
    }

    #[test]
    fn test_short_url_trims_trailing_slash() {
        let record = UrlRecord::new("Xy12Ab".to_string(), "https://example.com/".to_string());

        assert_eq!(record.short_url("https://s.test/"), "https://s.test/Xy12Ab");
        assert_eq!(record.short_url("https://s.test"), "https://s.test/Xy12Ab");
    }

    #[test]
    fn test_registration_accessors() {
        let record = UrlRecord::new("abc123".to_string(), "https://example.com/".to_string());

        let created = Registration::Created(record.clone());
        let existing = Registration::Existing(record.clone());

        assert!(created.is_created());
        assert!(!existing.is_created());
        assert_eq!(created.record(), &record);
        assert_eq!(existing.into_record(), record);
    }

    #[test]
    fn test_summary_average() {
        let summary = RegistrySummary::from_totals(4, 10);
        assert_eq!(summary.average_clicks, 2.5);

        let empty = RegistrySummary::from_totals(0, 0);
        assert_eq!(empty.average_clicks, 0.0);
    }
}
