//! Read-only statistics over the registry.

use std::sync::Arc;

use crate::application::services::link_service::ensure_code_format;
use crate::domain::entities::{RegistrySummary, UrlRecord};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Service for inspecting registered links without counting clicks.
pub struct StatsService<L: LinkRepository> {
    repository: Arc<L>,
}

impl<L: LinkRepository> StatsService<L> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<L>) -> Self {
        Self { repository }
    }

    /// Returns the current record for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is malformed or unknown.
    pub async fn get_stats(&self, code: &str) -> Result<UrlRecord, AppError> {
        ensure_code_format(code)?;

        Ok(self.repository.stats(code).await?)
    }

    /// Returns one page of records, newest first, plus the total count.
    ///
    /// `offset` past the end yields an empty page.
    pub async fn list(&self, offset: usize, limit: usize) -> (Vec<UrlRecord>, usize) {
        let records = self.repository.list().await;
        let total = records.len();

        let page = records.into_iter().skip(offset).take(limit).collect();
        (page, total)
    }

    /// Aggregate totals for health reporting.
    pub async fn summary(&self) -> RegistrySummary {
        self.repository.summary().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RegistryError;
    use crate::domain::repositories::MockLinkRepository;

    fn records(count: usize) -> Vec<UrlRecord> {
        (0..count)
            .map(|i| UrlRecord::new(format!("code{i:02}"), format!("https://example.com/{i}")))
            .collect()
    }

    #[tokio::test]
    async fn test_get_stats_success() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_stats()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|code| {
                Ok(UrlRecord::new(
                    code.to_string(),
                    "https://example.com/".to_string(),
                ))
            });
        mock_repo.expect_resolve().times(0);

        let service = StatsService::new(Arc::new(mock_repo));
        let record = service.get_stats("abc123").await.unwrap();

        assert_eq!(record.short_code, "abc123");
        assert_eq!(record.click_count, 0);
    }

    #[tokio::test]
    async fn test_get_stats_not_found() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_stats()
            .times(1)
            .returning(|code| Err(RegistryError::not_found(code)));

        let service = StatsService::new(Arc::new(mock_repo));
        let result = service.get_stats("ZZZZZZ").await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_get_stats_malformed_code() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_stats().times(0);

        let service = StatsService::new(Arc::new(mock_repo));

        assert!(service.get_stats("nope").await.is_err());
    }

    #[tokio::test]
    async fn test_list_paginates() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_list().returning(|| records(30));

        let service = StatsService::new(Arc::new(mock_repo));

        let (first, total) = service.list(0, 25).await;
        assert_eq!(total, 30);
        assert_eq!(first.len(), 25);
        assert_eq!(first[0].short_code, "code00");

        let (second, _) = service.list(25, 25).await;
        assert_eq!(second.len(), 5);

        let (beyond, _) = service.list(100, 25).await;
        assert!(beyond.is_empty());
    }

    #[tokio::test]
    async fn test_summary_delegates() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_summary()
            .times(1)
            .returning(|| RegistrySummary::from_totals(2, 6));

        let service = StatsService::new(Arc::new(mock_repo));
        let summary = service.summary().await;

        assert_eq!(summary.total_urls, 2);
        assert_eq!(summary.average_clicks, 3.0);
    }
}
