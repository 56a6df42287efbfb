//! Repository trait for short link registry access.

use crate::domain::RegistryError;
use crate::domain::entities::{Registration, RegistrySummary, UrlRecord};
use async_trait::async_trait;

/// Registry interface mapping long URLs to short codes.
///
/// Every method is atomic with respect to every other method on the same
/// repository. Implementations keep the code index and the URL index
/// consistent: no two live records share a code, and no two share a URL.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryLinkRepository`] - lock-guarded maps
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Registers a normalized URL, or returns the record it already has.
    ///
    /// Concurrent calls with the same URL create at most one record.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::CodeSpaceExhausted`] if every candidate code
    /// collided with a live record.
    async fn register(&self, url: &str) -> Result<Registration, RegistryError>;

    /// Looks up a code and counts one click against it.
    ///
    /// Returns the record as it is after the increment.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no live record has this code.
    async fn resolve(&self, code: &str) -> Result<UrlRecord, RegistryError>;

    /// Looks up a code without touching its click counter.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no live record has this code.
    async fn stats(&self, code: &str) -> Result<UrlRecord, RegistryError>;

    /// Returns every live record, newest first.
    async fn list(&self) -> Vec<UrlRecord>;

    /// Removes a record and its URL index entry.
    ///
    /// Returns `true` if a live record was removed.
    async fn remove(&self, code: &str) -> bool;

    /// Aggregate totals across all live records.
    async fn summary(&self) -> RegistrySummary;
}
