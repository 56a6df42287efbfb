//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};
use crate::infrastructure::memory::InMemoryLinkRepository;

/// Handles to the services built around one registry instance.
///
/// Cloning is cheap; every clone refers to the same registry.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<InMemoryLinkRepository>>,
    pub stats_service: Arc<StatsService<InMemoryLinkRepository>>,
    /// Public address short links are built under, without trailing slash.
    pub base_url: Arc<str>,
}

impl AppState {
    /// Wires both services to `repository`.
    pub fn new(
        repository: Arc<InMemoryLinkRepository>,
        base_url: &str,
        max_url_length: usize,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository.clone(), max_url_length)),
            stats_service: Arc::new(StatsService::new(repository)),
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }
}
