//! # Short Link Registry
//!
//! An in-memory URL shortener built with Axum. Long URLs are mapped to
//! six-character alphanumeric codes; shortening the same URL twice returns
//! the same code, and every resolution through a code counts one click.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Records, registry errors and the repository trait
//! - **Application Layer** ([`application`]) - URL validation, logging and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - The lock-guarded in-memory registry
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="https://s.example.com"  # Optional
//! cargo run
//!
//! curl -X POST localhost:3000/api/shorten \
//!      -H 'content-type: application/json' \
//!      -d '{"url": "https://www.rust-lang.org/learn"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, StatsService};
    pub use crate::domain::RegistryError;
    pub use crate::domain::entities::{Registration, RegistrySummary, UrlRecord};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::InMemoryLinkRepository;
    pub use crate::state::AppState;
}
