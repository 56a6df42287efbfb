//! Application layer services implementing business logic.
//!
//! This layer validates input and coordinates repository calls. Services consume
//! repository traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Shortening, redirects and removal
//! - [`services::stats_service::StatsService`] - Per-link stats, listing and totals

pub mod services;
