//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures; the registry that owns them lives in
//! [`crate::infrastructure::memory`].
//!
//! # Entity Types
//!
//! - [`UrlRecord`] - A registered URL with its short code and click counter
//! - [`Registration`] - Outcome of registering a URL (created or already present)
//! - [`RegistrySummary`] - Aggregate totals across all records

pub mod url_record;

pub use url_record::{Registration, RegistrySummary, UrlRecord};
