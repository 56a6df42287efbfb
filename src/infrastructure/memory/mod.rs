//! In-memory registry implementation.
//!
//! Concrete implementation of [`crate::domain::repositories::LinkRepository`]
//! backed by two hash maps behind a single lock.
//!
//! # Repositories
//!
//! - [`InMemoryLinkRepository`] - Short link registration, resolution and listing

pub mod memory_link_repository;

pub use memory_link_repository::{DEFAULT_MAX_CODE_ATTEMPTS, InMemoryLinkRepository};
