//! Infrastructure layer for storage.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`memory`] - Lock-guarded in-memory registry

pub mod memory;
