//! Registry failure taxonomy.

/// Typed failures returned by registry operations.
///
/// Neither variant leaves the registry in an unusable state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No live record exists for the requested short code.
    #[error("short code '{code}' not found")]
    NotFound { code: String },

    /// Every generated candidate code collided with a live record.
    #[error("failed to generate a unique short code after {attempts} attempts")]
    CodeSpaceExhausted { attempts: usize },
}

impl RegistryError {
    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }
}
