//! Link shortening and resolution service.

use std::sync::Arc;

use crate::domain::entities::{Registration, UrlRecord};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::is_valid_short_code;
use crate::utils::url_normalizer::normalize_url;
use serde_json::json;
use tracing::{debug, error, info};

/// Message returned for codes that cannot possibly exist.
pub const INVALID_CODE_MESSAGE: &str =
    "Invalid short code format. Must be 6 alphanumeric characters.";

/// Service for shortening URLs and following short links.
///
/// Validates and normalizes input before it reaches the registry, so the
/// registry only ever sees canonical URLs and well-formed codes.
pub struct LinkService<L: LinkRepository> {
    repository: Arc<L>,
    max_url_length: usize,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(repository: Arc<L>, max_url_length: usize) -> Self {
        Self {
            repository,
            max_url_length,
        }
    }

    /// Shortens a URL, reusing the existing code if it was shortened before.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL fails validation.
    /// Returns [`AppError::Internal`] if no unique code could be generated.
    pub async fn shorten(&self, long_url: &str) -> Result<Registration, AppError> {
        let normalized_url = normalize_url(long_url, self.max_url_length)?;

        let registration = self
            .repository
            .register(&normalized_url)
            .await
            .inspect_err(|e| error!("Failed to register '{}': {}", normalized_url, e))?;

        match &registration {
            Registration::Created(record) => info!(
                "Created short code '{}' for URL '{}'",
                record.short_code, record.original_url
            ),
            Registration::Existing(record) => debug!(
                "URL '{}' already shortened as '{}'",
                record.original_url, record.short_code
            ),
        }

        Ok(registration)
    }

    /// Follows a short code, counting one click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is malformed or unknown.
    pub async fn resolve(&self, code: &str) -> Result<UrlRecord, AppError> {
        ensure_code_format(code)?;

        let record = self.repository.resolve(code).await?;
        info!(
            "Redirecting '{}' to '{}' (click #{})",
            record.short_code, record.original_url, record.click_count
        );

        Ok(record)
    }

    /// Deletes a short link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is malformed or unknown.
    pub async fn remove(&self, code: &str) -> Result<(), AppError> {
        ensure_code_format(code)?;

        if !self.repository.remove(code).await {
            return Err(AppError::not_found(
                "Short code not found",
                json!({ "short_code": code }),
            ));
        }

        info!("Removed short code '{}'", code);
        Ok(())
    }
}

/// Rejects codes that cannot exist as a plain lookup miss.
pub(crate) fn ensure_code_format(code: &str) -> Result<(), AppError> {
    if is_valid_short_code(code) {
        Ok(())
    } else {
        Err(AppError::not_found(
            INVALID_CODE_MESSAGE,
            json!({ "short_code": code }),
        ))
    }
}
