//! JSON responses for unmatched routes and methods.

use serde_json::json;

use crate::error::AppError;

pub async fn not_found_handler() -> AppError {
    AppError::not_found(
        "Endpoint not found",
        json!({ "message": "The requested resource was not found on this server." }),
    )
}

pub async fn method_not_allowed_handler() -> AppError {
    AppError::method_not_allowed(
        "Method not allowed",
        json!({ "message": "The method is not allowed for the requested URL." }),
    )
}
