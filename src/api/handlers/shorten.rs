//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/very/long/path" }
/// ```
///
/// # Response
///
/// - **201 Created** - a new short code was allocated
/// - **200 OK** - the URL was already shortened; the existing code is returned
///   with `"message": "URL was already shortened"`
///
/// ```json
/// {
///   "short_code": "aB3dE9",
///   "short_url": "http://localhost:3000/aB3dE9",
///   "original_url": "https://example.com/very/long/path",
///   "created_at": "2026-01-17T13:40:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed body or an unacceptable URL.
/// Returns 500 Internal Server Error if no unique code could be allocated.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let registration = state.link_service.shorten(&payload.url).await?;

    let status = if registration.is_created() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(ShortenResponse::from_registration(
            &registration,
            &state.base_url,
        )),
    ))
}
