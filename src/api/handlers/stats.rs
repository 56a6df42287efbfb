//! Handler for per-link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the current record for a short code without counting a click.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// # Response
///
/// ```json
/// {
///   "short_code": "aB3dE9",
///   "original_url": "https://example.com/a",
///   "click_count": 3,
///   "created_at": "2026-01-17T13:40:00Z",
///   "updated_at": "2026-01-17T14:02:11Z",
///   "short_url": "http://localhost:3000/aB3dE9"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the code is malformed or unknown.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let record = state.stats_service.get_stats(&code).await?;

    Ok(Json(StatsResponse::from_record(record, &state.base_url)))
}
