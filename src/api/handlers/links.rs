//! Handlers for listing and removing links.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;

use crate::api::dto::links::{DeleteLinkResponse, LinkListResponse, PaginationMeta};
use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists registered links, newest first.
///
/// # Endpoint
///
/// `GET /api/urls`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1)
/// - `page_size` (optional): Items per page (default: 25, max: 1000)
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are invalid.
pub async fn list_links_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<LinkListResponse>, AppError> {
    let (offset, limit) = params
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let (records, total_items) = state.stats_service.list(offset, limit).await;

    let items = records
        .into_iter()
        .map(|record| StatsResponse::from_record(record, &state.base_url))
        .collect();

    Ok(Json(LinkListResponse {
        pagination: PaginationMeta::new(params.page(), params.page_size(), total_items),
        items,
    }))
}

/// Removes a short link.
///
/// # Endpoint
///
/// `DELETE /api/urls/{code}`
///
/// After removal the code stops resolving and the URL may be shortened again,
/// receiving a fresh code.
///
/// # Errors
///
/// Returns 404 Not Found if the code is malformed or unknown.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<DeleteLinkResponse>, AppError> {
    state.link_service.remove(&code).await?;

    Ok(Json(DeleteLinkResponse {
        message: "Short link deleted successfully".to_string(),
        short_code: code,
    }))
}
