//! API route configuration.

use crate::api::handlers::{
    delete_link_handler, health_handler, list_links_handler, shorten_handler, stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All routes mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /health`        - Liveness plus registry totals
/// - `POST   /shorten`       - Create (or reuse) a short link
/// - `GET    /stats/{code}`  - Current record for a link, without counting a click
/// - `GET    /urls`          - List links, newest first (paginated)
/// - `DELETE /urls/{code}`   - Remove a link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/urls", get(list_links_handler))
        .route("/urls/{code}", delete(delete_link_handler))
}
