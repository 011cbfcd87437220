//! Route definitions for the `/api/sponsorships` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::sponsorships;
use crate::state::AppState;

/// Routes mounted at `/api/sponsorships`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sponsorships::list).post(sponsorships::create))
        .route("/{id}", delete(sponsorships::delete))
}
