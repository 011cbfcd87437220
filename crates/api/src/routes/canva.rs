//! Route definitions for the Canva OAuth bridge.
//!
//! The auth endpoints live outside `/api` because the provider redirects
//! a browser to them directly.

use axum::routing::get;
use axum::Router;

use crate::handlers::canva;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET /auth/canva            -> connect (302 to provider)
/// GET /auth/canva/callback   -> callback (302 to front end)
/// GET /api/canva/assets      -> list_assets (passthrough)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/canva", get(canva::connect))
        .route("/auth/canva/callback", get(canva::callback))
        .route("/api/canva/assets", get(canva::list_assets))
}
