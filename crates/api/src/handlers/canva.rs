//! Handlers for the Canva OAuth bridge.
//!
//! A single token slot serves the whole deployment: the callback
//! overwrites it on every successful exchange (last write wins), and the
//! asset listing reads it without any expiry check. There is no refresh
//! flow.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use derby_canva::{authorization_url, CanvaApiError};
use derby_core::error::CoreError;
use derby_db::repositories::CanvaTokenRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for the OAuth callback.
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
}

/// GET /auth/canva
///
/// Redirect the caller to the provider's authorization page.
pub async fn connect(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let canva = &state.config.canva;

    let client_id = canva.client_id.as_deref().ok_or_else(|| {
        AppError::Core(CoreError::Configuration("CANVA_CLIENT_ID is not set".into()))
    })?;

    let url = authorization_url(&canva.auth_url, client_id, &canva.redirect_uri, &canva.scope)
        .map_err(|e| AppError::Core(CoreError::Configuration(e.to_string())))?;

    Ok(found(&url))
}

/// GET /auth/canva/callback?code=...
///
/// Exchange the authorization code for a token, persist it, and send the
/// caller back to the front end with a connection marker.
pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> AppResult<impl IntoResponse> {
    let code = params.code.ok_or_else(|| {
        AppError::Core(CoreError::Validation("Missing authorization code".into()))
    })?;

    let canva = &state.config.canva;
    let client_id = canva.client_id.as_deref().ok_or_else(|| {
        AppError::Core(CoreError::Configuration("CANVA_CLIENT_ID is not set".into()))
    })?;
    let client_secret = canva.client_secret.as_deref().ok_or_else(|| {
        AppError::Core(CoreError::Configuration(
            "CANVA_CLIENT_SECRET is not set".into(),
        ))
    })?;

    let token_data = state
        .canva
        .exchange_code(&code, client_id, client_secret, &canva.redirect_uri)
        .await
        .map_err(|err| {
            log_upstream_error("Canva token exchange failed", &err);
            AppError::InternalError("Canva token exchange failed".into())
        })?;

    CanvaTokenRepo::save(&state.pool, &token_data).await?;

    tracing::info!("Canva token stored");

    let frontend = state.config.canva.frontend_url.trim_end_matches('/');
    Ok(found(&format!("{frontend}/?canva=connected")))
}

/// GET /api/canva/assets
///
/// Relay the provider's asset listing verbatim. The client tolerates the
/// payload's envelope shape (bare list, `data`, or `assets` field).
pub async fn list_assets(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let token = CanvaTokenRepo::load(&state.pool)
        .await?
        .ok_or_else(not_connected)?;

    let access_token = token
        .access_token()
        .ok_or_else(not_connected)?
        .to_string();

    let assets = state.canva.list_assets(&access_token).await.map_err(|err| {
        log_upstream_error("Canva asset request failed", &err);
        AppError::BadGateway("Canva asset request failed".into())
    })?;

    Ok(Json(assets))
}

/// A plain 302 Found redirect. `axum::response::Redirect` only offers 303,
/// 307, and 308; the browser flow here expects the classic 302.
fn found(location: &str) -> impl IntoResponse {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_string())],
    )
}

fn not_connected() -> AppError {
    AppError::Core(CoreError::Unauthorized("Canva is not connected".into()))
}

/// Log an upstream failure with its body; the caller only ever sees a
/// generic message.
fn log_upstream_error(context: &str, err: &CanvaApiError) {
    match err {
        CanvaApiError::Api { status, body } => {
            tracing::error!(status, body = %body, "{context}");
        }
        other => {
            tracing::error!(error = %other, "{context}");
        }
    }
}
