//! REST client for the Canva OAuth and asset endpoints.
//!
//! Wraps the authorization-code exchange and authenticated asset listing
//! using [`reqwest`]. Authorization-URL construction lives here too so the
//! api crate never assembles provider URLs by hand.

mod api;

pub use api::{CanvaApi, CanvaApiError};

/// Build the provider authorization URL for the code grant.
///
/// Query parameters are percent-encoded via [`reqwest::Url`].
pub fn authorization_url(
    auth_url: &str,
    client_id: &str,
    redirect_uri: &str,
    scope: &str,
) -> Result<String, CanvaApiError> {
    let url = reqwest::Url::parse_with_params(
        auth_url,
        &[
            ("response_type", "code"),
            ("client_id", client_id),
            ("redirect_uri", redirect_uri),
            ("scope", scope),
        ],
    )
    .map_err(|e| CanvaApiError::InvalidUrl(e.to_string()))?;
    Ok(url.into())
}
