//! HTTP client for the Canva token and asset endpoints.

use serde_json::Value;

/// Client for a configured Canva deployment (token + asset endpoints).
pub struct CanvaApi {
    client: reqwest::Client,
    token_url: String,
    assets_url: String,
}

/// Errors from the Canva REST layer.
#[derive(Debug, thiserror::Error)]
pub enum CanvaApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Canva returned a non-2xx status code.
    #[error("Canva API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for logging; never relayed to API callers.
        body: String,
    },

    /// A configured endpoint URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl CanvaApi {
    /// Create a client for the given token and asset endpoint URLs.
    pub fn new(token_url: String, assets_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token_url,
            assets_url,
        }
    }

    /// Exchange an authorization code for a token.
    ///
    /// Sends the form-encoded code-grant POST to the token endpoint and
    /// returns the provider's token response verbatim.
    pub async fn exchange_code(
        &self,
        code: &str,
        client_id: &str,
        client_secret: &str,
        redirect_uri: &str,
    ) -> Result<Value, CanvaApiError> {
        let form = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("redirect_uri", redirect_uri),
        ];

        let response = self
            .client
            .post(&self.token_url)
            .form(&form)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// List assets using a bearer access token.
    ///
    /// The provider's payload is returned verbatim; callers are responsible
    /// for tolerating its envelope shape.
    pub async fn list_assets(&self, access_token: &str) -> Result<Value, CanvaApiError> {
        let response = self
            .client
            .get(&self.assets_url)
            .bearer_auth(access_token)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Read a response body, mapping non-2xx statuses to [`CanvaApiError::Api`].
    async fn parse_response(response: reqwest::Response) -> Result<Value, CanvaApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CanvaApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}
