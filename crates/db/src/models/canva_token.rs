//! Canva token record model.

use derby_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// The single persisted Canva OAuth token for this deployment.
///
/// `token_data` holds the provider's token response verbatim; nothing here
/// tracks expiry, and there is no refresh flow.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CanvaToken {
    pub token_data: serde_json::Value,
    pub saved_at: Timestamp,
}

impl CanvaToken {
    /// The bearer credential inside the stored provider response, if any.
    pub fn access_token(&self) -> Option<&str> {
        self.token_data.get("access_token").and_then(|v| v.as_str())
    }
}
