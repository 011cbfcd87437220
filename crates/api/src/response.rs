//! Shared response types for API handlers.

use serde::Serialize;

/// Standard `{ "success": true }` acknowledgement for delete endpoints.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

impl DeleteResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
