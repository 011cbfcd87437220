//! Sponsorship model and DTOs.
//!
//! Storage columns are snake_case; the wire contract is camelCase
//! (`companyId`, `createdAt`), so the row model serializes with a rename.

use derby_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `sponsorships` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Sponsorship {
    pub id: DbId,
    pub company_id: DbId,
    #[sqlx(rename = "type")]
    pub r#type: Option<String>,
    pub value: f64,
    pub item: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new sponsorship.
///
/// `value` stays a raw JSON value here; the handler coerces it through
/// [`derby_core::sponsorship::coerce_value`] so a numeric string and a
/// number are accepted alike.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSponsorship {
    pub company_id: Option<DbId>,
    pub r#type: Option<String>,
    pub value: Option<serde_json::Value>,
    pub item: Option<String>,
    pub notes: Option<String>,
}

/// Insert input after boundary coercion.
#[derive(Debug)]
pub struct NewSponsorship {
    pub company_id: DbId,
    pub r#type: Option<String>,
    pub value: f64,
    pub item: Option<String>,
    pub notes: Option<String>,
}
