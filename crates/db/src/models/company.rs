//! Company model and DTOs.

use derby_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `companies` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Company {
    pub id: DbId,
    pub name: String,
    pub contact: Option<String>,
    pub status: String,
    pub notes: Option<String>,
}

/// DTO for creating a new company.
#[derive(Debug, Deserialize)]
pub struct CreateCompany {
    pub name: String,
    pub contact: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating a company.
///
/// Updates are full-replace: every column is overwritten with the supplied
/// value or its default (`status` falls back to "Potential", optional text
/// fields to NULL). Clients must resend the whole record.
#[derive(Debug, Deserialize)]
pub struct UpdateCompany {
    pub name: String,
    pub contact: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}
