//! Repository for the `companies` table.

use derby_core::types::DbId;
use sqlx::PgPool;

use crate::models::company::Company;

/// Column list for companies queries.
const COLUMNS: &str = "id, name, contact, status, notes";

/// Provides CRUD operations for companies.
pub struct CompanyRepo;

impl CompanyRepo {
    /// List all companies, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies ORDER BY id DESC");
        sqlx::query_as::<_, Company>(&query).fetch_all(pool).await
    }

    /// Insert a company, returning the created row.
    ///
    /// Inputs are expected to be normalized already (trimmed name, status
    /// defaulted, blank optionals collapsed to NULL).
    pub async fn create(
        pool: &PgPool,
        name: &str,
        contact: Option<&str>,
        status: &str,
        notes: Option<&str>,
    ) -> Result<Company, sqlx::Error> {
        let query = format!(
            "INSERT INTO companies (name, contact, status, notes)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(name)
            .bind(contact)
            .bind(status)
            .bind(notes)
            .fetch_one(pool)
            .await
    }

    /// Overwrite every column of a company, returning the updated row.
    ///
    /// Full-replace semantics: there is no partial update.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        name: &str,
        contact: Option<&str>,
        status: &str,
        notes: Option<&str>,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query = format!(
            "UPDATE companies
             SET name = $1, contact = $2, status = $3, notes = $4
             WHERE id = $5
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(name)
            .bind(contact)
            .bind(status)
            .bind(notes)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a company by ID. Returns `true` if a row was removed.
    ///
    /// Dependent sponsorships are removed by the store's ON DELETE CASCADE.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
