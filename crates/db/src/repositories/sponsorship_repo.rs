//! Repository for the `sponsorships` table.

use derby_core::types::DbId;
use sqlx::PgPool;

use crate::models::sponsorship::{NewSponsorship, Sponsorship};

/// Column list for sponsorships queries.
const COLUMNS: &str = "id, company_id, type, value, item, notes, created_at";

/// Provides create/list/delete operations for sponsorships.
///
/// There is no update path: a sponsorship is immutable once created and
/// changes are delete-and-recreate.
pub struct SponsorshipRepo;

impl SponsorshipRepo {
    /// List all sponsorships, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Sponsorship>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sponsorships ORDER BY id DESC");
        sqlx::query_as::<_, Sponsorship>(&query)
            .fetch_all(pool)
            .await
    }

    /// Insert a sponsorship, returning the created row.
    ///
    /// A `company_id` that references no company trips the foreign-key
    /// constraint and surfaces as a database error.
    pub async fn create(
        pool: &PgPool,
        input: &NewSponsorship,
    ) -> Result<Sponsorship, sqlx::Error> {
        let query = format!(
            "INSERT INTO sponsorships (company_id, type, value, item, notes)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sponsorship>(&query)
            .bind(input.company_id)
            .bind(input.r#type.as_deref())
            .bind(input.value)
            .bind(input.item.as_deref())
            .bind(input.notes.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Delete a sponsorship by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sponsorships WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
