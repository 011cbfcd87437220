//! Repository for the single-row `canva_tokens` table.

use sqlx::PgPool;

use crate::models::canva_token::CanvaToken;

/// Provides load/save for the deployment's single Canva token slot.
///
/// Saves are an upsert on the fixed row id; concurrent writers resolve
/// last-write-wins, which is the intended discipline for this
/// single-admin deployment.
pub struct CanvaTokenRepo;

impl CanvaTokenRepo {
    /// Load the stored token, if one exists.
    pub async fn load(pool: &PgPool) -> Result<Option<CanvaToken>, sqlx::Error> {
        sqlx::query_as::<_, CanvaToken>(
            "SELECT token_data, saved_at FROM canva_tokens WHERE id = 1",
        )
        .fetch_optional(pool)
        .await
    }

    /// Overwrite the token slot with a fresh provider response.
    pub async fn save(
        pool: &PgPool,
        token_data: &serde_json::Value,
    ) -> Result<CanvaToken, sqlx::Error> {
        sqlx::query_as::<_, CanvaToken>(
            "INSERT INTO canva_tokens (id, token_data, saved_at)
             VALUES (1, $1, now())
             ON CONFLICT (id) DO UPDATE
             SET token_data = EXCLUDED.token_data, saved_at = EXCLUDED.saved_at
             RETURNING token_data, saved_at",
        )
        .bind(token_data)
        .fetch_one(pool)
        .await
    }
}
