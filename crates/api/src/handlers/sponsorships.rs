//! Handlers for the `/api/sponsorships` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use derby_core::company::none_if_blank;
use derby_core::error::CoreError;
use derby_core::sponsorship::coerce_value;
use derby_core::types::DbId;
use derby_db::models::sponsorship::{CreateSponsorship, NewSponsorship};
use derby_db::repositories::SponsorshipRepo;

use crate::error::{AppError, AppResult};
use crate::response::DeleteResponse;
use crate::state::AppState;

/// GET /api/sponsorships
///
/// List all sponsorships, newest first, with camelCase field names
/// (`companyId`, `createdAt`).
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let sponsorships = SponsorshipRepo::list(&state.pool).await?;
    Ok(Json(sponsorships))
}

/// POST /api/sponsorships
///
/// Create a sponsorship. `companyId` is required; `value` accepts a number
/// or numeric string and defaults to 0 when absent, null, or blank (an
/// explicit 0 and an omitted value are indistinguishable). A `companyId`
/// that references no company trips the store's foreign key and surfaces
/// as a generic server error.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSponsorship>,
) -> AppResult<impl IntoResponse> {
    let company_id = input.company_id.ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "companyId is required for sponsorship".into(),
        ))
    })?;

    let value = coerce_value(input.value.as_ref())?;

    let sponsorship = SponsorshipRepo::create(
        &state.pool,
        &NewSponsorship {
            company_id,
            r#type: none_if_blank(input.r#type),
            value,
            item: none_if_blank(input.item),
            notes: none_if_blank(input.notes),
        },
    )
    .await?;

    tracing::info!(
        sponsorship_id = sponsorship.id,
        company_id,
        value,
        "Sponsorship created"
    );

    Ok((StatusCode::CREATED, Json(sponsorship)))
}

/// DELETE /api/sponsorships/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = SponsorshipRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Sponsorship",
            id,
        }));
    }

    tracing::info!(sponsorship_id = id, "Sponsorship deleted");

    Ok(Json(DeleteResponse::ok()))
}
