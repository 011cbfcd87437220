//! Handlers for the `/api/companies` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use derby_core::company::{none_if_blank, resolve_status, validate_name};
use derby_core::error::CoreError;
use derby_core::types::DbId;
use derby_db::models::company::{CreateCompany, UpdateCompany};
use derby_db::repositories::CompanyRepo;

use crate::error::{AppError, AppResult};
use crate::response::DeleteResponse;
use crate::state::AppState;

/// GET /api/companies
///
/// List all companies, newest first. Unbounded; there is no pagination.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let companies = CompanyRepo::list(&state.pool).await?;
    Ok(Json(companies))
}

/// POST /api/companies
///
/// Create a company. The name is trimmed and must be non-empty; a blank
/// status defaults to "Potential", blank optionals collapse to NULL.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCompany>,
) -> AppResult<impl IntoResponse> {
    let name = validate_name(&input.name)?;
    let status = resolve_status(input.status);
    let contact = none_if_blank(input.contact);
    let notes = none_if_blank(input.notes);

    let company = CompanyRepo::create(
        &state.pool,
        &name,
        contact.as_deref(),
        &status,
        notes.as_deref(),
    )
    .await?;

    tracing::info!(company_id = company.id, name = %company.name, "Company created");

    Ok((StatusCode::CREATED, Json(company)))
}

/// PUT /api/companies/{id}
///
/// Full-replace update: every column is overwritten with the supplied
/// value or its default. A request that omits `status` resets it to
/// "Potential" even if the stored value was "Confirmed".
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCompany>,
) -> AppResult<impl IntoResponse> {
    let status = resolve_status(input.status);
    let contact = none_if_blank(input.contact);
    let notes = none_if_blank(input.notes);

    let company = CompanyRepo::update(
        &state.pool,
        id,
        &input.name,
        contact.as_deref(),
        &status,
        notes.as_deref(),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Company",
        id,
    }))?;

    tracing::info!(company_id = id, "Company updated");

    Ok(Json(company))
}

/// DELETE /api/companies/{id}
///
/// Delete a company; the store cascades removal of its sponsorships.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CompanyRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Company",
            id,
        }));
    }

    tracing::info!(company_id = id, "Company deleted");

    Ok(Json(DeleteResponse::ok()))
}
