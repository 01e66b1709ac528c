//! Handlers for the custom priority and custom type catalogs.
//!
//! Both catalogs have the same shape: per-production, per-module ordered
//! value lists. The priority catalog additionally drives the filter &
//! sort engine's priority ranking.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use lxnotes_core::error::CoreError;
use lxnotes_core::notes::validate_module_type;
use lxnotes_core::types::DbId;
use lxnotes_db::models::catalog::{CreateCatalogEntry, UpdateCatalogEntry};
use lxnotes_db::repositories::{CustomPriorityRepo, CustomTypeRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::notes::ensure_production_exists;
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
   Query filters
   -------------------------------------------------------------------------- */

/// Required scope for listing catalog entries.
#[derive(Debug, Deserialize)]
pub struct CatalogListParams {
    pub production_id: DbId,
    pub module_type: String,
}

/* --------------------------------------------------------------------------
   Validation
   -------------------------------------------------------------------------- */

fn validate_catalog_entry(input: &CreateCatalogEntry) -> Result<(), CoreError> {
    validate_module_type(&input.module_type)?;
    if input.value.trim().is_empty() {
        return Err(CoreError::Validation(
            "Catalog value must not be empty".to_string(),
        ));
    }
    if input.label.trim().is_empty() {
        return Err(CoreError::Validation(
            "Catalog label must not be empty".to_string(),
        ));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
   Priority catalog
   -------------------------------------------------------------------------- */

/// GET /custom-priorities
///
/// List priority entries for a production module, ordered by rank.
pub async fn list_priorities(
    State(state): State<AppState>,
    Query(params): Query<CatalogListParams>,
) -> AppResult<impl IntoResponse> {
    validate_module_type(&params.module_type)?;

    let entries =
        CustomPriorityRepo::list_by_module(&state.pool, params.production_id, &params.module_type)
            .await?;
    Ok(Json(DataResponse { data: entries }))
}

/// POST /custom-priorities
pub async fn create_priority(
    State(state): State<AppState>,
    Json(input): Json<CreateCatalogEntry>,
) -> AppResult<impl IntoResponse> {
    validate_catalog_entry(&input)?;
    ensure_production_exists(&state.pool, input.production_id).await?;

    let entry = CustomPriorityRepo::create(&state.pool, &input).await?;

    tracing::info!(
        priority_id = entry.id,
        production_id = entry.production_id,
        value = %entry.value,
        "Custom priority created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// PUT /custom-priorities/{id}
pub async fn update_priority(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCatalogEntry>,
) -> AppResult<impl IntoResponse> {
    let entry = CustomPriorityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CustomPriority",
            id,
        }))?;

    tracing::info!(priority_id = entry.id, "Custom priority updated");
    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /custom-priorities/{id}
///
/// Notes already carrying the deleted value keep it; the value simply
/// loses its catalog rank and sorts last.
pub async fn delete_priority(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CustomPriorityRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "CustomPriority",
            id,
        }));
    }

    tracing::info!(priority_id = id, "Custom priority deleted");
    Ok(StatusCode::NO_CONTENT)
}

/* --------------------------------------------------------------------------
   Type catalog
   -------------------------------------------------------------------------- */

/// GET /custom-types
pub async fn list_types(
    State(state): State<AppState>,
    Query(params): Query<CatalogListParams>,
) -> AppResult<impl IntoResponse> {
    validate_module_type(&params.module_type)?;

    let entries =
        CustomTypeRepo::list_by_module(&state.pool, params.production_id, &params.module_type)
            .await?;
    Ok(Json(DataResponse { data: entries }))
}

/// POST /custom-types
pub async fn create_type(
    State(state): State<AppState>,
    Json(input): Json<CreateCatalogEntry>,
) -> AppResult<impl IntoResponse> {
    validate_catalog_entry(&input)?;
    ensure_production_exists(&state.pool, input.production_id).await?;

    let entry = CustomTypeRepo::create(&state.pool, &input).await?;

    tracing::info!(
        type_id = entry.id,
        production_id = entry.production_id,
        value = %entry.value,
        "Custom type created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// PUT /custom-types/{id}
pub async fn update_type(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCatalogEntry>,
) -> AppResult<impl IntoResponse> {
    let entry = CustomTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CustomType",
            id,
        }))?;

    tracing::info!(type_id = entry.id, "Custom type updated");
    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /custom-types/{id}
pub async fn delete_type(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CustomTypeRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "CustomType",
            id,
        }));
    }

    tracing::info!(type_id = id, "Custom type deleted");
    Ok(StatusCode::NO_CONTENT)
}
