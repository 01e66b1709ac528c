//! Handlers for note CRUD and lifecycle.
//!
//! Notes live on one shared table across all four modules; every listing
//! is scoped to a production + module pair. Deletion is soft (sets
//! `deleted_at`) and reversible via restore; hard deletion is a separate
//! permanent endpoint.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use lxnotes_core::error::CoreError;
use lxnotes_core::notes::{
    validate_module_type, validate_note_description, validate_note_status, validate_note_title,
    STATUS_TODO,
};
use lxnotes_core::types::DbId;
use lxnotes_db::models::note::{CreateNote, UpdateNote};
use lxnotes_db::repositories::{NoteRepo, ProductionRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
   Query filters
   -------------------------------------------------------------------------- */

/// Scope for listing notes: production + module required, status optional.
#[derive(Debug, Deserialize)]
pub struct NoteListParams {
    pub production_id: DbId,
    pub module_type: String,
    pub status: Option<String>,
}

/// Optional attribution for soft deletion.
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub deleted_by: Option<DbId>,
}

/// Body for the status transition endpoint.
#[derive(Debug, Deserialize)]
pub struct SetStatusBody {
    pub status: String,
}

/* --------------------------------------------------------------------------
   Helpers
   -------------------------------------------------------------------------- */

/// Ensure a production exists, mapping a missing row to 404.
pub async fn ensure_production_exists(
    pool: &lxnotes_db::DbPool,
    production_id: DbId,
) -> AppResult<()> {
    ProductionRepo::find_by_id(pool, production_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Production",
            id: production_id,
        }))?;
    Ok(())
}

/* --------------------------------------------------------------------------
   Handlers
   -------------------------------------------------------------------------- */

/// GET /notes
///
/// List live notes for a production module in creation order.
pub async fn list_notes(
    State(state): State<AppState>,
    Query(params): Query<NoteListParams>,
) -> AppResult<impl IntoResponse> {
    validate_module_type(&params.module_type)?;
    if let Some(ref status) = params.status {
        validate_note_status(status)?;
    }

    let notes = NoteRepo::list(
        &state.pool,
        params.production_id,
        &params.module_type,
        params.status.as_deref(),
    )
    .await?;
    Ok(Json(DataResponse { data: notes }))
}

/// POST /notes
///
/// Create a note. Status defaults to `todo` when omitted.
pub async fn create_note(
    State(state): State<AppState>,
    Json(mut input): Json<CreateNote>,
) -> AppResult<impl IntoResponse> {
    validate_module_type(&input.module_type)?;
    validate_note_title(&input.title)?;
    if let Some(ref description) = input.description {
        validate_note_description(description)?;
    }
    match input.status {
        Some(ref status) => validate_note_status(status)?,
        None => input.status = Some(STATUS_TODO.to_string()),
    }

    ensure_production_exists(&state.pool, input.production_id).await?;

    let note = NoteRepo::create(&state.pool, &input).await?;

    tracing::info!(
        note_id = note.id,
        production_id = note.production_id,
        module_type = %note.module_type,
        "Note created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: note })))
}

/// GET /notes/{id}
///
/// Get a single note by ID (including soft-deleted notes).
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let note = NoteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Note",
            id,
        }))?;
    Ok(Json(DataResponse { data: note }))
}

/// PUT /notes/{id}
///
/// Update a live note's fields.
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNote>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        validate_note_title(title)?;
    }
    if let Some(ref description) = input.description {
        validate_note_description(description)?;
    }
    if let Some(ref status) = input.status {
        validate_note_status(status)?;
    }

    let note = NoteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Note",
            id,
        }))?;

    tracing::info!(note_id = note.id, "Note updated");
    Ok(Json(DataResponse { data: note }))
}

/// PATCH /notes/{id}/status
///
/// Transition a live note to a new status.
pub async fn set_note_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<SetStatusBody>,
) -> AppResult<impl IntoResponse> {
    validate_note_status(&body.status)?;

    let note = NoteRepo::set_status(&state.pool, id, &body.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Note",
            id,
        }))?;

    tracing::info!(note_id = note.id, status = %note.status, "Note status changed");
    Ok(Json(DataResponse { data: note }))
}

/// DELETE /notes/{id}
///
/// Soft-delete a live note. The row is retained and can be restored.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<DeleteParams>,
) -> AppResult<impl IntoResponse> {
    let note = NoteRepo::soft_delete(&state.pool, id, params.deleted_by)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Note",
            id,
        }))?;

    tracing::info!(note_id = note.id, "Note soft-deleted");
    Ok(Json(DataResponse { data: note }))
}

/// PATCH /notes/{id}/restore
///
/// Restore a soft-deleted note.
pub async fn restore_note(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let note = NoteRepo::restore(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Note",
            id,
        }))?;

    tracing::info!(note_id = note.id, "Note restored");
    Ok(Json(DataResponse { data: note }))
}

/// DELETE /notes/{id}/hard
///
/// Permanently delete a note. Not reversible.
pub async fn hard_delete_note(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = NoteRepo::hard_delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Note",
            id,
        }));
    }

    tracing::info!(note_id = id, "Note permanently deleted");
    Ok(StatusCode::NO_CONTENT)
}
