//! Repository for the `notes` table.
//!
//! Listing excludes soft-deleted rows; the filter & sort engine runs over
//! the listed set in memory. Deletion is soft by default (sets
//! `deleted_at`/`deleted_by`, keeps the row); hard deletion is a separate
//! administrative operation.

use sqlx::PgPool;

use lxnotes_core::types::DbId;

use crate::models::note::{CreateNote, Note, UpdateNote};

/// Column list for notes queries.
const COLUMNS: &str = "id, production_id, module_type, title, description, note_type, \
    priority, status, cue_number, channel_numbers, position_unit, scenery_needs, \
    script_page_id, scene_song_id, created_by, created_at, updated_at, deleted_at, deleted_by";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Create a new note, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateNote) -> Result<Note, sqlx::Error> {
        let status = input.status.as_deref().unwrap_or("todo");
        let query = format!(
            "INSERT INTO notes
                (production_id, module_type, title, description, note_type, priority,
                 status, cue_number, channel_numbers, position_unit, scenery_needs,
                 script_page_id, scene_song_id, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(input.production_id)
            .bind(&input.module_type)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.note_type)
            .bind(&input.priority)
            .bind(status)
            .bind(&input.cue_number)
            .bind(&input.channel_numbers)
            .bind(&input.position_unit)
            .bind(&input.scenery_needs)
            .bind(input.script_page_id)
            .bind(input.scene_song_id)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a note by its ID (soft-deleted rows included, so callers can
    /// inspect or restore them).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List live notes for a production module in creation order,
    /// optionally narrowed to one status.
    ///
    /// Creation order is the stable baseline the filter & sort engine
    /// works from.
    pub async fn list(
        pool: &PgPool,
        production_id: DbId,
        module_type: &str,
        status: Option<&str>,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE production_id = $1 AND module_type = $2 AND deleted_at IS NULL
               AND ($3::TEXT IS NULL OR status = $3)
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(production_id)
            .bind(module_type)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Update a live note by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                note_type = COALESCE($4, note_type),
                priority = COALESCE($5, priority),
                status = COALESCE($6, status),
                cue_number = COALESCE($7, cue_number),
                channel_numbers = COALESCE($8, channel_numbers),
                position_unit = COALESCE($9, position_unit),
                scenery_needs = COALESCE($10, scenery_needs),
                script_page_id = COALESCE($11, script_page_id),
                scene_song_id = COALESCE($12, scene_song_id),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.note_type)
            .bind(&input.priority)
            .bind(&input.status)
            .bind(&input.cue_number)
            .bind(&input.channel_numbers)
            .bind(&input.position_unit)
            .bind(&input.scenery_needs)
            .bind(input.script_page_id)
            .bind(input.scene_song_id)
            .fetch_optional(pool)
            .await
    }

    /// Set the status of a live note.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET status = $2, updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a live note.
    pub async fn soft_delete(
        pool: &PgPool,
        id: DbId,
        deleted_by: Option<DbId>,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET deleted_at = NOW(), deleted_by = $2
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(deleted_by)
            .fetch_optional(pool)
            .await
    }

    /// Restore a soft-deleted note.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET deleted_at = NULL, deleted_by = NULL
             WHERE id = $1 AND deleted_at IS NOT NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a note (administrative). Returns `true` if a row was
    /// removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
