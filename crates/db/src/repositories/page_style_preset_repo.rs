//! Repository for the `page_style_presets` table.

use sqlx::{PgExecutor, PgPool};

use lxnotes_core::types::DbId;

use crate::models::page_style_preset::{CreatePageStylePreset, PageStylePreset};

/// Column list for page_style_presets queries.
const COLUMNS: &str = "id, production_id, module_type, name, is_default, paper_size, \
    orientation, include_checkboxes, created_by, created_at, updated_at";

/// Provides CRUD operations for page style presets.
pub struct PageStylePresetRepo;

impl PageStylePresetRepo {
    /// List presets visible to a production (its own plus system defaults).
    pub async fn list_by_production(
        pool: &PgPool,
        production_id: DbId,
    ) -> Result<Vec<PageStylePreset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM page_style_presets
             WHERE production_id = $1 OR production_id IS NULL
             ORDER BY is_default DESC, name ASC"
        );
        sqlx::query_as::<_, PageStylePreset>(&query)
            .bind(production_id)
            .fetch_all(pool)
            .await
    }

    /// List presets visible to a production module (`all`-scoped included).
    pub async fn list_by_module(
        pool: &PgPool,
        production_id: DbId,
        module_type: &str,
    ) -> Result<Vec<PageStylePreset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM page_style_presets
             WHERE (production_id = $1 OR production_id IS NULL)
               AND (module_type = $2 OR module_type = 'all')
             ORDER BY is_default DESC, name ASC"
        );
        sqlx::query_as::<_, PageStylePreset>(&query)
            .bind(production_id)
            .bind(module_type)
            .fetch_all(pool)
            .await
    }

    /// Find a preset by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PageStylePreset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM page_style_presets WHERE id = $1");
        sqlx::query_as::<_, PageStylePreset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a preset, returning the created row.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreatePageStylePreset,
    ) -> Result<PageStylePreset, sqlx::Error> {
        let query = format!(
            "INSERT INTO page_style_presets
                (production_id, module_type, name, paper_size, orientation,
                 include_checkboxes, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PageStylePreset>(&query)
            .bind(input.production_id)
            .bind(&input.module_type)
            .bind(&input.name)
            .bind(&input.paper_size)
            .bind(&input.orientation)
            .bind(input.include_checkboxes)
            .bind(input.created_by)
            .fetch_one(executor)
            .await
    }

    /// Write back a merged preset row.
    pub async fn save(
        pool: &PgPool,
        preset: &PageStylePreset,
    ) -> Result<Option<PageStylePreset>, sqlx::Error> {
        let query = format!(
            "UPDATE page_style_presets SET
                name = $2, paper_size = $3, orientation = $4,
                include_checkboxes = $5, updated_at = NOW()
             WHERE id = $1 AND is_default = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PageStylePreset>(&query)
            .bind(preset.id)
            .bind(&preset.name)
            .bind(&preset.paper_size)
            .bind(&preset.orientation)
            .bind(preset.include_checkboxes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a preset by ID. System presets are never deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM page_style_presets WHERE id = $1 AND is_default = FALSE")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
