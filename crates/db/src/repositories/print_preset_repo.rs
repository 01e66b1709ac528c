//! Repository for the `print_presets` table.

use sqlx::{PgExecutor, PgPool};

use lxnotes_core::types::DbId;

use crate::models::print_preset::{CreatePrintPreset, PrintPreset};

/// Column list for print_presets queries.
const COLUMNS: &str = "id, production_id, module_type, name, is_default, \
    filter_and_sort_preset_id, page_style_preset_id, created_by, created_at, updated_at";

/// Provides CRUD operations for print presets.
pub struct PrintPresetRepo;

impl PrintPresetRepo {
    /// List presets visible to a production (its own plus system defaults).
    pub async fn list_by_production(
        pool: &PgPool,
        production_id: DbId,
    ) -> Result<Vec<PrintPreset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM print_presets
             WHERE production_id = $1 OR production_id IS NULL
             ORDER BY is_default DESC, name ASC"
        );
        sqlx::query_as::<_, PrintPreset>(&query)
            .bind(production_id)
            .fetch_all(pool)
            .await
    }

    /// List presets visible to a production module (`all`-scoped included).
    pub async fn list_by_module(
        pool: &PgPool,
        production_id: DbId,
        module_type: &str,
    ) -> Result<Vec<PrintPreset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM print_presets
             WHERE (production_id = $1 OR production_id IS NULL)
               AND (module_type = $2 OR module_type = 'all')
             ORDER BY is_default DESC, name ASC"
        );
        sqlx::query_as::<_, PrintPreset>(&query)
            .bind(production_id)
            .bind(module_type)
            .fetch_all(pool)
            .await
    }

    /// Find a preset by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PrintPreset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM print_presets WHERE id = $1");
        sqlx::query_as::<_, PrintPreset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a preset, returning the created row.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreatePrintPreset,
    ) -> Result<PrintPreset, sqlx::Error> {
        let query = format!(
            "INSERT INTO print_presets
                (production_id, module_type, name, filter_and_sort_preset_id,
                 page_style_preset_id, created_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PrintPreset>(&query)
            .bind(input.production_id)
            .bind(&input.module_type)
            .bind(&input.name)
            .bind(input.filter_and_sort_preset_id)
            .bind(input.page_style_preset_id)
            .bind(input.created_by)
            .fetch_one(executor)
            .await
    }

    /// Write back a merged preset row.
    pub async fn save(
        pool: &PgPool,
        preset: &PrintPreset,
    ) -> Result<Option<PrintPreset>, sqlx::Error> {
        let query = format!(
            "UPDATE print_presets SET
                name = $2, filter_and_sort_preset_id = $3,
                page_style_preset_id = $4, updated_at = NOW()
             WHERE id = $1 AND is_default = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PrintPreset>(&query)
            .bind(preset.id)
            .bind(&preset.name)
            .bind(preset.filter_and_sort_preset_id)
            .bind(preset.page_style_preset_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a preset by ID. System presets are never deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM print_presets WHERE id = $1 AND is_default = FALSE")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
