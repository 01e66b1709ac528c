//! Repository for the `filter_sort_presets` table.
//!
//! Rows with `production_id IS NULL` are system defaults visible to every
//! production. `delete` carries the `is_default = FALSE` guard in SQL so a
//! system preset can never be removed regardless of the caller.

use sqlx::{PgExecutor, PgPool};

use lxnotes_core::types::DbId;

use crate::models::filter_sort_preset::{CreateFilterSortPreset, FilterSortPreset};

/// Column list for filter_sort_presets queries.
const COLUMNS: &str = "id, production_id, module_type, name, is_default, status_filter, \
    type_filters, priority_filters, sort_by, sort_order, group_by_type, \
    created_by, created_at, updated_at";

/// Provides CRUD operations for filter/sort presets.
pub struct FilterSortPresetRepo;

impl FilterSortPresetRepo {
    /// List presets visible to a production (its own plus system defaults).
    pub async fn list_by_production(
        pool: &PgPool,
        production_id: DbId,
    ) -> Result<Vec<FilterSortPreset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM filter_sort_presets
             WHERE production_id = $1 OR production_id IS NULL
             ORDER BY is_default DESC, name ASC"
        );
        sqlx::query_as::<_, FilterSortPreset>(&query)
            .bind(production_id)
            .fetch_all(pool)
            .await
    }

    /// List presets visible to a production module (`all`-scoped included).
    pub async fn list_by_module(
        pool: &PgPool,
        production_id: DbId,
        module_type: &str,
    ) -> Result<Vec<FilterSortPreset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM filter_sort_presets
             WHERE (production_id = $1 OR production_id IS NULL)
               AND (module_type = $2 OR module_type = 'all')
             ORDER BY is_default DESC, name ASC"
        );
        sqlx::query_as::<_, FilterSortPreset>(&query)
            .bind(production_id)
            .bind(module_type)
            .fetch_all(pool)
            .await
    }

    /// Find a preset by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<FilterSortPreset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM filter_sort_presets WHERE id = $1");
        sqlx::query_as::<_, FilterSortPreset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a preset, returning the created row.
    ///
    /// Generic over the executor so the wizard can run this inside its
    /// transaction.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateFilterSortPreset,
    ) -> Result<FilterSortPreset, sqlx::Error> {
        let query = format!(
            "INSERT INTO filter_sort_presets
                (production_id, module_type, name, status_filter, type_filters,
                 priority_filters, sort_by, sort_order, group_by_type, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FilterSortPreset>(&query)
            .bind(input.production_id)
            .bind(&input.module_type)
            .bind(&input.name)
            .bind(&input.status_filter)
            .bind(&input.type_filters)
            .bind(&input.priority_filters)
            .bind(&input.sort_by)
            .bind(&input.sort_order)
            .bind(input.group_by_type)
            .bind(input.created_by)
            .fetch_one(executor)
            .await
    }

    /// Write back a merged preset row (handler fetches, merges the patch,
    /// then saves). The `is_default = FALSE` guard backs up the handler's
    /// editability check.
    pub async fn save(
        pool: &PgPool,
        preset: &FilterSortPreset,
    ) -> Result<Option<FilterSortPreset>, sqlx::Error> {
        let query = format!(
            "UPDATE filter_sort_presets SET
                name = $2, status_filter = $3, type_filters = $4,
                priority_filters = $5, sort_by = $6, sort_order = $7,
                group_by_type = $8, updated_at = NOW()
             WHERE id = $1 AND is_default = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FilterSortPreset>(&query)
            .bind(preset.id)
            .bind(&preset.name)
            .bind(&preset.status_filter)
            .bind(&preset.type_filters)
            .bind(&preset.priority_filters)
            .bind(&preset.sort_by)
            .bind(&preset.sort_order)
            .bind(preset.group_by_type)
            .fetch_optional(pool)
            .await
    }

    /// Delete a preset by ID. System presets are never deleted; returns
    /// `true` only when a row was actually removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM filter_sort_presets WHERE id = $1 AND is_default = FALSE")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
