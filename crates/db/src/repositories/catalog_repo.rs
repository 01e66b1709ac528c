//! Repositories for the custom priority and custom type catalogs.
//!
//! The two tables are structural twins; each gets its own repository so
//! call sites stay explicit about which catalog they touch.

use sqlx::PgPool;

use lxnotes_core::types::DbId;

use crate::models::catalog::{CreateCatalogEntry, CustomPriority, CustomType, UpdateCatalogEntry};

/// Column list shared by both catalog tables.
const COLUMNS: &str =
    "id, production_id, module_type, value, label, color, sort_order, created_at, updated_at";

/// Default swatch for entries created without a color.
const DEFAULT_COLOR: &str = "#808080";

/// CRUD for the `custom_priorities` table.
pub struct CustomPriorityRepo;

impl CustomPriorityRepo {
    /// List priority entries for a production module, ordered by rank.
    pub async fn list_by_module(
        pool: &PgPool,
        production_id: DbId,
        module_type: &str,
    ) -> Result<Vec<CustomPriority>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM custom_priorities
             WHERE production_id = $1 AND module_type = $2
             ORDER BY sort_order ASC, value ASC"
        );
        sqlx::query_as::<_, CustomPriority>(&query)
            .bind(production_id)
            .bind(module_type)
            .fetch_all(pool)
            .await
    }

    /// Create a priority entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCatalogEntry,
    ) -> Result<CustomPriority, sqlx::Error> {
        let query = format!(
            "INSERT INTO custom_priorities
                (production_id, module_type, value, label, color, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CustomPriority>(&query)
            .bind(input.production_id)
            .bind(&input.module_type)
            .bind(&input.value)
            .bind(&input.label)
            .bind(input.color.as_deref().unwrap_or(DEFAULT_COLOR))
            .bind(input.sort_order.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    /// Update a priority entry by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCatalogEntry,
    ) -> Result<Option<CustomPriority>, sqlx::Error> {
        let query = format!(
            "UPDATE custom_priorities SET
                label = COALESCE($2, label),
                color = COALESCE($3, color),
                sort_order = COALESCE($4, sort_order),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CustomPriority>(&query)
            .bind(id)
            .bind(&input.label)
            .bind(&input.color)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a priority entry by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM custom_priorities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// CRUD for the `custom_types` table.
pub struct CustomTypeRepo;

impl CustomTypeRepo {
    /// List type entries for a production module, ordered by rank.
    pub async fn list_by_module(
        pool: &PgPool,
        production_id: DbId,
        module_type: &str,
    ) -> Result<Vec<CustomType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM custom_types
             WHERE production_id = $1 AND module_type = $2
             ORDER BY sort_order ASC, value ASC"
        );
        sqlx::query_as::<_, CustomType>(&query)
            .bind(production_id)
            .bind(module_type)
            .fetch_all(pool)
            .await
    }

    /// Create a type entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCatalogEntry,
    ) -> Result<CustomType, sqlx::Error> {
        let query = format!(
            "INSERT INTO custom_types
                (production_id, module_type, value, label, color, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CustomType>(&query)
            .bind(input.production_id)
            .bind(&input.module_type)
            .bind(&input.value)
            .bind(&input.label)
            .bind(input.color.as_deref().unwrap_or(DEFAULT_COLOR))
            .bind(input.sort_order.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    /// Update a type entry by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCatalogEntry,
    ) -> Result<Option<CustomType>, sqlx::Error> {
        let query = format!(
            "UPDATE custom_types SET
                label = COALESCE($2, label),
                color = COALESCE($3, color),
                sort_order = COALESCE($4, sort_order),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CustomType>(&query)
            .bind(id)
            .bind(&input.label)
            .bind(&input.color)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a type entry by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM custom_types WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
