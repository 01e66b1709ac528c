//! Repository for the `email_message_presets` table.

use sqlx::{PgExecutor, PgPool};

use lxnotes_core::types::DbId;

use crate::models::email_message_preset::{CreateEmailMessagePreset, EmailMessagePreset};

/// Column list for email_message_presets queries.
const COLUMNS: &str = "id, production_id, module_type, name, is_default, recipients, \
    subject, message, filter_and_sort_preset_id, page_style_preset_id, \
    include_notes_in_body, attach_pdf, created_by, created_at, updated_at";

/// Provides CRUD operations for email message presets.
pub struct EmailMessagePresetRepo;

impl EmailMessagePresetRepo {
    /// List presets visible to a production (its own plus system defaults).
    pub async fn list_by_production(
        pool: &PgPool,
        production_id: DbId,
    ) -> Result<Vec<EmailMessagePreset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM email_message_presets
             WHERE production_id = $1 OR production_id IS NULL
             ORDER BY is_default DESC, name ASC"
        );
        sqlx::query_as::<_, EmailMessagePreset>(&query)
            .bind(production_id)
            .fetch_all(pool)
            .await
    }

    /// List presets visible to a production module (`all`-scoped included).
    pub async fn list_by_module(
        pool: &PgPool,
        production_id: DbId,
        module_type: &str,
    ) -> Result<Vec<EmailMessagePreset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM email_message_presets
             WHERE (production_id = $1 OR production_id IS NULL)
               AND (module_type = $2 OR module_type = 'all')
             ORDER BY is_default DESC, name ASC"
        );
        sqlx::query_as::<_, EmailMessagePreset>(&query)
            .bind(production_id)
            .bind(module_type)
            .fetch_all(pool)
            .await
    }

    /// Find a preset by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EmailMessagePreset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM email_message_presets WHERE id = $1");
        sqlx::query_as::<_, EmailMessagePreset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a preset, returning the created row.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateEmailMessagePreset,
    ) -> Result<EmailMessagePreset, sqlx::Error> {
        let query = format!(
            "INSERT INTO email_message_presets
                (production_id, module_type, name, recipients, subject, message,
                 filter_and_sort_preset_id, page_style_preset_id,
                 include_notes_in_body, attach_pdf, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EmailMessagePreset>(&query)
            .bind(input.production_id)
            .bind(&input.module_type)
            .bind(&input.name)
            .bind(&input.recipients)
            .bind(&input.subject)
            .bind(&input.message)
            .bind(input.filter_and_sort_preset_id)
            .bind(input.page_style_preset_id)
            .bind(input.include_notes_in_body)
            .bind(input.attach_pdf)
            .bind(input.created_by)
            .fetch_one(executor)
            .await
    }

    /// Write back a merged preset row.
    pub async fn save(
        pool: &PgPool,
        preset: &EmailMessagePreset,
    ) -> Result<Option<EmailMessagePreset>, sqlx::Error> {
        let query = format!(
            "UPDATE email_message_presets SET
                name = $2, recipients = $3, subject = $4, message = $5,
                filter_and_sort_preset_id = $6, page_style_preset_id = $7,
                include_notes_in_body = $8, attach_pdf = $9, updated_at = NOW()
             WHERE id = $1 AND is_default = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EmailMessagePreset>(&query)
            .bind(preset.id)
            .bind(&preset.name)
            .bind(&preset.recipients)
            .bind(&preset.subject)
            .bind(&preset.message)
            .bind(preset.filter_and_sort_preset_id)
            .bind(preset.page_style_preset_id)
            .bind(preset.include_notes_in_body)
            .bind(preset.attach_pdf)
            .fetch_optional(pool)
            .await
    }

    /// Delete a preset by ID. System presets are never deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM email_message_presets WHERE id = $1 AND is_default = FALSE")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
