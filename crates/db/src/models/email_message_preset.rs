use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lxnotes_core::types::{DbId, Timestamp};

/// A row from the `email_message_presets` table.
///
/// `filter_and_sort_preset_id` / `page_style_preset_id` are weak
/// references: relation only, no ownership, no FK. A dangling filter id
/// resolves to "no filter" and a dangling page style id to "no PDF".
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EmailMessagePreset {
    pub id: DbId,
    pub production_id: Option<DbId>,
    pub module_type: String,
    pub name: String,
    pub is_default: bool,
    pub recipients: String,
    pub subject: String,
    pub message: String,
    pub filter_and_sort_preset_id: Option<DbId>,
    pub page_style_preset_id: Option<DbId>,
    pub include_notes_in_body: bool,
    pub attach_pdf: bool,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an email message preset.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmailMessagePreset {
    pub production_id: DbId,
    pub module_type: String,
    pub name: String,
    pub recipients: String,
    pub subject: String,
    pub message: String,
    pub filter_and_sort_preset_id: Option<DbId>,
    pub page_style_preset_id: Option<DbId>,
    #[serde(default = "default_true")]
    pub include_notes_in_body: bool,
    #[serde(default)]
    pub attach_pdf: bool,
    pub created_by: Option<DbId>,
}

fn default_true() -> bool {
    true
}

/// DTO for updating an email message preset.
#[derive(Debug, Deserialize)]
pub struct UpdateEmailMessagePreset {
    pub name: Option<String>,
    pub recipients: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub filter_and_sort_preset_id: Option<Option<DbId>>,
    pub page_style_preset_id: Option<Option<DbId>>,
    pub include_notes_in_body: Option<bool>,
    pub attach_pdf: Option<bool>,
}
