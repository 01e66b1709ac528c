use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lxnotes_core::types::{DbId, Timestamp};

/// A row from the `page_style_presets` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PageStylePreset {
    pub id: DbId,
    pub production_id: Option<DbId>,
    pub module_type: String,
    pub name: String,
    pub is_default: bool,
    pub paper_size: String,
    pub orientation: String,
    pub include_checkboxes: bool,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a page style preset.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePageStylePreset {
    pub production_id: DbId,
    pub module_type: String,
    pub name: String,
    pub paper_size: String,
    pub orientation: String,
    #[serde(default = "default_checkboxes")]
    pub include_checkboxes: bool,
    pub created_by: Option<DbId>,
}

fn default_checkboxes() -> bool {
    true
}

/// DTO for updating a page style preset.
#[derive(Debug, Deserialize)]
pub struct UpdatePageStylePreset {
    pub name: Option<String>,
    pub paper_size: Option<String>,
    pub orientation: Option<String>,
    pub include_checkboxes: Option<bool>,
}
