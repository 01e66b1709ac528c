use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lxnotes_core::types::{DbId, Timestamp};

/// A row from the `print_presets` table. Both referenced presets are
/// required for PDF generation.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PrintPreset {
    pub id: DbId,
    pub production_id: Option<DbId>,
    pub module_type: String,
    pub name: String,
    pub is_default: bool,
    pub filter_and_sort_preset_id: DbId,
    pub page_style_preset_id: DbId,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a print preset.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePrintPreset {
    pub production_id: DbId,
    pub module_type: String,
    pub name: String,
    pub filter_and_sort_preset_id: DbId,
    pub page_style_preset_id: DbId,
    pub created_by: Option<DbId>,
}

/// DTO for updating a print preset.
#[derive(Debug, Deserialize)]
pub struct UpdatePrintPreset {
    pub name: Option<String>,
    pub filter_and_sort_preset_id: Option<DbId>,
    pub page_style_preset_id: Option<DbId>,
}
