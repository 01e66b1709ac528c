use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lxnotes_core::filter_sort::FilterSortConfig;
use lxnotes_core::types::{DbId, Timestamp};

/// A row from the `filter_sort_presets` table.
///
/// `production_id` is `None` for system-seeded defaults visible to every
/// production.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FilterSortPreset {
    pub id: DbId,
    pub production_id: Option<DbId>,
    pub module_type: String,
    pub name: String,
    pub is_default: bool,
    pub status_filter: Option<String>,
    pub type_filters: Vec<String>,
    pub priority_filters: Vec<String>,
    pub sort_by: String,
    pub sort_order: String,
    pub group_by_type: bool,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl FilterSortPreset {
    /// The engine configuration stored in this preset.
    pub fn config(&self) -> FilterSortConfig {
        FilterSortConfig {
            status_filter: self.status_filter.clone(),
            type_filters: self.type_filters.clone(),
            priority_filters: self.priority_filters.clone(),
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order.clone(),
            group_by_type: self.group_by_type,
        }
    }
}

/// DTO for creating a filter/sort preset.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFilterSortPreset {
    pub production_id: DbId,
    pub module_type: String,
    pub name: String,
    pub status_filter: Option<String>,
    #[serde(default)]
    pub type_filters: Vec<String>,
    #[serde(default)]
    pub priority_filters: Vec<String>,
    pub sort_by: String,
    pub sort_order: String,
    #[serde(default)]
    pub group_by_type: bool,
    pub created_by: Option<DbId>,
}

/// DTO for updating a filter/sort preset.
#[derive(Debug, Deserialize)]
pub struct UpdateFilterSortPreset {
    pub name: Option<String>,
    pub status_filter: Option<Option<String>>,
    pub type_filters: Option<Vec<String>>,
    pub priority_filters: Option<Vec<String>>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub group_by_type: Option<bool>,
}
