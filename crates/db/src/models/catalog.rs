//! Custom priority and custom type catalogs.
//!
//! Per-production, per-module ordered catalogs defining the universe of
//! valid `priority` / `note_type` values, their labels and colors, and the
//! sort rank used by the filter & sort engine.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lxnotes_core::filter_sort::PriorityRank;
use lxnotes_core::types::{DbId, Timestamp};

/// A row from the `custom_priorities` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CustomPriority {
    pub id: DbId,
    pub production_id: DbId,
    pub module_type: String,
    pub value: String,
    pub label: String,
    pub color: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CustomPriority {
    /// Engine-facing view of this catalog entry.
    pub fn rank(&self) -> PriorityRank {
        PriorityRank {
            value: self.value.clone(),
            sort_order: self.sort_order,
        }
    }
}

/// A row from the `custom_types` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CustomType {
    pub id: DbId,
    pub production_id: DbId,
    pub module_type: String,
    pub value: String,
    pub label: String,
    pub color: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a catalog entry (shared by both catalogs).
#[derive(Debug, Deserialize)]
pub struct CreateCatalogEntry {
    pub production_id: DbId,
    pub module_type: String,
    pub value: String,
    pub label: String,
    pub color: Option<String>,
    pub sort_order: Option<i32>,
}

/// DTO for updating a catalog entry.
#[derive(Debug, Deserialize)]
pub struct UpdateCatalogEntry {
    pub label: Option<String>,
    pub color: Option<String>,
    pub sort_order: Option<i32>,
}
