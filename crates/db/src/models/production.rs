use serde::Serialize;
use sqlx::FromRow;

use lxnotes_core::types::{DbId, Timestamp};

/// A row from the `productions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Production {
    pub id: DbId,
    pub name: String,
    pub abbreviation: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
