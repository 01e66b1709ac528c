//! Note model: one row per note across all four modules.
//!
//! Module-specific fields (cue_number, channel_numbers, ...) are nullable
//! columns on the shared table. Soft deletion sets `deleted_at`/`deleted_by`
//! and retains the row.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lxnotes_core::notes::NoteFields;
use lxnotes_core::types::{DbId, Timestamp};

/// A row from the `notes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub production_id: DbId,
    pub module_type: String,
    pub title: String,
    pub description: Option<String>,
    pub note_type: Option<String>,
    pub priority: Option<String>,
    pub status: String,
    pub cue_number: Option<String>,
    pub channel_numbers: Option<String>,
    pub position_unit: Option<String>,
    pub scenery_needs: Option<String>,
    pub script_page_id: Option<DbId>,
    pub scene_song_id: Option<DbId>,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
    pub deleted_by: Option<DbId>,
}

impl NoteFields for Note {
    fn status(&self) -> &str {
        &self.status
    }
    fn note_type(&self) -> Option<&str> {
        self.note_type.as_deref()
    }
    fn priority(&self) -> Option<&str> {
        self.priority.as_deref()
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn cue_number(&self) -> Option<&str> {
        self.cue_number.as_deref()
    }
    fn channel_numbers(&self) -> Option<&str> {
        self.channel_numbers.as_deref()
    }
    fn position_unit(&self) -> Option<&str> {
        self.position_unit.as_deref()
    }
    fn created_at(&self) -> Timestamp {
        self.created_at
    }
    fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}

/// DTO for creating a new note.
#[derive(Debug, Deserialize)]
pub struct CreateNote {
    pub production_id: DbId,
    pub module_type: String,
    pub title: String,
    pub description: Option<String>,
    pub note_type: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub cue_number: Option<String>,
    pub channel_numbers: Option<String>,
    pub position_unit: Option<String>,
    pub scenery_needs: Option<String>,
    pub script_page_id: Option<DbId>,
    pub scene_song_id: Option<DbId>,
    pub created_by: Option<DbId>,
}

/// DTO for updating a note.
#[derive(Debug, Deserialize)]
pub struct UpdateNote {
    pub title: Option<String>,
    pub description: Option<String>,
    pub note_type: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub cue_number: Option<String>,
    pub channel_numbers: Option<String>,
    pub position_unit: Option<String>,
    pub scenery_needs: Option<String>,
    pub script_page_id: Option<DbId>,
    pub scene_song_id: Option<DbId>,
}
