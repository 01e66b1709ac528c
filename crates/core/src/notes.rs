//! Note vocabulary: module types, statuses, and field validation.
//!
//! Notes belong to one of four production modules (cue, work, production,
//! actor). Status and module type are stored as TEXT and validated against
//! the constant sets below.

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a note title in characters.
pub const MAX_NOTE_TITLE_LENGTH: usize = 500;

/// Maximum length of a note description in characters.
pub const MAX_NOTE_DESCRIPTION_LENGTH: usize = 10_000;

// ---------------------------------------------------------------------------
// Module types
// ---------------------------------------------------------------------------

/// Cue notes -- lighting cues, keyed by cue number.
pub const MODULE_CUE: &str = "cue";

/// Work notes -- rig and focus work, keyed by channel / position.
pub const MODULE_WORK: &str = "work";

/// Production notes -- cross-department notes.
pub const MODULE_PRODUCTION: &str = "production";

/// Actor notes -- performer-related notes, keyed by scene/song.
pub const MODULE_ACTOR: &str = "actor";

/// All valid note module types.
pub const VALID_MODULE_TYPES: &[&str] =
    &[MODULE_CUE, MODULE_WORK, MODULE_PRODUCTION, MODULE_ACTOR];

// ---------------------------------------------------------------------------
// Statuses
// ---------------------------------------------------------------------------

pub const STATUS_TODO: &str = "todo";
pub const STATUS_COMPLETE: &str = "complete";
pub const STATUS_CANCELLED: &str = "cancelled";

/// All valid note statuses.
pub const VALID_NOTE_STATUSES: &[&str] = &[STATUS_TODO, STATUS_COMPLETE, STATUS_CANCELLED];

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that the module type is one of the allowed values.
pub fn validate_module_type(module_type: &str) -> Result<(), CoreError> {
    if VALID_MODULE_TYPES.contains(&module_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid module type '{module_type}'. Must be one of: {}",
            VALID_MODULE_TYPES.join(", ")
        )))
    }
}

/// Validate that the status is one of the allowed values.
pub fn validate_note_status(status: &str) -> Result<(), CoreError> {
    if VALID_NOTE_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid note status '{status}'. Must be one of: {}",
            VALID_NOTE_STATUSES.join(", ")
        )))
    }
}

/// Validate a note title: non-empty and within length limit.
pub fn validate_note_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Note title must not be empty".to_string(),
        ));
    }
    if title.len() > MAX_NOTE_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Note title too long: {} chars (max {MAX_NOTE_TITLE_LENGTH})",
            title.len()
        )));
    }
    Ok(())
}

/// Validate a note description: length check only (may be empty).
pub fn validate_note_description(description: &str) -> Result<(), CoreError> {
    if description.len() > MAX_NOTE_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Note description too long: {} chars (max {MAX_NOTE_DESCRIPTION_LENGTH})",
            description.len()
        )));
    }
    Ok(())
}

/// Human-readable display name for a module type, as used in email subjects
/// and PDF headers (the `MODULE_NAME` placeholder).
pub fn module_display_name(module_type: &str) -> &'static str {
    match module_type {
        MODULE_CUE => "Cue Notes",
        MODULE_WORK => "Work Notes",
        MODULE_PRODUCTION => "Production Notes",
        MODULE_ACTOR => "Actor Notes",
        _ => "Notes",
    }
}

// ---------------------------------------------------------------------------
// Note field access
// ---------------------------------------------------------------------------

/// Field access for anything note-shaped.
///
/// The filter & sort engine and the placeholder statistics are pure and
/// storage-agnostic; the database row type implements this trait so the
/// engine never depends on sqlx.
pub trait NoteFields {
    fn status(&self) -> &str;
    fn note_type(&self) -> Option<&str>;
    fn priority(&self) -> Option<&str>;
    fn title(&self) -> &str;
    fn cue_number(&self) -> Option<&str>;
    fn channel_numbers(&self) -> Option<&str>;
    fn position_unit(&self) -> Option<&str>;
    fn created_at(&self) -> Timestamp;
    fn updated_at(&self) -> Timestamp;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_module_types_pass() {
        for m in VALID_MODULE_TYPES {
            assert!(validate_module_type(m).is_ok());
        }
    }

    #[test]
    fn invalid_module_type_rejected() {
        let err = validate_module_type("sound").unwrap_err();
        assert!(err.to_string().contains("Invalid module type"));
    }

    #[test]
    fn valid_statuses_pass() {
        for s in VALID_NOTE_STATUSES {
            assert!(validate_note_status(s).is_ok());
        }
    }

    #[test]
    fn invalid_status_rejected() {
        let err = validate_note_status("done").unwrap_err();
        assert!(err.to_string().contains("Invalid note status"));
    }

    #[test]
    fn empty_title_rejected() {
        assert!(validate_note_title("  ").is_err());
    }

    #[test]
    fn too_long_title_rejected() {
        let long = "x".repeat(MAX_NOTE_TITLE_LENGTH + 1);
        assert!(validate_note_title(&long).is_err());
    }

    #[test]
    fn module_display_names() {
        assert_eq!(module_display_name(MODULE_CUE), "Cue Notes");
        assert_eq!(module_display_name(MODULE_WORK), "Work Notes");
        assert_eq!(module_display_name("unknown"), "Notes");
    }
}
