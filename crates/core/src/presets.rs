//! Preset envelope validation and shared preset vocabulary.
//!
//! Four preset kinds share an envelope (production, module-or-all scope,
//! name, `is_default`). System presets (`is_default = true`) are seeded by
//! migration and can be neither edited in place nor deleted.

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::error::CoreError;
use crate::notes::VALID_MODULE_TYPES;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length for a preset name.
pub const MAX_PRESET_NAME_LEN: usize = 200;

/// Module scope value meaning "visible to every module".
pub const MODULE_ALL: &str = "all";

/// Paper sizes accepted by the PDF service.
pub const VALID_PAPER_SIZES: &[&str] = &["letter", "legal", "tabloid", "a4"];

/// Page orientations accepted by the PDF service.
pub const VALID_ORIENTATIONS: &[&str] = &["portrait", "landscape"];

// ---------------------------------------------------------------------------
// Preset kinds
// ---------------------------------------------------------------------------

/// Discriminant for the four preset kinds.
///
/// Serialized as the `type` tag on combined preset listings; every
/// consumption site matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetKind {
    FilterSort,
    PageStyle,
    EmailMessage,
    Print,
}

impl PresetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PresetKind::FilterSort => "filter_sort",
            PresetKind::PageStyle => "page_style",
            PresetKind::EmailMessage => "email_message",
            PresetKind::Print => "print",
        }
    }
}

// ---------------------------------------------------------------------------
// Page style
// ---------------------------------------------------------------------------

/// Page layout parameters for PDF generation.
///
/// Used both as the payload of a stored page style preset and as the
/// ad-hoc layout supplied by one-off print requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageStyleSpec {
    pub paper_size: String,
    pub orientation: String,
    pub include_checkboxes: bool,
}

impl Default for PageStyleSpec {
    fn default() -> Self {
        Self {
            paper_size: "letter".to_string(),
            orientation: "portrait".to_string(),
            include_checkboxes: true,
        }
    }
}

impl PageStyleSpec {
    /// Check that both enumerated fields hold known values.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_paper_size(&self.paper_size)?;
        validate_orientation(&self.orientation)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a preset name: non-empty and within length limit.
pub fn validate_preset_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Preset name must not be empty".to_string(),
        ));
    }
    if name.len() > MAX_PRESET_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Preset name too long: {} chars (max {MAX_PRESET_NAME_LEN})",
            name.len()
        )));
    }
    Ok(())
}

/// Validate a preset module scope: a note module type or `all`.
pub fn validate_preset_module(module_type: &str) -> Result<(), CoreError> {
    if module_type == MODULE_ALL || VALID_MODULE_TYPES.contains(&module_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid preset module '{module_type}'. Must be '{MODULE_ALL}' or one of: {}",
            VALID_MODULE_TYPES.join(", ")
        )))
    }
}

/// Validate a paper size value.
pub fn validate_paper_size(paper_size: &str) -> Result<(), CoreError> {
    if VALID_PAPER_SIZES.contains(&paper_size) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid paper size '{paper_size}'. Must be one of: {}",
            VALID_PAPER_SIZES.join(", ")
        )))
    }
}

/// Validate a page orientation value.
pub fn validate_orientation(orientation: &str) -> Result<(), CoreError> {
    if VALID_ORIENTATIONS.contains(&orientation) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid orientation '{orientation}'. Must be one of: {}",
            VALID_ORIENTATIONS.join(", ")
        )))
    }
}

/// Parse and validate a comma-separated recipient list.
///
/// Returns the trimmed addresses on success. Empty segments (doubled or
/// trailing commas) are skipped; at least one address is required and
/// every address must be syntactically valid.
pub fn validate_recipients(recipients: &str) -> Result<Vec<String>, CoreError> {
    let addresses: Vec<String> = recipients
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if addresses.is_empty() {
        return Err(CoreError::Validation(
            "At least one recipient is required".to_string(),
        ));
    }
    for address in &addresses {
        if !address.validate_email() {
            return Err(CoreError::Validation(format!(
                "Invalid email address: '{address}'"
            )));
        }
    }
    Ok(addresses)
}

/// Reject edits and deletes against system presets.
pub fn ensure_editable(is_default: bool) -> Result<(), CoreError> {
    if is_default {
        Err(CoreError::Conflict(
            "System presets cannot be modified or deleted".to_string(),
        ))
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn preset_kind_tags() {
        assert_eq!(PresetKind::FilterSort.as_str(), "filter_sort");
        assert_eq!(PresetKind::EmailMessage.as_str(), "email_message");
    }

    #[test]
    fn valid_preset_name_passes() {
        assert!(validate_preset_name("Nightly Report").is_ok());
    }

    #[test]
    fn empty_preset_name_rejected() {
        assert_matches!(validate_preset_name("  "), Err(CoreError::Validation(_)));
    }

    #[test]
    fn all_module_scope_accepted() {
        assert!(validate_preset_module("all").is_ok());
        assert!(validate_preset_module("cue").is_ok());
    }

    #[test]
    fn unknown_module_scope_rejected() {
        assert!(validate_preset_module("sound").is_err());
    }

    #[test]
    fn paper_sizes_and_orientations() {
        assert!(validate_paper_size("a4").is_ok());
        assert!(validate_paper_size("a5").is_err());
        assert!(validate_orientation("landscape").is_ok());
        assert!(validate_orientation("sideways").is_err());
    }

    #[test]
    fn default_page_style_is_valid() {
        let spec = PageStyleSpec::default();
        assert_eq!(spec.paper_size, "letter");
        assert_eq!(spec.orientation, "portrait");
        assert!(spec.include_checkboxes);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn page_style_rejects_unknown_values() {
        let spec = PageStyleSpec {
            paper_size: "a5".to_string(),
            ..PageStyleSpec::default()
        };
        assert_matches!(spec.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn recipients_parse_and_trim() {
        let parsed = validate_recipients("sm@example.com, ld@example.com ,").unwrap();
        assert_eq!(parsed, vec!["sm@example.com", "ld@example.com"]);
    }

    #[test]
    fn empty_recipient_list_rejected() {
        assert_matches!(validate_recipients(" , "), Err(CoreError::Validation(_)));
    }

    #[test]
    fn malformed_recipient_rejected() {
        let err = validate_recipients("not-an-email").unwrap_err();
        assert!(err.to_string().contains("Invalid email address"));
    }

    #[test]
    fn system_presets_are_not_editable() {
        assert_matches!(ensure_editable(true), Err(CoreError::Conflict(_)));
        assert!(ensure_editable(false).is_ok());
    }
}
