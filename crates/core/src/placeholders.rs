//! Placeholder resolution engine for email and PDF templates.
//!
//! Subject and message templates may contain `{{TOKEN}}` placeholders from
//! a fixed static catalog. Resolution is a single pass: replacement values
//! are never re-scanned, so a value that itself contains `{{...}}` cannot
//! trigger re-expansion. Unrecognized tokens are left untouched, which
//! keeps unresolved placeholders visible downstream.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::notes::{NoteFields, STATUS_CANCELLED, STATUS_COMPLETE, STATUS_TODO};

/// Regex pattern matching `{{PLACEHOLDER}}` tokens.
pub const PLACEHOLDER_PATTERN: &str = r"\{\{[A-Z_]+\}\}";

/// Compiled placeholder regex. Compiled once, reused forever.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLACEHOLDER_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// A placeholder token and its display metadata, as surfaced to template
/// editors.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceholderDef {
    /// Token text without braces, e.g. `PRODUCTION_TITLE`.
    pub token: &'static str,
    /// Short human-readable label.
    pub label: &'static str,
    /// Example value shown in editor tooltips.
    pub example: &'static str,
}

/// The static placeholder catalog.
pub const PLACEHOLDERS: &[PlaceholderDef] = &[
    PlaceholderDef {
        token: "PRODUCTION_TITLE",
        label: "Production title",
        example: "Joy!",
    },
    PlaceholderDef {
        token: "USER_FULL_NAME",
        label: "Sender's full name",
        example: "Alex Chen",
    },
    PlaceholderDef {
        token: "NOTE_COUNT",
        label: "Total notes in this report",
        example: "12",
    },
    PlaceholderDef {
        token: "TODO_COUNT",
        label: "Open (todo) notes",
        example: "7",
    },
    PlaceholderDef {
        token: "COMPLETE_COUNT",
        label: "Completed notes",
        example: "4",
    },
    PlaceholderDef {
        token: "CANCELLED_COUNT",
        label: "Cancelled notes",
        example: "1",
    },
    PlaceholderDef {
        token: "CURRENT_DATE",
        label: "Date the report is sent",
        example: "March 14, 2026",
    },
    PlaceholderDef {
        token: "MODULE_NAME",
        label: "Module display name",
        example: "Cue Notes",
    },
    PlaceholderDef {
        token: "FILTER_DESCRIPTION",
        label: "Active filter summary",
        example: "Status: todo; Types: Focus",
    },
    PlaceholderDef {
        token: "SORT_DESCRIPTION",
        label: "Active sort summary",
        example: "Priority (ascending)",
    },
    PlaceholderDef {
        token: "DATE_RANGE",
        label: "Creation date range of included notes",
        example: "2026-03-01 to 2026-03-14",
    },
];

/// The static placeholder catalog, as exposed by the preset stores.
pub fn available_placeholders() -> &'static [PlaceholderDef] {
    PLACEHOLDERS
}

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// Resolved values for every recognized placeholder token.
///
/// The count fields must come from the **filtered** note set of the
/// current send/print action, never the full note set; build them via
/// [`NoteStats::from_notes`] on the filter engine's output.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlaceholderContext {
    pub production_title: String,
    pub user_full_name: String,
    pub note_count: i64,
    pub todo_count: i64,
    pub complete_count: i64,
    pub cancelled_count: i64,
    pub current_date: String,
    pub module_name: String,
    pub filter_description: String,
    pub sort_description: String,
    pub date_range: String,
}

impl PlaceholderContext {
    /// Value for a token (without braces); `None` for unrecognized tokens.
    fn value_for(&self, token: &str) -> Option<String> {
        match token {
            "PRODUCTION_TITLE" => Some(self.production_title.clone()),
            "USER_FULL_NAME" => Some(self.user_full_name.clone()),
            "NOTE_COUNT" => Some(self.note_count.to_string()),
            "TODO_COUNT" => Some(self.todo_count.to_string()),
            "COMPLETE_COUNT" => Some(self.complete_count.to_string()),
            "CANCELLED_COUNT" => Some(self.cancelled_count.to_string()),
            "CURRENT_DATE" => Some(self.current_date.clone()),
            "MODULE_NAME" => Some(self.module_name.clone()),
            "FILTER_DESCRIPTION" => Some(self.filter_description.clone()),
            "SORT_DESCRIPTION" => Some(self.sort_description.clone()),
            "DATE_RANGE" => Some(self.date_range.clone()),
            _ => None,
        }
    }
}

/// Resolve all `{{TOKEN}}` placeholders in `template` against `ctx`.
///
/// Single pass; unrecognized tokens are returned verbatim.
pub fn resolve_placeholders(template: &str, ctx: &PlaceholderContext) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &regex::Captures| {
            let raw = &caps[0];
            let token = &raw[2..raw.len() - 2];
            ctx.value_for(token).unwrap_or_else(|| raw.to_string())
        })
        .into_owned()
}

// ---------------------------------------------------------------------------
// Note statistics
// ---------------------------------------------------------------------------

/// Per-status note counts for a filtered note set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NoteStats {
    pub total: i64,
    pub todo: i64,
    pub complete: i64,
    pub cancelled: i64,
}

impl NoteStats {
    /// Count statuses over a filtered note set (the filter engine output).
    pub fn from_notes<N: NoteFields>(notes: &[&N]) -> Self {
        let mut stats = Self::default();
        for note in notes {
            stats.total += 1;
            match note.status() {
                STATUS_TODO => stats.todo += 1,
                STATUS_COMPLETE => stats.complete += 1,
                STATUS_CANCELLED => stats.cancelled += 1,
                _ => {}
            }
        }
        stats
    }
}

/// Creation date range label for a filtered note set, e.g.
/// `"2026-03-01 to 2026-03-14"`. Empty when the set is empty; a single
/// date when all notes share one day.
pub fn date_range_label<N: NoteFields>(notes: &[&N]) -> String {
    let mut dates: Vec<chrono::NaiveDate> =
        notes.iter().map(|n| n.created_at().date_naive()).collect();
    dates.sort();
    match (dates.first(), dates.last()) {
        (Some(first), Some(last)) if first == last => first.format("%Y-%m-%d").to_string(),
        (Some(first), Some(last)) => format!(
            "{} to {}",
            first.format("%Y-%m-%d"),
            last.format("%Y-%m-%d")
        ),
        _ => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Timestamp;
    use chrono::TimeZone;

    fn ctx() -> PlaceholderContext {
        PlaceholderContext {
            production_title: "Joy!".to_string(),
            user_full_name: "Alex Chen".to_string(),
            note_count: 5,
            todo_count: 3,
            complete_count: 1,
            cancelled_count: 1,
            current_date: "March 14, 2026".to_string(),
            module_name: "Cue Notes".to_string(),
            filter_description: "All notes".to_string(),
            sort_description: "Priority (ascending)".to_string(),
            date_range: "2026-03-01 to 2026-03-14".to_string(),
        }
    }

    #[test]
    fn resolves_title_and_count() {
        let result = resolve_placeholders("{{PRODUCTION_TITLE}} - {{TODO_COUNT}} open", &ctx());
        assert_eq!(result, "Joy! - 3 open");
    }

    #[test]
    fn template_without_tokens_round_trips() {
        let template = "Plain subject, no tokens { not one } either";
        assert_eq!(resolve_placeholders(template, &ctx()), template);
    }

    #[test]
    fn fully_covered_template_leaves_no_braces() {
        let template = "{{PRODUCTION_TITLE}} {{MODULE_NAME}} {{NOTE_COUNT}} \
                        {{TODO_COUNT}}/{{COMPLETE_COUNT}}/{{CANCELLED_COUNT}} \
                        {{CURRENT_DATE}} {{USER_FULL_NAME}} {{FILTER_DESCRIPTION}} \
                        {{SORT_DESCRIPTION}} {{DATE_RANGE}}";
        let result = resolve_placeholders(template, &ctx());
        assert!(!result.contains("{{"), "unresolved token in: {result}");
    }

    #[test]
    fn unrecognized_token_left_untouched() {
        let result = resolve_placeholders("Hello {{NOT_A_TOKEN}}!", &ctx());
        assert_eq!(result, "Hello {{NOT_A_TOKEN}}!");
    }

    #[test]
    fn replacement_values_are_not_rescanned() {
        let mut context = ctx();
        context.production_title = "{{TODO_COUNT}}".to_string();
        let result = resolve_placeholders("{{PRODUCTION_TITLE}}", &context);
        // Single-pass: the substituted value is emitted verbatim.
        assert_eq!(result, "{{TODO_COUNT}}");
    }

    #[test]
    fn lowercase_braces_do_not_match() {
        let result = resolve_placeholders("{{todo_count}}", &ctx());
        assert_eq!(result, "{{todo_count}}");
    }

    #[test]
    fn every_cataloged_token_resolves() {
        let context = ctx();
        for def in available_placeholders() {
            assert!(
                context.value_for(def.token).is_some(),
                "catalog token {} missing from context table",
                def.token
            );
        }
    }

    // -- NoteStats --

    struct StatusOnly(&'static str, Timestamp);

    impl NoteFields for StatusOnly {
        fn status(&self) -> &str {
            self.0
        }
        fn note_type(&self) -> Option<&str> {
            None
        }
        fn priority(&self) -> Option<&str> {
            None
        }
        fn title(&self) -> &str {
            ""
        }
        fn cue_number(&self) -> Option<&str> {
            None
        }
        fn channel_numbers(&self) -> Option<&str> {
            None
        }
        fn position_unit(&self) -> Option<&str> {
            None
        }
        fn created_at(&self) -> Timestamp {
            self.1
        }
        fn updated_at(&self) -> Timestamp {
            self.1
        }
    }

    fn at(day: u32) -> Timestamp {
        chrono::Utc.with_ymd_and_hms(2026, 3, day, 9, 0, 0).unwrap()
    }

    #[test]
    fn stats_count_by_status() {
        let notes = [
            StatusOnly(STATUS_TODO, at(1)),
            StatusOnly(STATUS_TODO, at(2)),
            StatusOnly(STATUS_COMPLETE, at(3)),
            StatusOnly(STATUS_CANCELLED, at(4)),
        ];
        let refs: Vec<&StatusOnly> = notes.iter().collect();
        let stats = NoteStats::from_notes(&refs);
        assert_eq!(
            stats,
            NoteStats {
                total: 4,
                todo: 2,
                complete: 1,
                cancelled: 1
            }
        );
    }

    #[test]
    fn empty_set_has_zero_stats_and_empty_range() {
        let refs: Vec<&StatusOnly> = Vec::new();
        assert_eq!(NoteStats::from_notes(&refs), NoteStats::default());
        assert_eq!(date_range_label(&refs), "");
    }

    #[test]
    fn date_range_spans_min_to_max() {
        let notes = [
            StatusOnly(STATUS_TODO, at(14)),
            StatusOnly(STATUS_TODO, at(1)),
            StatusOnly(STATUS_TODO, at(7)),
        ];
        let refs: Vec<&StatusOnly> = notes.iter().collect();
        assert_eq!(date_range_label(&refs), "2026-03-01 to 2026-03-14");
    }

    #[test]
    fn single_day_range_collapses() {
        let notes = [StatusOnly(STATUS_TODO, at(5)), StatusOnly(STATUS_TODO, at(5))];
        let refs: Vec<&StatusOnly> = notes.iter().collect();
        assert_eq!(date_range_label(&refs), "2026-03-05");
    }
}
