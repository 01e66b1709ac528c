//! Tagged union over the four preset kinds.
//!
//! Combined preset listings serialize with a `type` discriminant tag;
//! every consumption site matches exhaustively.

use serde::Serialize;

use lxnotes_core::presets::PresetKind;
use lxnotes_core::types::DbId;

use super::email_message_preset::EmailMessagePreset;
use super::filter_sort_preset::FilterSortPreset;
use super::page_style_preset::PageStylePreset;
use super::print_preset::PrintPreset;

/// One preset of any kind.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnyPreset {
    FilterSort(FilterSortPreset),
    PageStyle(PageStylePreset),
    EmailMessage(EmailMessagePreset),
    Print(PrintPreset),
}

impl AnyPreset {
    pub fn kind(&self) -> PresetKind {
        match self {
            AnyPreset::FilterSort(_) => PresetKind::FilterSort,
            AnyPreset::PageStyle(_) => PresetKind::PageStyle,
            AnyPreset::EmailMessage(_) => PresetKind::EmailMessage,
            AnyPreset::Print(_) => PresetKind::Print,
        }
    }

    pub fn id(&self) -> DbId {
        match self {
            AnyPreset::FilterSort(p) => p.id,
            AnyPreset::PageStyle(p) => p.id,
            AnyPreset::EmailMessage(p) => p.id,
            AnyPreset::Print(p) => p.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AnyPreset::FilterSort(p) => &p.name,
            AnyPreset::PageStyle(p) => &p.name,
            AnyPreset::EmailMessage(p) => &p.name,
            AnyPreset::Print(p) => &p.name,
        }
    }

    pub fn is_default(&self) -> bool {
        match self {
            AnyPreset::FilterSort(p) => p.is_default,
            AnyPreset::PageStyle(p) => p.is_default,
            AnyPreset::EmailMessage(p) => p.is_default,
            AnyPreset::Print(p) => p.is_default,
        }
    }
}
