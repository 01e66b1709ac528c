//! LX Notes domain core.
//!
//! Pure domain logic shared by the storage and API layers: the note
//! vocabulary (module types, statuses), preset validation, the filter &
//! sort engine, and the placeholder resolution engine used for email and
//! PDF dispatch. No I/O lives here; everything is unit-testable in
//! isolation.

pub mod error;
pub mod filter_sort;
pub mod notes;
pub mod placeholders;
pub mod presets;
pub mod types;
