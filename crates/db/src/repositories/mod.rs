//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` (or a generic executor where the wizard needs to
//! run several writes inside one transaction) as the first argument.

pub mod catalog_repo;
pub mod email_message_preset_repo;
pub mod filter_sort_preset_repo;
pub mod note_repo;
pub mod page_style_preset_repo;
pub mod print_preset_repo;
pub mod production_repo;

pub use catalog_repo::{CustomPriorityRepo, CustomTypeRepo};
pub use email_message_preset_repo::EmailMessagePresetRepo;
pub use filter_sort_preset_repo::FilterSortPresetRepo;
pub use note_repo::NoteRepo;
pub use page_style_preset_repo::PageStylePresetRepo;
pub use print_preset_repo::PrintPresetRepo;
pub use production_repo::ProductionRepo;
