//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod any_preset;
pub mod catalog;
pub mod email_message_preset;
pub mod filter_sort_preset;
pub mod note;
pub mod page_style_preset;
pub mod print_preset;
pub mod production;
