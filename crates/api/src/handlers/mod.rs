//! Request handlers, grouped by resource.

pub mod catalog;
pub mod dispatch;
pub mod notes;
pub mod presets;
pub mod wizard;
