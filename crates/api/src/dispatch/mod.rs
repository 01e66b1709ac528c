//! Outbound delivery adapters for the notes dispatch flow.
//!
//! `email` wraps the async SMTP transport; `pdf` talks to the external
//! PDF rendering service over HTTP.

pub mod email;
pub mod pdf;
