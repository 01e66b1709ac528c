use std::sync::Arc;

use crate::config::ServerConfig;
use crate::dispatch::email::EmailSender;
use crate::dispatch::pdf::PdfClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: lxnotes_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// SMTP email sender (rejects sends when SMTP is not configured).
    pub mailer: Arc<EmailSender>,
    /// HTTP client for the external PDF rendering service.
    pub pdf: Arc<PdfClient>,
}
