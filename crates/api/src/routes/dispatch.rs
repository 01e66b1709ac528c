//! Route definitions for the outbound dispatch flow (email and print).

use axum::routing::post;
use axum::Router;

use crate::handlers::dispatch;
use crate::state::AppState;

/// Dispatch routes, merged into `/api/v1`.
///
/// ```text
/// POST /email/send        filter notes, resolve placeholders, send email
/// POST /print/generate    filter notes, render PDF, return base64 document
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/email/send", post(dispatch::send_email))
        .route("/print/generate", post(dispatch::generate_pdf))
}
