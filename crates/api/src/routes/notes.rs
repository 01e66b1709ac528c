//! Route definitions for note CRUD and lifecycle.

use axum::routing::{delete, get, patch};
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Note routes, nested under `/notes`.
///
/// ```text
/// GET    /                 list_notes (?production_id, ?module_type, ?status)
/// POST   /                 create_note
/// GET    /{id}             get_note
/// PUT    /{id}             update_note
/// DELETE /{id}             delete_note (soft, ?deleted_by)
/// PATCH  /{id}/status      set_note_status
/// PATCH  /{id}/restore     restore_note
/// DELETE /{id}/hard        hard_delete_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notes::list_notes).post(notes::create_note))
        .route(
            "/{id}",
            get(notes::get_note)
                .put(notes::update_note)
                .delete(notes::delete_note),
        )
        .route("/{id}/status", patch(notes::set_note_status))
        .route("/{id}/restore", patch(notes::restore_note))
        .route("/{id}/hard", delete(notes::hard_delete_note))
}
