//! Route definitions, grouped by resource.

pub mod catalog;
pub mod dispatch;
pub mod health;
pub mod notes;
pub mod presets;

use axum::Router;

use crate::state::AppState;

/// All `/api/v1` routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/notes", notes::router())
        .nest("/custom-priorities", catalog::priorities_router())
        .nest("/custom-types", catalog::types_router())
        .merge(presets::router())
        .merge(dispatch::router())
}
