//! Route definitions for the custom priority and custom type catalogs.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Priority catalog routes, nested under `/custom-priorities`.
///
/// ```text
/// GET    /         list_priorities (?production_id, ?module_type)
/// POST   /         create_priority
/// PUT    /{id}     update_priority
/// DELETE /{id}     delete_priority
/// ```
pub fn priorities_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(catalog::list_priorities).post(catalog::create_priority),
        )
        .route(
            "/{id}",
            axum::routing::put(catalog::update_priority).delete(catalog::delete_priority),
        )
}

/// Type catalog routes, nested under `/custom-types`. Same shape as the
/// priority catalog.
pub fn types_router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list_types).post(catalog::create_type))
        .route(
            "/{id}",
            axum::routing::put(catalog::update_type).delete(catalog::delete_type),
        )
}
