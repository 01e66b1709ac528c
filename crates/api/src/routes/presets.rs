//! Route definitions for the four preset kinds, the combined preset
//! listing, the placeholder catalog, and the preset creation wizards.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{presets, wizard};
use crate::state::AppState;

/// Preset routes, merged into `/api/v1`.
///
/// Each preset kind gets the same CRUD shape:
///
/// ```text
/// GET    /filter-sort-presets          list (?production_id, ?module_type)
/// POST   /filter-sort-presets          create
/// GET    /filter-sort-presets/{id}     get
/// PUT    /filter-sort-presets/{id}     update
/// DELETE /filter-sort-presets/{id}     delete
/// ```
///
/// Plus:
///
/// ```text
/// GET  /productions/{id}/presets       combined listing across all kinds
/// GET  /placeholders                   placeholder token catalog
/// POST /email-presets/wizard           create email+filter+page-style trio
/// POST /print-presets/wizard           create print+filter+page-style trio
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/filter-sort-presets",
            get(presets::list_filter_sort_presets).post(presets::create_filter_sort_preset),
        )
        .route(
            "/filter-sort-presets/{id}",
            get(presets::get_filter_sort_preset)
                .put(presets::update_filter_sort_preset)
                .delete(presets::delete_filter_sort_preset),
        )
        .route(
            "/page-style-presets",
            get(presets::list_page_style_presets).post(presets::create_page_style_preset),
        )
        .route(
            "/page-style-presets/{id}",
            get(presets::get_page_style_preset)
                .put(presets::update_page_style_preset)
                .delete(presets::delete_page_style_preset),
        )
        .route(
            "/email-presets",
            get(presets::list_email_presets).post(presets::create_email_preset),
        )
        .route(
            "/email-presets/{id}",
            get(presets::get_email_preset)
                .put(presets::update_email_preset)
                .delete(presets::delete_email_preset),
        )
        .route(
            "/print-presets",
            get(presets::list_print_presets).post(presets::create_print_preset),
        )
        .route(
            "/print-presets/{id}",
            get(presets::get_print_preset)
                .put(presets::update_print_preset)
                .delete(presets::delete_print_preset),
        )
        .route("/productions/{id}/presets", get(presets::list_all_presets))
        .route("/placeholders", get(presets::list_placeholders))
        .route("/email-presets/wizard", post(wizard::email_wizard))
        .route("/print-presets/wizard", post(wizard::print_wizard))
}
