//! Handlers for the four preset kinds.
//!
//! All kinds share an envelope (production scope, module-or-all scope,
//! name, `is_default`) plus kind-specific payloads. System presets
//! (`production_id IS NULL`, `is_default = TRUE`) are seeded by migration
//! and are immutable: updates and deletes return 409 before touching the
//! database, and the repository `save`/`delete` statements carry an
//! `is_default = FALSE` guard as a second line of defense.
//!
//! Updates use fetch-merge-save: load the row, refuse system presets,
//! merge the patch (including explicit-null fields), validate the merged
//! result, write all mutable columns back.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use lxnotes_core::error::CoreError;
use lxnotes_core::filter_sort::FilterSortConfig;
use lxnotes_core::placeholders::available_placeholders;
use lxnotes_core::presets::{
    ensure_editable, validate_orientation, validate_paper_size, validate_preset_module,
    validate_preset_name, validate_recipients,
};
use lxnotes_core::types::DbId;
use lxnotes_db::models::any_preset::AnyPreset;
use lxnotes_db::models::email_message_preset::{CreateEmailMessagePreset, UpdateEmailMessagePreset};
use lxnotes_db::models::filter_sort_preset::{CreateFilterSortPreset, UpdateFilterSortPreset};
use lxnotes_db::models::page_style_preset::{CreatePageStylePreset, UpdatePageStylePreset};
use lxnotes_db::models::print_preset::{CreatePrintPreset, UpdatePrintPreset};
use lxnotes_db::repositories::{
    EmailMessagePresetRepo, FilterSortPresetRepo, PageStylePresetRepo, PrintPresetRepo,
};

use crate::error::{AppError, AppResult};
use crate::handlers::notes::ensure_production_exists;
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
   Query filters
   -------------------------------------------------------------------------- */

/// Scope for preset listings: a production, optionally narrowed to one
/// module (which also includes `all`-scoped presets).
#[derive(Debug, Deserialize)]
pub struct PresetListParams {
    pub production_id: DbId,
    pub module_type: Option<String>,
}

fn validate_list_params(params: &PresetListParams) -> Result<(), CoreError> {
    if let Some(ref module_type) = params.module_type {
        validate_preset_module(module_type)?;
    }
    Ok(())
}

/* --------------------------------------------------------------------------
   Filter/sort presets
   -------------------------------------------------------------------------- */

/// GET /filter-sort-presets
pub async fn list_filter_sort_presets(
    State(state): State<AppState>,
    Query(params): Query<PresetListParams>,
) -> AppResult<impl IntoResponse> {
    validate_list_params(&params)?;

    let presets = match params.module_type {
        Some(ref module_type) => {
            FilterSortPresetRepo::list_by_module(&state.pool, params.production_id, module_type)
                .await?
        }
        None => FilterSortPresetRepo::list_by_production(&state.pool, params.production_id).await?,
    };
    Ok(Json(DataResponse { data: presets }))
}

/// POST /filter-sort-presets
pub async fn create_filter_sort_preset(
    State(state): State<AppState>,
    Json(input): Json<CreateFilterSortPreset>,
) -> AppResult<impl IntoResponse> {
    validate_preset_name(&input.name)?;
    validate_preset_module(&input.module_type)?;
    // The stored payload must always be a valid engine configuration.
    FilterSortConfig {
        status_filter: input.status_filter.clone(),
        type_filters: input.type_filters.clone(),
        priority_filters: input.priority_filters.clone(),
        sort_by: input.sort_by.clone(),
        sort_order: input.sort_order.clone(),
        group_by_type: input.group_by_type,
    }
    .validate()?;
    ensure_production_exists(&state.pool, input.production_id).await?;

    let preset = FilterSortPresetRepo::create(&state.pool, &input).await?;

    tracing::info!(
        preset_id = preset.id,
        production_id = input.production_id,
        name = %preset.name,
        "Filter/sort preset created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: preset })))
}

/// GET /filter-sort-presets/{id}
pub async fn get_filter_sort_preset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let preset = FilterSortPresetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FilterSortPreset",
            id,
        }))?;
    Ok(Json(DataResponse { data: preset }))
}

/// PUT /filter-sort-presets/{id}
pub async fn update_filter_sort_preset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFilterSortPreset>,
) -> AppResult<impl IntoResponse> {
    let mut preset = FilterSortPresetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FilterSortPreset",
            id,
        }))?;
    ensure_editable(preset.is_default)?;

    if let Some(name) = input.name {
        validate_preset_name(&name)?;
        preset.name = name;
    }
    if let Some(status_filter) = input.status_filter {
        preset.status_filter = status_filter;
    }
    if let Some(type_filters) = input.type_filters {
        preset.type_filters = type_filters;
    }
    if let Some(priority_filters) = input.priority_filters {
        preset.priority_filters = priority_filters;
    }
    if let Some(sort_by) = input.sort_by {
        preset.sort_by = sort_by;
    }
    if let Some(sort_order) = input.sort_order {
        preset.sort_order = sort_order;
    }
    if let Some(group_by_type) = input.group_by_type {
        preset.group_by_type = group_by_type;
    }
    preset.config().validate()?;

    let updated = FilterSortPresetRepo::save(&state.pool, &preset)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FilterSortPreset",
            id,
        }))?;

    tracing::info!(preset_id = updated.id, "Filter/sort preset updated");
    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /filter-sort-presets/{id}
pub async fn delete_filter_sort_preset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let preset = FilterSortPresetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FilterSortPreset",
            id,
        }))?;
    ensure_editable(preset.is_default)?;

    FilterSortPresetRepo::delete(&state.pool, id).await?;

    tracing::info!(preset_id = id, "Filter/sort preset deleted");
    Ok(StatusCode::NO_CONTENT)
}

/* --------------------------------------------------------------------------
   Page style presets
   -------------------------------------------------------------------------- */

/// GET /page-style-presets
pub async fn list_page_style_presets(
    State(state): State<AppState>,
    Query(params): Query<PresetListParams>,
) -> AppResult<impl IntoResponse> {
    validate_list_params(&params)?;

    let presets = match params.module_type {
        Some(ref module_type) => {
            PageStylePresetRepo::list_by_module(&state.pool, params.production_id, module_type)
                .await?
        }
        None => PageStylePresetRepo::list_by_production(&state.pool, params.production_id).await?,
    };
    Ok(Json(DataResponse { data: presets }))
}

/// POST /page-style-presets
pub async fn create_page_style_preset(
    State(state): State<AppState>,
    Json(input): Json<CreatePageStylePreset>,
) -> AppResult<impl IntoResponse> {
    validate_preset_name(&input.name)?;
    validate_preset_module(&input.module_type)?;
    validate_paper_size(&input.paper_size)?;
    validate_orientation(&input.orientation)?;
    ensure_production_exists(&state.pool, input.production_id).await?;

    let preset = PageStylePresetRepo::create(&state.pool, &input).await?;

    tracing::info!(
        preset_id = preset.id,
        production_id = input.production_id,
        name = %preset.name,
        "Page style preset created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: preset })))
}

/// GET /page-style-presets/{id}
pub async fn get_page_style_preset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let preset = PageStylePresetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PageStylePreset",
            id,
        }))?;
    Ok(Json(DataResponse { data: preset }))
}

/// PUT /page-style-presets/{id}
pub async fn update_page_style_preset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePageStylePreset>,
) -> AppResult<impl IntoResponse> {
    let mut preset = PageStylePresetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PageStylePreset",
            id,
        }))?;
    ensure_editable(preset.is_default)?;

    if let Some(name) = input.name {
        validate_preset_name(&name)?;
        preset.name = name;
    }
    if let Some(paper_size) = input.paper_size {
        validate_paper_size(&paper_size)?;
        preset.paper_size = paper_size;
    }
    if let Some(orientation) = input.orientation {
        validate_orientation(&orientation)?;
        preset.orientation = orientation;
    }
    if let Some(include_checkboxes) = input.include_checkboxes {
        preset.include_checkboxes = include_checkboxes;
    }

    let updated = PageStylePresetRepo::save(&state.pool, &preset)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PageStylePreset",
            id,
        }))?;

    tracing::info!(preset_id = updated.id, "Page style preset updated");
    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /page-style-presets/{id}
pub async fn delete_page_style_preset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let preset = PageStylePresetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PageStylePreset",
            id,
        }))?;
    ensure_editable(preset.is_default)?;

    PageStylePresetRepo::delete(&state.pool, id).await?;

    tracing::info!(preset_id = id, "Page style preset deleted");
    Ok(StatusCode::NO_CONTENT)
}

/* --------------------------------------------------------------------------
   Email message presets
   -------------------------------------------------------------------------- */

/// GET /email-presets
pub async fn list_email_presets(
    State(state): State<AppState>,
    Query(params): Query<PresetListParams>,
) -> AppResult<impl IntoResponse> {
    validate_list_params(&params)?;

    let presets = match params.module_type {
        Some(ref module_type) => {
            EmailMessagePresetRepo::list_by_module(&state.pool, params.production_id, module_type)
                .await?
        }
        None => {
            EmailMessagePresetRepo::list_by_production(&state.pool, params.production_id).await?
        }
    };
    Ok(Json(DataResponse { data: presets }))
}

/// POST /email-presets
///
/// Recipients must parse as a comma-separated address list; the subject
/// must be non-empty. Placeholder tokens in subject/message are stored
/// verbatim and resolved at send time.
pub async fn create_email_preset(
    State(state): State<AppState>,
    Json(input): Json<CreateEmailMessagePreset>,
) -> AppResult<impl IntoResponse> {
    validate_preset_name(&input.name)?;
    validate_preset_module(&input.module_type)?;
    validate_recipients(&input.recipients)?;
    if input.subject.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Email subject must not be empty".to_string(),
        )));
    }
    ensure_production_exists(&state.pool, input.production_id).await?;

    let preset = EmailMessagePresetRepo::create(&state.pool, &input).await?;

    tracing::info!(
        preset_id = preset.id,
        production_id = input.production_id,
        name = %preset.name,
        "Email message preset created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: preset })))
}

/// GET /email-presets/{id}
pub async fn get_email_preset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let preset = EmailMessagePresetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EmailMessagePreset",
            id,
        }))?;
    Ok(Json(DataResponse { data: preset }))
}

/// PUT /email-presets/{id}
///
/// The filter and page style references are double-optional: omitted
/// means keep, explicit `null` means clear.
pub async fn update_email_preset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEmailMessagePreset>,
) -> AppResult<impl IntoResponse> {
    let mut preset = EmailMessagePresetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EmailMessagePreset",
            id,
        }))?;
    ensure_editable(preset.is_default)?;

    if let Some(name) = input.name {
        validate_preset_name(&name)?;
        preset.name = name;
    }
    if let Some(recipients) = input.recipients {
        validate_recipients(&recipients)?;
        preset.recipients = recipients;
    }
    if let Some(subject) = input.subject {
        if subject.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Email subject must not be empty".to_string(),
            )));
        }
        preset.subject = subject;
    }
    if let Some(message) = input.message {
        preset.message = message;
    }
    if let Some(filter_id) = input.filter_and_sort_preset_id {
        preset.filter_and_sort_preset_id = filter_id;
    }
    if let Some(page_style_id) = input.page_style_preset_id {
        preset.page_style_preset_id = page_style_id;
    }
    if let Some(include_notes_in_body) = input.include_notes_in_body {
        preset.include_notes_in_body = include_notes_in_body;
    }
    if let Some(attach_pdf) = input.attach_pdf {
        preset.attach_pdf = attach_pdf;
    }

    let updated = EmailMessagePresetRepo::save(&state.pool, &preset)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EmailMessagePreset",
            id,
        }))?;

    tracing::info!(preset_id = updated.id, "Email message preset updated");
    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /email-presets/{id}
pub async fn delete_email_preset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let preset = EmailMessagePresetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EmailMessagePreset",
            id,
        }))?;
    ensure_editable(preset.is_default)?;

    EmailMessagePresetRepo::delete(&state.pool, id).await?;

    tracing::info!(preset_id = id, "Email message preset deleted");
    Ok(StatusCode::NO_CONTENT)
}

/* --------------------------------------------------------------------------
   Print presets
   -------------------------------------------------------------------------- */

/// GET /print-presets
pub async fn list_print_presets(
    State(state): State<AppState>,
    Query(params): Query<PresetListParams>,
) -> AppResult<impl IntoResponse> {
    validate_list_params(&params)?;

    let presets = match params.module_type {
        Some(ref module_type) => {
            PrintPresetRepo::list_by_module(&state.pool, params.production_id, module_type).await?
        }
        None => PrintPresetRepo::list_by_production(&state.pool, params.production_id).await?,
    };
    Ok(Json(DataResponse { data: presets }))
}

/// POST /print-presets
pub async fn create_print_preset(
    State(state): State<AppState>,
    Json(input): Json<CreatePrintPreset>,
) -> AppResult<impl IntoResponse> {
    validate_preset_name(&input.name)?;
    validate_preset_module(&input.module_type)?;
    ensure_production_exists(&state.pool, input.production_id).await?;

    let preset = PrintPresetRepo::create(&state.pool, &input).await?;

    tracing::info!(
        preset_id = preset.id,
        production_id = input.production_id,
        name = %preset.name,
        "Print preset created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: preset })))
}

/// GET /print-presets/{id}
pub async fn get_print_preset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let preset = PrintPresetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PrintPreset",
            id,
        }))?;
    Ok(Json(DataResponse { data: preset }))
}

/// PUT /print-presets/{id}
pub async fn update_print_preset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePrintPreset>,
) -> AppResult<impl IntoResponse> {
    let mut preset = PrintPresetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PrintPreset",
            id,
        }))?;
    ensure_editable(preset.is_default)?;

    if let Some(name) = input.name {
        validate_preset_name(&name)?;
        preset.name = name;
    }
    if let Some(filter_id) = input.filter_and_sort_preset_id {
        preset.filter_and_sort_preset_id = filter_id;
    }
    if let Some(page_style_id) = input.page_style_preset_id {
        preset.page_style_preset_id = page_style_id;
    }

    let updated = PrintPresetRepo::save(&state.pool, &preset)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PrintPreset",
            id,
        }))?;

    tracing::info!(preset_id = updated.id, "Print preset updated");
    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /print-presets/{id}
pub async fn delete_print_preset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let preset = PrintPresetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PrintPreset",
            id,
        }))?;
    ensure_editable(preset.is_default)?;

    PrintPresetRepo::delete(&state.pool, id).await?;

    tracing::info!(preset_id = id, "Print preset deleted");
    Ok(StatusCode::NO_CONTENT)
}

/* --------------------------------------------------------------------------
   Combined listing and placeholder catalog
   -------------------------------------------------------------------------- */

/// Optional module filter for the combined preset listing.
#[derive(Debug, Deserialize)]
pub struct CombinedListParams {
    pub module_type: Option<String>,
}

/// Order a combined listing for display: kinds grouped by their tag,
/// system presets before user presets within a kind, then name
/// (case-insensitive) with id as the final tiebreak.
fn order_combined_listing(presets: &mut [AnyPreset]) {
    presets.sort_by(|a, b| {
        a.kind()
            .as_str()
            .cmp(b.kind().as_str())
            .then_with(|| b.is_default().cmp(&a.is_default()))
            .then_with(|| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
            .then_with(|| a.id().cmp(&b.id()))
    });
}

/// GET /productions/{id}/presets
///
/// One tagged list across all four preset kinds, defaults first within
/// each kind.
pub async fn list_all_presets(
    State(state): State<AppState>,
    Path(production_id): Path<DbId>,
    Query(params): Query<CombinedListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref module_type) = params.module_type {
        validate_preset_module(module_type)?;
    }
    ensure_production_exists(&state.pool, production_id).await?;

    let mut presets: Vec<AnyPreset> = Vec::new();
    match params.module_type {
        Some(ref module_type) => {
            presets.extend(
                FilterSortPresetRepo::list_by_module(&state.pool, production_id, module_type)
                    .await?
                    .into_iter()
                    .map(AnyPreset::FilterSort),
            );
            presets.extend(
                PageStylePresetRepo::list_by_module(&state.pool, production_id, module_type)
                    .await?
                    .into_iter()
                    .map(AnyPreset::PageStyle),
            );
            presets.extend(
                EmailMessagePresetRepo::list_by_module(&state.pool, production_id, module_type)
                    .await?
                    .into_iter()
                    .map(AnyPreset::EmailMessage),
            );
            presets.extend(
                PrintPresetRepo::list_by_module(&state.pool, production_id, module_type)
                    .await?
                    .into_iter()
                    .map(AnyPreset::Print),
            );
        }
        None => {
            presets.extend(
                FilterSortPresetRepo::list_by_production(&state.pool, production_id)
                    .await?
                    .into_iter()
                    .map(AnyPreset::FilterSort),
            );
            presets.extend(
                PageStylePresetRepo::list_by_production(&state.pool, production_id)
                    .await?
                    .into_iter()
                    .map(AnyPreset::PageStyle),
            );
            presets.extend(
                EmailMessagePresetRepo::list_by_production(&state.pool, production_id)
                    .await?
                    .into_iter()
                    .map(AnyPreset::EmailMessage),
            );
            presets.extend(
                PrintPresetRepo::list_by_production(&state.pool, production_id)
                    .await?
                    .into_iter()
                    .map(AnyPreset::Print),
            );
        }
    }

    order_combined_listing(&mut presets);

    Ok(Json(DataResponse { data: presets }))
}

/// GET /placeholders
///
/// The catalog of recognized `{{TOKEN}}` placeholders, with labels and
/// example values for template editors.
pub async fn list_placeholders() -> impl IntoResponse {
    Json(DataResponse {
        data: available_placeholders(),
    })
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use lxnotes_core::presets::PresetKind;
    use lxnotes_core::types::Timestamp;
    use lxnotes_db::models::filter_sort_preset::FilterSortPreset;
    use lxnotes_db::models::page_style_preset::PageStylePreset;

    fn stamp() -> Timestamp {
        chrono::Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
    }

    fn filter_preset(id: DbId, name: &str, is_default: bool) -> AnyPreset {
        AnyPreset::FilterSort(FilterSortPreset {
            id,
            production_id: if is_default { None } else { Some(1) },
            module_type: "cue".to_string(),
            name: name.to_string(),
            is_default,
            status_filter: None,
            type_filters: Vec::new(),
            priority_filters: Vec::new(),
            sort_by: "created_at".to_string(),
            sort_order: "asc".to_string(),
            group_by_type: false,
            created_by: None,
            created_at: stamp(),
            updated_at: stamp(),
        })
    }

    fn page_style_preset(id: DbId, name: &str, is_default: bool) -> AnyPreset {
        AnyPreset::PageStyle(PageStylePreset {
            id,
            production_id: if is_default { None } else { Some(1) },
            module_type: "cue".to_string(),
            name: name.to_string(),
            is_default,
            paper_size: "letter".to_string(),
            orientation: "portrait".to_string(),
            include_checkboxes: true,
            created_by: None,
            created_at: stamp(),
            updated_at: stamp(),
        })
    }

    #[test]
    fn combined_listing_groups_kinds_and_puts_defaults_first() {
        let mut presets = vec![
            page_style_preset(10, "Wide", false),
            filter_preset(3, "zebra crossing", false),
            page_style_preset(11, "Standard", true),
            filter_preset(1, "Outstanding", true),
            filter_preset(2, "Apron notes", false),
        ];

        order_combined_listing(&mut presets);

        let kinds: Vec<PresetKind> = presets.iter().map(AnyPreset::kind).collect();
        assert_eq!(
            kinds,
            vec![
                PresetKind::FilterSort,
                PresetKind::FilterSort,
                PresetKind::FilterSort,
                PresetKind::PageStyle,
                PresetKind::PageStyle,
            ]
        );

        // Within a kind: system preset first, then case-insensitive name.
        let names: Vec<&str> = presets.iter().map(AnyPreset::name).collect();
        assert_eq!(
            names,
            vec!["Outstanding", "Apron notes", "zebra crossing", "Standard", "Wide"]
        );
        assert!(presets[0].is_default());
        assert!(presets[3].is_default());
        assert_eq!(presets[3].id(), 11);
    }

    #[test]
    fn combined_listing_breaks_name_ties_by_id() {
        let mut presets = vec![
            filter_preset(9, "Focus", false),
            filter_preset(4, "focus", false),
        ];

        order_combined_listing(&mut presets);

        let ids: Vec<DbId> = presets.iter().map(AnyPreset::id).collect();
        assert_eq!(ids, vec![4, 9]);
    }
}
