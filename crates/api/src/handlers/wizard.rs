//! Wizard handlers: create a dispatch preset and its supporting filter
//! and page style presets in one request.
//!
//! All three inserts run in a single transaction, so a failed insert
//! leaves no orphaned supporting presets behind.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use lxnotes_core::error::CoreError;
use lxnotes_core::filter_sort::FilterSortConfig;
use lxnotes_core::presets::{validate_preset_module, validate_preset_name, validate_recipients, PageStyleSpec};
use lxnotes_core::types::DbId;
use lxnotes_db::models::email_message_preset::{CreateEmailMessagePreset, EmailMessagePreset};
use lxnotes_db::models::filter_sort_preset::{CreateFilterSortPreset, FilterSortPreset};
use lxnotes_db::models::page_style_preset::{CreatePageStylePreset, PageStylePreset};
use lxnotes_db::models::print_preset::{CreatePrintPreset, PrintPreset};
use lxnotes_db::repositories::{
    EmailMessagePresetRepo, FilterSortPresetRepo, PageStylePresetRepo, PrintPresetRepo,
};

use crate::error::AppResult;
use crate::handlers::notes::ensure_production_exists;
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
   Request / response types
   -------------------------------------------------------------------------- */

/// Body for POST /email-presets/wizard.
#[derive(Debug, Deserialize)]
pub struct EmailWizardRequest {
    pub production_id: DbId,
    pub module_type: String,
    /// Name applied to all three created presets.
    pub preset_name: String,
    pub recipients: String,
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub filter: FilterSortConfig,
    #[serde(default)]
    pub page_style: PageStyleSpec,
    #[serde(default = "default_true")]
    pub include_notes_in_body: bool,
    #[serde(default)]
    pub attach_pdf: bool,
    pub created_by: Option<DbId>,
}

fn default_true() -> bool {
    true
}

/// Response for POST /email-presets/wizard.
#[derive(Debug, Serialize)]
pub struct EmailWizardResponse {
    pub email_preset: EmailMessagePreset,
    pub filter_preset: FilterSortPreset,
    pub page_style_preset: PageStylePreset,
}

/// Body for POST /print-presets/wizard.
#[derive(Debug, Deserialize)]
pub struct PrintWizardRequest {
    pub production_id: DbId,
    pub module_type: String,
    /// Name applied to all three created presets.
    pub preset_name: String,
    #[serde(default)]
    pub filter: FilterSortConfig,
    #[serde(default)]
    pub page_style: PageStyleSpec,
    pub created_by: Option<DbId>,
}

/// Response for POST /print-presets/wizard.
#[derive(Debug, Serialize)]
pub struct PrintWizardResponse {
    pub print_preset: PrintPreset,
    pub filter_preset: FilterSortPreset,
    pub page_style_preset: PageStylePreset,
}

/* --------------------------------------------------------------------------
   Shared validation
   -------------------------------------------------------------------------- */

fn validate_wizard_common(
    module_type: &str,
    preset_name: &str,
    filter: &FilterSortConfig,
    page_style: &PageStyleSpec,
) -> Result<(), CoreError> {
    validate_preset_module(module_type)?;
    validate_preset_name(preset_name)?;
    filter.validate()?;
    page_style.validate()?;
    Ok(())
}

fn validate_email_wizard(req: &EmailWizardRequest) -> Result<(), CoreError> {
    validate_wizard_common(&req.module_type, &req.preset_name, &req.filter, &req.page_style)?;
    validate_recipients(&req.recipients)?;
    if req.subject.trim().is_empty() {
        return Err(CoreError::Validation(
            "Email subject must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn filter_input(
    production_id: DbId,
    module_type: &str,
    preset_name: &str,
    filter: &FilterSortConfig,
    created_by: Option<DbId>,
) -> CreateFilterSortPreset {
    CreateFilterSortPreset {
        production_id,
        module_type: module_type.to_string(),
        name: preset_name.to_string(),
        status_filter: filter.status_filter.clone(),
        type_filters: filter.type_filters.clone(),
        priority_filters: filter.priority_filters.clone(),
        sort_by: filter.sort_by.clone(),
        sort_order: filter.sort_order.clone(),
        group_by_type: filter.group_by_type,
        created_by,
    }
}

fn page_style_input(
    production_id: DbId,
    module_type: &str,
    preset_name: &str,
    page_style: &PageStyleSpec,
    created_by: Option<DbId>,
) -> CreatePageStylePreset {
    CreatePageStylePreset {
        production_id,
        module_type: module_type.to_string(),
        name: preset_name.to_string(),
        paper_size: page_style.paper_size.clone(),
        orientation: page_style.orientation.clone(),
        include_checkboxes: page_style.include_checkboxes,
        created_by,
    }
}

/// Build the parent email preset input, wiring in the ids of the
/// supporting presets created earlier in the same transaction.
fn email_preset_input(
    req: &EmailWizardRequest,
    filter_preset_id: DbId,
    page_style_preset_id: DbId,
) -> CreateEmailMessagePreset {
    CreateEmailMessagePreset {
        production_id: req.production_id,
        module_type: req.module_type.clone(),
        name: req.preset_name.clone(),
        recipients: req.recipients.clone(),
        subject: req.subject.clone(),
        message: req.message.clone(),
        filter_and_sort_preset_id: Some(filter_preset_id),
        page_style_preset_id: Some(page_style_preset_id),
        include_notes_in_body: req.include_notes_in_body,
        attach_pdf: req.attach_pdf,
        created_by: req.created_by,
    }
}

/// Build the parent print preset input; both supporting preset ids are
/// required here.
fn print_preset_input(
    req: &PrintWizardRequest,
    filter_preset_id: DbId,
    page_style_preset_id: DbId,
) -> CreatePrintPreset {
    CreatePrintPreset {
        production_id: req.production_id,
        module_type: req.module_type.clone(),
        name: req.preset_name.clone(),
        filter_and_sort_preset_id: filter_preset_id,
        page_style_preset_id: page_style_preset_id,
        created_by: req.created_by,
    }
}

/* --------------------------------------------------------------------------
   Handlers
   -------------------------------------------------------------------------- */

/// POST /email-presets/wizard
///
/// Create a filter/sort preset, a page style preset, and an email
/// message preset referencing both, atomically.
pub async fn email_wizard(
    State(state): State<AppState>,
    Json(req): Json<EmailWizardRequest>,
) -> AppResult<impl IntoResponse> {
    validate_email_wizard(&req)?;
    ensure_production_exists(&state.pool, req.production_id).await?;

    let mut tx = state.pool.begin().await?;

    let filter_preset = FilterSortPresetRepo::create(
        &mut *tx,
        &filter_input(
            req.production_id,
            &req.module_type,
            &req.preset_name,
            &req.filter,
            req.created_by,
        ),
    )
    .await?;

    let page_style_preset = PageStylePresetRepo::create(
        &mut *tx,
        &page_style_input(
            req.production_id,
            &req.module_type,
            &req.preset_name,
            &req.page_style,
            req.created_by,
        ),
    )
    .await?;

    let email_preset = EmailMessagePresetRepo::create(
        &mut *tx,
        &email_preset_input(&req, filter_preset.id, page_style_preset.id),
    )
    .await?;

    tx.commit().await?;

    tracing::info!(
        email_preset_id = email_preset.id,
        filter_preset_id = filter_preset.id,
        page_style_preset_id = page_style_preset.id,
        production_id = req.production_id,
        "Email preset wizard completed"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: EmailWizardResponse {
                email_preset,
                filter_preset,
                page_style_preset,
            },
        }),
    ))
}

/// POST /print-presets/wizard
///
/// Create a filter/sort preset, a page style preset, and a print preset
/// referencing both, atomically.
pub async fn print_wizard(
    State(state): State<AppState>,
    Json(req): Json<PrintWizardRequest>,
) -> AppResult<impl IntoResponse> {
    validate_wizard_common(&req.module_type, &req.preset_name, &req.filter, &req.page_style)?;
    ensure_production_exists(&state.pool, req.production_id).await?;

    let mut tx = state.pool.begin().await?;

    let filter_preset = FilterSortPresetRepo::create(
        &mut *tx,
        &filter_input(
            req.production_id,
            &req.module_type,
            &req.preset_name,
            &req.filter,
            req.created_by,
        ),
    )
    .await?;

    let page_style_preset = PageStylePresetRepo::create(
        &mut *tx,
        &page_style_input(
            req.production_id,
            &req.module_type,
            &req.preset_name,
            &req.page_style,
            req.created_by,
        ),
    )
    .await?;

    let print_preset = PrintPresetRepo::create(
        &mut *tx,
        &print_preset_input(&req, filter_preset.id, page_style_preset.id),
    )
    .await?;

    tx.commit().await?;

    tracing::info!(
        print_preset_id = print_preset.id,
        filter_preset_id = filter_preset.id,
        page_style_preset_id = page_style_preset.id,
        production_id = req.production_id,
        "Print preset wizard completed"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: PrintWizardResponse {
                print_preset,
                filter_preset,
                page_style_preset,
            },
        }),
    ))
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn email_request() -> EmailWizardRequest {
        EmailWizardRequest {
            production_id: 7,
            module_type: "cue".to_string(),
            preset_name: "Nightly Report".to_string(),
            recipients: "sm@example.com, ld@example.com".to_string(),
            subject: "{{PRODUCTION_NAME}} notes".to_string(),
            message: "See below.".to_string(),
            filter: FilterSortConfig {
                status_filter: Some("todo".to_string()),
                ..FilterSortConfig::default()
            },
            page_style: PageStyleSpec {
                orientation: "landscape".to_string(),
                ..PageStyleSpec::default()
            },
            include_notes_in_body: true,
            attach_pdf: true,
            created_by: Some(3),
        }
    }

    fn print_request() -> PrintWizardRequest {
        PrintWizardRequest {
            production_id: 7,
            module_type: "work".to_string(),
            preset_name: "Crew Sheet".to_string(),
            filter: FilterSortConfig::default(),
            page_style: PageStyleSpec::default(),
            created_by: None,
        }
    }

    #[test]
    fn filter_input_carries_name_and_config() {
        let req = email_request();
        let input = filter_input(
            req.production_id,
            &req.module_type,
            &req.preset_name,
            &req.filter,
            req.created_by,
        );

        assert_eq!(input.production_id, 7);
        assert_eq!(input.module_type, "cue");
        assert_eq!(input.name, "Nightly Report");
        assert_eq!(input.status_filter.as_deref(), Some("todo"));
        assert_eq!(input.sort_by, req.filter.sort_by);
        assert_eq!(input.created_by, Some(3));
    }

    #[test]
    fn page_style_input_carries_layout() {
        let req = email_request();
        let input = page_style_input(
            req.production_id,
            &req.module_type,
            &req.preset_name,
            &req.page_style,
            req.created_by,
        );

        assert_eq!(input.name, "Nightly Report");
        assert_eq!(input.paper_size, "letter");
        assert_eq!(input.orientation, "landscape");
        assert!(input.include_checkboxes);
    }

    #[test]
    fn email_preset_input_references_supporting_presets() {
        let req = email_request();
        let input = email_preset_input(&req, 41, 42);

        assert_eq!(input.filter_and_sort_preset_id, Some(41));
        assert_eq!(input.page_style_preset_id, Some(42));
        assert_eq!(input.name, "Nightly Report");
        assert_eq!(input.recipients, "sm@example.com, ld@example.com");
        assert_eq!(input.subject, "{{PRODUCTION_NAME}} notes");
        assert!(input.include_notes_in_body);
        assert!(input.attach_pdf);
    }

    #[test]
    fn print_preset_input_references_supporting_presets() {
        let req = print_request();
        let input = print_preset_input(&req, 51, 52);

        assert_eq!(input.filter_and_sort_preset_id, 51);
        assert_eq!(input.page_style_preset_id, 52);
        assert_eq!(input.module_type, "work");
        assert_eq!(input.name, "Crew Sheet");
        assert_eq!(input.created_by, None);
    }

    #[test]
    fn well_formed_email_request_passes_validation() {
        assert!(validate_email_wizard(&email_request()).is_ok());
    }

    #[test]
    fn blank_email_subject_rejected() {
        let req = EmailWizardRequest {
            subject: "   ".to_string(),
            ..email_request()
        };
        assert_matches!(validate_email_wizard(&req), Err(CoreError::Validation(_)));
    }

    #[test]
    fn invalid_filter_config_rejected_before_any_insert() {
        let req = EmailWizardRequest {
            filter: FilterSortConfig {
                sort_by: "mood".to_string(),
                ..FilterSortConfig::default()
            },
            ..email_request()
        };
        assert_matches!(validate_email_wizard(&req), Err(CoreError::Validation(_)));
    }
}
