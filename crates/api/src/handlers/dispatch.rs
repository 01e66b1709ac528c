//! Handlers for the outbound dispatch flow: emailing and printing notes
//! reports.
//!
//! Both flows share the same backbone: resolve the effective send
//! parameters (preset values overridden by explicit request fields), run
//! the filter & sort engine over the production module's live notes,
//! build the placeholder context from the **filtered** set, then hand off
//! to the delivery adapter.
//!
//! Preset cross-references are weak. A dangling filter preset reference
//! degrades to the "no filter" configuration; a dangling page style
//! reference on an email preset skips the PDF attachment rather than
//! failing the send.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use lxnotes_core::error::CoreError;
use lxnotes_core::filter_sort::{
    describe_filter, describe_sort, filter_and_sort_notes, FilterSortConfig, PriorityRank,
};
use lxnotes_core::notes::{
    module_display_name, validate_module_type, STATUS_CANCELLED, STATUS_COMPLETE,
};
use lxnotes_core::placeholders::{
    date_range_label, resolve_placeholders, NoteStats, PlaceholderContext,
};
use lxnotes_core::presets::{validate_recipients, PageStyleSpec};
use lxnotes_core::types::DbId;
use lxnotes_db::models::email_message_preset::EmailMessagePreset;
use lxnotes_db::models::note::Note;
use lxnotes_db::models::production::Production;
use lxnotes_db::repositories::{
    CustomPriorityRepo, EmailMessagePresetRepo, FilterSortPresetRepo, NoteRepo,
    PageStylePresetRepo, PrintPresetRepo, ProductionRepo,
};

use crate::dispatch::email::{EmailAttachment, OutgoingEmail};
use crate::dispatch::pdf::PdfRequest;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
   Request / response types
   -------------------------------------------------------------------------- */

/// Body for POST /email/send.
///
/// Every field beyond the production/module scope is optional: a preset
/// supplies defaults and explicit fields override them. A send with no
/// preset must carry recipients and subject inline.
#[derive(Debug, Deserialize)]
pub struct SendEmailRequest {
    pub production_id: DbId,
    pub module_type: String,
    /// Email message preset supplying defaults; 404 if set but missing.
    pub preset_id: Option<DbId>,
    /// Sender display name for `{{USER_FULL_NAME}}`.
    pub sender_name: Option<String>,
    pub recipients: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub filter_preset_id: Option<DbId>,
    pub page_style_preset_id: Option<DbId>,
    pub include_notes_in_body: Option<bool>,
    pub attach_pdf: Option<bool>,
}

/// Response for POST /email/send.
#[derive(Debug, Serialize)]
pub struct SendEmailResponse {
    pub recipient_count: usize,
}

/// Body for POST /print/generate.
///
/// Either a print preset supplies the filter and page style references,
/// or they are given inline. An inline `page_style` wins over a page
/// style preset reference.
#[derive(Debug, Deserialize)]
pub struct GeneratePdfRequest {
    pub production_id: DbId,
    pub module_type: String,
    /// Print preset bundling filter + page style; 404 if set but missing.
    pub preset_id: Option<DbId>,
    pub filter_preset_id: Option<DbId>,
    pub page_style_preset_id: Option<DbId>,
    pub page_style: Option<PageStyleSpec>,
}

/// Response for POST /print/generate.
#[derive(Debug, Serialize)]
pub struct GeneratePdfResponse {
    pub filename: String,
    pub pdf_base64: String,
    pub note_count: usize,
}

/* --------------------------------------------------------------------------
   Parameter merging
   -------------------------------------------------------------------------- */

/// Effective email send parameters after preset/override merging.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailSendParams {
    pub recipients: String,
    pub subject: String,
    pub message: String,
    pub filter_preset_id: Option<DbId>,
    pub page_style_preset_id: Option<DbId>,
    pub include_notes_in_body: bool,
    pub attach_pdf: bool,
}

/// Merge a preset's stored values with explicit request overrides.
///
/// Explicit request fields always win; the preset fills the gaps; flags
/// without either source fall back to include-notes/no-PDF.
pub fn merge_email_params(
    preset: Option<&EmailMessagePreset>,
    req: &SendEmailRequest,
) -> Result<EmailSendParams, CoreError> {
    let recipients = req
        .recipients
        .clone()
        .or_else(|| preset.map(|p| p.recipients.clone()))
        .unwrap_or_default();

    let subject = req
        .subject
        .clone()
        .or_else(|| preset.map(|p| p.subject.clone()))
        .unwrap_or_default();
    if subject.trim().is_empty() {
        return Err(CoreError::Validation(
            "Email subject must not be empty".to_string(),
        ));
    }

    let message = req
        .message
        .clone()
        .or_else(|| preset.map(|p| p.message.clone()))
        .unwrap_or_default();

    Ok(EmailSendParams {
        recipients,
        subject,
        message,
        filter_preset_id: req
            .filter_preset_id
            .or_else(|| preset.and_then(|p| p.filter_and_sort_preset_id)),
        page_style_preset_id: req
            .page_style_preset_id
            .or_else(|| preset.and_then(|p| p.page_style_preset_id)),
        include_notes_in_body: req
            .include_notes_in_body
            .unwrap_or_else(|| preset.map(|p| p.include_notes_in_body).unwrap_or(true)),
        attach_pdf: req
            .attach_pdf
            .unwrap_or_else(|| preset.map(|p| p.attach_pdf).unwrap_or(false)),
    })
}

/* --------------------------------------------------------------------------
   Shared pipeline pieces
   -------------------------------------------------------------------------- */

/// Load the filter configuration behind a weak preset reference.
///
/// `None` or a dangling id both resolve to the "no filter" default.
async fn resolve_filter_config(
    pool: &lxnotes_db::DbPool,
    filter_preset_id: Option<DbId>,
) -> Result<FilterSortConfig, sqlx::Error> {
    match filter_preset_id {
        Some(id) => Ok(FilterSortPresetRepo::find_by_id(pool, id)
            .await?
            .map(|p| p.config())
            .unwrap_or_default()),
        None => Ok(FilterSortConfig::default()),
    }
}

/// Build the placeholder context for one dispatch action.
fn build_placeholder_context(
    production: &Production,
    sender_name: Option<&str>,
    module_type: &str,
    config: &FilterSortConfig,
    filtered: &[&Note],
) -> PlaceholderContext {
    let stats = NoteStats::from_notes(filtered);
    PlaceholderContext {
        production_title: production.name.clone(),
        user_full_name: sender_name.unwrap_or_default().to_string(),
        note_count: stats.total,
        todo_count: stats.todo,
        complete_count: stats.complete,
        cancelled_count: stats.cancelled,
        current_date: chrono::Utc::now().format("%B %-d, %Y").to_string(),
        module_name: module_display_name(module_type).to_string(),
        filter_description: describe_filter(config),
        sort_description: describe_sort(config),
        date_range: date_range_label(filtered),
    }
}

/// Render the filtered note list as a plain-text block for email bodies.
///
/// One line per note with a status checkbox, plus an indented description
/// line when present. Order is the engine's output order.
pub fn render_notes_plaintext(notes: &[&Note]) -> String {
    let mut out = String::new();
    for note in notes {
        let marker = match note.status.as_str() {
            STATUS_COMPLETE => "x",
            STATUS_CANCELLED => "-",
            _ => " ",
        };
        out.push('[');
        out.push_str(marker);
        out.push_str("] ");
        out.push_str(&note.title);
        if let Some(ref cue) = note.cue_number {
            out.push_str(&format!(" (cue {cue})"));
        }
        if let Some(ref channels) = note.channel_numbers {
            out.push_str(&format!(" (ch {channels})"));
        }
        out.push('\n');
        if let Some(ref description) = note.description {
            if !description.is_empty() {
                out.push_str("    ");
                out.push_str(description);
                out.push('\n');
            }
        }
    }
    out
}

/// Load the engine inputs for one dispatch action: the module's live
/// notes in creation order and its priority catalog ranks.
async fn load_engine_inputs(
    state: &AppState,
    production_id: DbId,
    module_type: &str,
) -> AppResult<(Vec<Note>, Vec<PriorityRank>)> {
    let notes = NoteRepo::list(&state.pool, production_id, module_type, None).await?;
    let ranks = CustomPriorityRepo::list_by_module(&state.pool, production_id, module_type)
        .await?
        .iter()
        .map(|p| p.rank())
        .collect();
    Ok((notes, ranks))
}

/* --------------------------------------------------------------------------
   Handlers
   -------------------------------------------------------------------------- */

/// POST /email/send
///
/// Merge preset and overrides, filter the module's notes, resolve
/// placeholders against the filtered set, optionally render and attach a
/// PDF, and deliver via SMTP.
pub async fn send_email(
    State(state): State<AppState>,
    Json(req): Json<SendEmailRequest>,
) -> AppResult<impl IntoResponse> {
    validate_module_type(&req.module_type)?;

    let production = ProductionRepo::find_by_id(&state.pool, req.production_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Production",
            id: req.production_id,
        }))?;

    let preset = match req.preset_id {
        Some(id) => Some(
            EmailMessagePresetRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "EmailMessagePreset",
                    id,
                }))?,
        ),
        None => None,
    };

    let params = merge_email_params(preset.as_ref(), &req)?;
    let recipients = validate_recipients(&params.recipients)?;

    let config = resolve_filter_config(&state.pool, params.filter_preset_id).await?;
    let (notes, ranks) = load_engine_inputs(&state, req.production_id, &req.module_type).await?;
    let filtered = filter_and_sort_notes(&notes, &config, &ranks);

    let ctx = build_placeholder_context(
        &production,
        req.sender_name.as_deref(),
        &req.module_type,
        &config,
        &filtered,
    );
    let subject = resolve_placeholders(&params.subject, &ctx);
    let mut body = resolve_placeholders(&params.message, &ctx);
    if params.include_notes_in_body && !filtered.is_empty() {
        body.push_str("\n\n");
        body.push_str(&render_notes_plaintext(&filtered));
    }

    let attachment = if params.attach_pdf {
        attach_report_pdf(&state, &production, &req.module_type, &config, &filtered, params.page_style_preset_id).await?
    } else {
        None
    };

    let recipient_count = state
        .mailer
        .send(OutgoingEmail {
            recipients,
            subject,
            body,
            attachment,
        })
        .await?;

    tracing::info!(
        production_id = req.production_id,
        module_type = %req.module_type,
        note_count = filtered.len(),
        recipient_count,
        "Notes report emailed"
    );

    Ok(Json(DataResponse {
        data: SendEmailResponse { recipient_count },
    }))
}

/// Render the PDF attachment for an email send, if a page style can be
/// resolved. A dangling page style reference skips the attachment.
async fn attach_report_pdf(
    state: &AppState,
    production: &Production,
    module_type: &str,
    config: &FilterSortConfig,
    filtered: &[&Note],
    page_style_preset_id: Option<DbId>,
) -> AppResult<Option<EmailAttachment>> {
    let style = match page_style_preset_id {
        Some(id) => match PageStylePresetRepo::find_by_id(&state.pool, id).await? {
            Some(preset) => PageStyleSpec {
                paper_size: preset.paper_size,
                orientation: preset.orientation,
                include_checkboxes: preset.include_checkboxes,
            },
            None => {
                tracing::warn!(
                    page_style_preset_id = id,
                    "Page style preset missing; sending without PDF attachment"
                );
                return Ok(None);
            }
        },
        None => PageStyleSpec::default(),
    };

    let document = state
        .pdf
        .generate(&PdfRequest {
            production_name: &production.name,
            production_logo: production.logo_url.as_deref(),
            module_type,
            filter_config: config,
            page_style: &style,
            notes: filtered,
        })
        .await?;

    Ok(Some(EmailAttachment {
        filename: document.filename,
        bytes: document.bytes,
    }))
}

/// POST /print/generate
///
/// Filter the module's notes and render them as a PDF, returned base64
/// encoded for the client to download.
pub async fn generate_pdf(
    State(state): State<AppState>,
    Json(req): Json<GeneratePdfRequest>,
) -> AppResult<impl IntoResponse> {
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine;

    validate_module_type(&req.module_type)?;

    let production = ProductionRepo::find_by_id(&state.pool, req.production_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Production",
            id: req.production_id,
        }))?;

    // A print preset bundles the filter and page style references.
    let (filter_preset_id, page_style_preset_id) = match req.preset_id {
        Some(id) => {
            let preset = PrintPresetRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "PrintPreset",
                    id,
                }))?;
            (
                Some(preset.filter_and_sort_preset_id),
                Some(preset.page_style_preset_id),
            )
        }
        None => (req.filter_preset_id, req.page_style_preset_id),
    };

    let style = match req.page_style {
        Some(style) => {
            style.validate()?;
            style
        }
        None => match page_style_preset_id {
            Some(id) => {
                let preset = PageStylePresetRepo::find_by_id(&state.pool, id)
                    .await?
                    .ok_or(AppError::Core(CoreError::Validation(format!(
                        "Page style preset {id} no longer exists"
                    ))))?;
                PageStyleSpec {
                    paper_size: preset.paper_size,
                    orientation: preset.orientation,
                    include_checkboxes: preset.include_checkboxes,
                }
            }
            None => PageStyleSpec::default(),
        },
    };

    let config = resolve_filter_config(&state.pool, filter_preset_id).await?;
    let (notes, ranks) = load_engine_inputs(&state, req.production_id, &req.module_type).await?;
    let filtered = filter_and_sort_notes(&notes, &config, &ranks);

    let document = state
        .pdf
        .generate(&PdfRequest {
            production_name: &production.name,
            production_logo: production.logo_url.as_deref(),
            module_type: &req.module_type,
            filter_config: &config,
            page_style: &style,
            notes: &filtered,
        })
        .await?;

    tracing::info!(
        production_id = req.production_id,
        module_type = %req.module_type,
        note_count = filtered.len(),
        filename = %document.filename,
        "Notes report PDF generated"
    );

    Ok(Json(DataResponse {
        data: GeneratePdfResponse {
            filename: document.filename,
            pdf_base64: BASE64.encode(&document.bytes),
            note_count: filtered.len(),
        },
    }))
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use lxnotes_core::types::Timestamp;

    fn ts(day: u32) -> Timestamp {
        chrono::Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap()
    }

    fn note(title: &str, status: &str) -> Note {
        Note {
            id: 1,
            production_id: 1,
            module_type: "cue".to_string(),
            title: title.to_string(),
            description: None,
            note_type: None,
            priority: None,
            status: status.to_string(),
            cue_number: None,
            channel_numbers: None,
            position_unit: None,
            scenery_needs: None,
            script_page_id: None,
            scene_song_id: None,
            created_by: None,
            created_at: ts(1),
            updated_at: ts(1),
            deleted_at: None,
            deleted_by: None,
        }
    }

    fn preset() -> EmailMessagePreset {
        EmailMessagePreset {
            id: 10,
            production_id: Some(1),
            module_type: "cue".to_string(),
            name: "Nightly".to_string(),
            is_default: false,
            recipients: "sm@example.com".to_string(),
            subject: "{{PRODUCTION_TITLE}} notes".to_string(),
            message: "{{TODO_COUNT}} open".to_string(),
            filter_and_sort_preset_id: Some(7),
            page_style_preset_id: Some(8),
            include_notes_in_body: true,
            attach_pdf: true,
            created_by: None,
            created_at: ts(1),
            updated_at: ts(1),
        }
    }

    fn request() -> SendEmailRequest {
        SendEmailRequest {
            production_id: 1,
            module_type: "cue".to_string(),
            preset_id: Some(10),
            sender_name: None,
            recipients: None,
            subject: None,
            message: None,
            filter_preset_id: None,
            page_style_preset_id: None,
            include_notes_in_body: None,
            attach_pdf: None,
        }
    }

    #[test]
    fn merge_takes_preset_values_when_request_is_bare() {
        let preset = preset();
        let params = merge_email_params(Some(&preset), &request()).unwrap();
        assert_eq!(params.recipients, "sm@example.com");
        assert_eq!(params.subject, "{{PRODUCTION_TITLE}} notes");
        assert_eq!(params.filter_preset_id, Some(7));
        assert_eq!(params.page_style_preset_id, Some(8));
        assert!(params.include_notes_in_body);
        assert!(params.attach_pdf);
    }

    #[test]
    fn merge_request_overrides_win() {
        let preset = preset();
        let mut req = request();
        req.recipients = Some("ld@example.com".to_string());
        req.subject = Some("Urgent".to_string());
        req.filter_preset_id = Some(99);
        req.attach_pdf = Some(false);

        let params = merge_email_params(Some(&preset), &req).unwrap();
        assert_eq!(params.recipients, "ld@example.com");
        assert_eq!(params.subject, "Urgent");
        assert_eq!(params.filter_preset_id, Some(99));
        assert!(!params.attach_pdf);
        // Untouched fields still come from the preset.
        assert_eq!(params.message, "{{TODO_COUNT}} open");
    }

    #[test]
    fn merge_without_preset_uses_request_and_defaults() {
        let mut req = request();
        req.preset_id = None;
        req.recipients = Some("sm@example.com".to_string());
        req.subject = Some("Notes".to_string());

        let params = merge_email_params(None, &req).unwrap();
        assert_eq!(params.message, "");
        assert!(params.include_notes_in_body);
        assert!(!params.attach_pdf);
        assert_eq!(params.filter_preset_id, None);
    }

    #[test]
    fn merge_rejects_missing_subject() {
        let mut req = request();
        req.preset_id = None;
        req.recipients = Some("sm@example.com".to_string());

        let err = merge_email_params(None, &req).unwrap_err();
        assert!(err.to_string().contains("subject"));
    }

    #[test]
    fn render_plaintext_markers_follow_status() {
        let notes = vec![
            note("Focus unit 3", "todo"),
            note("Refocus specials", "complete"),
            note("Strike booms", "cancelled"),
        ];
        let refs: Vec<&Note> = notes.iter().collect();
        let text = render_notes_plaintext(&refs);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "[ ] Focus unit 3");
        assert_eq!(lines[1], "[x] Refocus specials");
        assert_eq!(lines[2], "[-] Strike booms");
    }

    #[test]
    fn render_plaintext_includes_cue_and_description() {
        let mut n = note("Add warm wash", "todo");
        n.cue_number = Some("127.5".to_string());
        n.description = Some("Needs color from stock".to_string());
        let notes = vec![n];
        let refs: Vec<&Note> = notes.iter().collect();
        let text = render_notes_plaintext(&refs);
        assert_eq!(
            text,
            "[ ] Add warm wash (cue 127.5)\n    Needs color from stock\n"
        );
    }

    #[test]
    fn placeholder_context_counts_filtered_set_only() {
        let production = Production {
            id: 1,
            name: "Joy!".to_string(),
            abbreviation: None,
            logo_url: None,
            created_at: ts(1),
            updated_at: ts(1),
        };
        let notes = vec![note("a", "todo"), note("b", "todo"), note("c", "complete")];
        let refs: Vec<&Note> = notes.iter().collect();
        let config = FilterSortConfig::default();

        let ctx = build_placeholder_context(&production, Some("Alex Chen"), "cue", &config, &refs);
        assert_eq!(ctx.production_title, "Joy!");
        assert_eq!(ctx.user_full_name, "Alex Chen");
        assert_eq!(ctx.note_count, 3);
        assert_eq!(ctx.todo_count, 2);
        assert_eq!(ctx.complete_count, 1);
        assert_eq!(ctx.module_name, "Cue Notes");
        assert_eq!(ctx.date_range, "2026-03-01");

        let resolved = resolve_placeholders("{{PRODUCTION_TITLE}} - {{TODO_COUNT}} open", &ctx);
        assert_eq!(resolved, "Joy! - 2 open");
    }
}
