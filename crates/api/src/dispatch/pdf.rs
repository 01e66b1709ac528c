//! HTTP client for the external PDF rendering service.
//!
//! The service accepts a JSON document describing the production, the
//! filtered notes, and the page layout, and responds with a base64-encoded
//! PDF. A missing `PDF_SERVICE_URL` leaves the client unconfigured; PDF
//! requests then fail with [`PdfError::NotConfigured`].

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use lxnotes_core::filter_sort::FilterSortConfig;
use lxnotes_core::presets::PageStyleSpec;
use lxnotes_db::models::note::Note;

/// Timeout for one render round-trip.
const RENDER_TIMEOUT: Duration = Duration::from_secs(60);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for PDF generation failures.
#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    /// PDF rendering is not configured (`PDF_SERVICE_URL` unset).
    #[error("PDF rendering is not configured")]
    NotConfigured,

    /// The HTTP request to the render service failed.
    #[error("PDF service request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The render service reported a failure.
    #[error("PDF service error: {0}")]
    Service(String),

    /// The returned document payload was not valid base64.
    #[error("PDF decode error: {0}")]
    Decode(#[from] base64::DecodeError),
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Render request payload sent to the PDF service.
#[derive(Debug, Serialize)]
pub struct PdfRequest<'a> {
    pub production_name: &'a str,
    pub production_logo: Option<&'a str>,
    pub module_type: &'a str,
    pub filter_config: &'a FilterSortConfig,
    pub page_style: &'a PageStyleSpec,
    /// Already filtered and sorted; the service renders in given order.
    pub notes: &'a [&'a Note],
}

/// Render response payload from the PDF service.
#[derive(Debug, Deserialize)]
struct PdfResponse {
    success: bool,
    pdf_base64: Option<String>,
    filename: Option<String>,
    error: Option<String>,
}

/// A rendered PDF document.
#[derive(Debug, Clone)]
pub struct PdfDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

// ---------------------------------------------------------------------------
// PdfClient
// ---------------------------------------------------------------------------

/// Client for the PDF rendering service.
pub struct PdfClient {
    base_url: Option<String>,
    http: reqwest::Client,
}

impl PdfClient {
    /// Create a client. `None` base URL means rendering is unavailable.
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Whether PDF rendering is configured.
    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    /// Render a notes report PDF.
    pub async fn generate(&self, request: &PdfRequest<'_>) -> Result<PdfDocument, PdfError> {
        let base_url = self.base_url.as_deref().ok_or(PdfError::NotConfigured)?;
        let url = format!("{}/render", base_url.trim_end_matches('/'));

        let response = self
            .http
            .post(&url)
            .timeout(RENDER_TIMEOUT)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<PdfResponse>()
            .await?;

        if !response.success {
            return Err(PdfError::Service(
                response
                    .error
                    .unwrap_or_else(|| "render failed without detail".to_string()),
            ));
        }

        let encoded = response
            .pdf_base64
            .ok_or_else(|| PdfError::Service("render succeeded without document".to_string()))?;
        let bytes = BASE64.decode(encoded.as_bytes())?;

        let filename = response
            .filename
            .unwrap_or_else(|| default_filename(request.module_type));

        tracing::info!(
            filename = %filename,
            bytes = bytes.len(),
            note_count = request.notes.len(),
            "PDF rendered"
        );
        Ok(PdfDocument { filename, bytes })
    }
}

/// Fallback attachment name when the service does not supply one.
fn default_filename(module_type: &str) -> String {
    format!("{module_type}_notes.pdf")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_client_rejects_render() {
        let client = PdfClient::new(None);
        assert!(!client.is_configured());

        let config = FilterSortConfig::default();
        let style = PageStyleSpec::default();
        let request = PdfRequest {
            production_name: "Joy!",
            production_logo: None,
            module_type: "cue",
            filter_config: &config,
            page_style: &style,
            notes: &[],
        };
        let result = client.generate(&request).await;
        assert!(matches!(result, Err(PdfError::NotConfigured)));
    }

    #[test]
    fn default_filename_includes_module() {
        assert_eq!(default_filename("cue"), "cue_notes.pdf");
    }
}
