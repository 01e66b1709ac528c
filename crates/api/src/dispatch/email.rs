//! Email delivery via SMTP.
//!
//! [`EmailSender`] wraps the `lettre` async SMTP transport to send notes
//! report emails, plain text with an optional PDF attachment. When SMTP is
//! not configured (no `SMTP_HOST`), sends fail with
//! [`EmailError::NotConfigured`] instead of silently dropping mail.

use lettre::message::header::ContentType;
use lettre::message::{Attachment, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP delivery is not configured (`SMTP_HOST` unset).
    #[error("SMTP delivery is not configured")]
    NotConfigured,

    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// A recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// Outgoing message
// ---------------------------------------------------------------------------

/// A PDF report attached to an outgoing email.
#[derive(Debug, Clone)]
pub struct EmailAttachment {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// A fully assembled outgoing email: resolved subject/body, parsed
/// recipient list, optional attachment.
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub recipients: Vec<String>,
    pub subject: String,
    pub body: String,
    pub attachment: Option<EmailAttachment>,
}

// ---------------------------------------------------------------------------
// EmailSender
// ---------------------------------------------------------------------------

/// Sends notes report emails via SMTP.
pub struct EmailSender {
    config: Option<SmtpConfig>,
}

impl EmailSender {
    /// Create a sender. `None` config means delivery is unavailable.
    pub fn new(config: Option<SmtpConfig>) -> Self {
        Self { config }
    }

    /// Whether SMTP delivery is configured.
    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Send one email to all recipients; returns the recipient count.
    pub async fn send(&self, outgoing: OutgoingEmail) -> Result<usize, EmailError> {
        let config = self.config.as_ref().ok_or(EmailError::NotConfigured)?;

        let mut builder = Message::builder()
            .from(config.from_address.parse()?)
            .subject(outgoing.subject.clone());
        for recipient in &outgoing.recipients {
            builder = builder.to(recipient.parse()?);
        }

        let email = match &outgoing.attachment {
            Some(att) => {
                let pdf_type = ContentType::parse("application/pdf")
                    .map_err(|e| EmailError::Build(e.to_string()))?;
                builder.multipart(
                    MultiPart::mixed()
                        .singlepart(
                            SinglePart::builder()
                                .header(ContentType::TEXT_PLAIN)
                                .body(outgoing.body.clone()),
                        )
                        .singlepart(
                            Attachment::new(att.filename.clone()).body(att.bytes.clone(), pdf_type),
                        ),
                )
            }
            None => builder
                .header(ContentType::TEXT_PLAIN)
                .body(outgoing.body.clone()),
        }
        .map_err(|e| EmailError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
                .port(config.smtp_port);

        if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        let recipient_count = outgoing.recipients.len();
        tracing::info!(
            recipient_count,
            subject = %outgoing.subject,
            has_attachment = outgoing.attachment.is_some(),
            "Notes email sent"
        );
        Ok(recipient_count)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_sender_rejects_send() {
        let sender = EmailSender::new(None);
        assert!(!sender.is_configured());

        let result = sender
            .send(OutgoingEmail {
                recipients: vec!["sm@example.com".to_string()],
                subject: "Notes".to_string(),
                body: "3 outstanding".to_string(),
                attachment: None,
            })
            .await;
        assert!(matches!(result, Err(EmailError::NotConfigured)));
    }

    #[test]
    fn email_error_display_build() {
        let err = EmailError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");
    }

    #[test]
    fn email_error_display_address() {
        let addr_err: Result<lettre::Address, _> = "not-an-email".parse();
        let err = EmailError::Address(addr_err.unwrap_err());
        assert!(err.to_string().contains("Email address parse error"));
    }
}
