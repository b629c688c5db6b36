//! Mail transports
//!
//! The dispatcher hands each rendered notice to a [`MailTransport`]:
//!
//! - [`SmtpMailTransport`]: pooled async SMTP via lettre, built from
//!   [`MailSettings`]
//! - [`LogTransport`]: writes a summary of every message to the log instead of
//!   sending it (`MAIL_TRANSPORT=log`)
//! - [`RecordingTransport`]: keeps every message in memory, for tests

use std::sync::Arc;

use async_trait::async_trait;
use config_rs::MailSettings;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Address(String),

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("SMTP setup failed: {0}")]
    Setup(String),

    #[error("Delivery failed: {0}")]
    Delivery(String),
}

/// A decoded file to attach to an outgoing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailAttachment {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// A fully rendered message ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub attachments: Vec<MailAttachment>,
}

#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    async fn send(&self, mail: OutgoingMail) -> Result<(), TransportError>;
}

/// Parse an address, keeping the offending input in the error
fn mailbox(address: &str) -> Result<Mailbox, TransportError> {
    address
        .trim()
        .parse::<Mailbox>()
        .map_err(|e| TransportError::Address(format!("{}: {}", address, e)))
}

/// Build the MIME message for `mail`.
///
/// A message without attachments is a single HTML part; otherwise a
/// `multipart/mixed` body with the HTML first and one part per attachment.
pub fn build_message(sender: &Mailbox, mail: &OutgoingMail) -> Result<Message, TransportError> {
    let mut builder = Message::builder()
        .from(sender.clone())
        .subject(mail.subject.clone());
    for recipient in &mail.to {
        builder = builder.to(mailbox(recipient)?);
    }

    let html = SinglePart::html(mail.html.clone());
    let message = if mail.attachments.is_empty() {
        builder.singlepart(html)
    } else {
        let mut body = MultiPart::mixed().singlepart(html);
        for attachment in &mail.attachments {
            let content_type = attachment_content_type(attachment)?;
            body = body.singlepart(
                Attachment::new(attachment.filename.clone())
                    .body(attachment.bytes.clone(), content_type),
            );
        }
        builder.multipart(body)
    };

    message.map_err(|e| TransportError::Build(e.to_string()))
}

/// Declared type of `attachment`, or `application/octet-stream` when lettre
/// cannot parse it.
fn attachment_content_type(attachment: &MailAttachment) -> Result<ContentType, TransportError> {
    match ContentType::parse(&attachment.content_type) {
        Ok(content_type) => Ok(content_type),
        Err(e) => {
            log::warn!(
                "Unusable content type '{}' for {} ({}), sending as {}",
                attachment.content_type,
                attachment.filename,
                e,
                OCTET_STREAM
            );
            ContentType::parse(OCTET_STREAM).map_err(|e| TransportError::Build(e.to_string()))
        }
    }
}

const OCTET_STREAM: &str = "application/octet-stream";

/// SMTP delivery through a pooled lettre transport
pub struct SmtpMailTransport {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailTransport {
    /// `smtp_secure` selects implicit TLS; otherwise STARTTLS is used when
    /// the server offers it.
    pub fn new(settings: &MailSettings) -> Result<Self, TransportError> {
        let host = settings.smtp_host.as_str();
        let builder = if settings.smtp_secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)
                .map_err(|e| TransportError::Setup(e.to_string()))?
        } else {
            let tls = TlsParameters::new(host.to_string())
                .map_err(|e| TransportError::Setup(e.to_string()))?;
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
                .tls(Tls::Opportunistic(tls))
        };
        let mut builder = builder.port(settings.smtp_port);

        if let Some((user, pass)) = settings.credentials() {
            builder = builder.credentials(Credentials::new(user.to_string(), pass.to_string()));
        }

        Ok(Self {
            transport: builder.build(),
            sender: mailbox(&settings.sender)?,
        })
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    fn name(&self) -> &'static str {
        "smtp"
    }

    async fn send(&self, mail: OutgoingMail) -> Result<(), TransportError> {
        let message = build_message(&self.sender, &mail)?;
        self.transport
            .send(message)
            .await
            .map_err(|e| TransportError::Delivery(e.to_string()))?;
        Ok(())
    }
}

/// Logs messages instead of sending them
#[derive(Debug, Default)]
pub struct LogTransport;

#[async_trait]
impl MailTransport for LogTransport {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn send(&self, mail: OutgoingMail) -> Result<(), TransportError> {
        log::info!(
            "[mail] to={} subject={:?} html_bytes={} attachments={:?}",
            mail.to.join(","),
            mail.subject,
            mail.html.len(),
            mail.attachments
                .iter()
                .map(|a| format!("{} ({} bytes)", a.filename, a.bytes.len()))
                .collect::<Vec<_>>()
        );
        Ok(())
    }
}

/// In-memory transport for tests.
///
/// Clones share the same mailbox, so a clone can be handed to the router and
/// the original inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    sent: Arc<Mutex<Vec<OutgoingMail>>>,
    failure: Option<String>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose every delivery fails with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            sent: Arc::default(),
            failure: Some(reason.into()),
        }
    }

    pub async fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, mail: OutgoingMail) -> Result<(), TransportError> {
        if let Some(reason) = &self.failure {
            return Err(TransportError::Delivery(reason.clone()));
        }
        self.sent.lock().await.push(mail);
        Ok(())
    }
}
