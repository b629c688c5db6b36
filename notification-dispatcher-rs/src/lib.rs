//! # Notification Dispatcher
//!
//! Stateless HTTP endpoint that renders assessment notices and hands them to
//! a [`MailTransport`].
//!
//! `POST /api/send-email` accepts `{type, data}`:
//!
//! | type              | recipients         | attachments          |
//! |-------------------|--------------------|----------------------|
//! | `personalDetails` | administrators     | none                 |
//! | `formCompletion`  | administrators     | org chart, staff file |
//! | `thankYou`        | the user's address | none                 |
//!
//! Replies are `{success: true}` or `{success: false, error}` with a 4xx/5xx
//! status. An unknown `type` is rejected with 400 before anything is rendered.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, State},
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Datelike;
use config_rs::MailSettings;
use serde::Serialize;
use serde_json::Value;
use shared_types_rs::{NotificationRequest, NotificationResponse};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod attachments;
pub mod error;
pub mod templates;
pub mod transport;
pub mod validation;

pub use error::DispatchError;
pub use transport::{
    LogTransport, MailAttachment, MailTransport, OutgoingMail, RecordingTransport,
    SmtpMailTransport, TransportError,
};

use validation::{
    body_rejection, payload_limit_config, payload_too_large_as_json,
    validate_content_type_middleware, SEND_EMAIL_PATH,
};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub healthy: bool,
    pub service_name: String,
    pub uptime_seconds: u64,
    pub status: String,
    pub transport: String,
}

/// Renders and sends notices; shared by every request
pub struct Dispatcher {
    admin_recipients: Vec<String>,
    transport: Arc<dyn MailTransport>,
    started_at: Instant,
}

impl Dispatcher {
    pub fn new(settings: &MailSettings, transport: Arc<dyn MailTransport>) -> Self {
        Self::with_recipients(settings.admin_recipients.clone(), transport)
    }

    pub fn with_recipients(admin_recipients: Vec<String>, transport: Arc<dyn MailTransport>) -> Self {
        Self {
            admin_recipients,
            transport,
            started_at: Instant::now(),
        }
    }

    /// Render `request`, decode its attachments and send it.
    ///
    /// Attachments are decoded before the transport is called, so a bad
    /// payload never results in a partial message.
    pub async fn dispatch(&self, request: NotificationRequest) -> Result<(), DispatchError> {
        let year = chrono::Local::now().year();

        let (rendered, to, attachments) = match &request {
            NotificationRequest::PersonalDetails(notice) => (
                templates::personal_details(notice, year)?,
                self.admin_recipients.clone(),
                Vec::new(),
            ),
            NotificationRequest::FormCompletion(notice) => (
                templates::completion(notice, year)?,
                self.admin_recipients.clone(),
                attachments::collect(notice)?,
            ),
            NotificationRequest::ThankYou(notice) => (
                templates::acknowledgment(notice, year)?,
                vec![notice.email.clone()],
                Vec::new(),
            ),
        };

        log::info!(
            "Dispatching {} notice via {} to {} recipient(s) with {} attachment(s)",
            request.kind().as_str(),
            self.transport.name(),
            to.len(),
            attachments.len()
        );

        self.transport
            .send(OutgoingMail {
                to,
                subject: rendered.subject,
                html: rendered.html,
                attachments,
            })
            .await?;
        Ok(())
    }

    /// Create the Axum router with all routes and middleware
    pub fn create_router(self: Arc<Self>) -> Router {
        Router::new()
            .route("/", get(Self::root_handler))
            .route("/health", get(Self::health_handler))
            .route(SEND_EMAIL_PATH, post(Self::send_email_handler))
            .layer(middleware::from_fn(validate_content_type_middleware))
            .layer(DefaultBodyLimit::disable())
            .layer(payload_limit_config())
            .layer(middleware::map_response(payload_too_large_as_json))
            .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
            .layer(TraceLayer::new_for_http())
            .with_state(self)
    }

    async fn root_handler() -> impl IntoResponse {
        Json(serde_json::json!({
            "service": "Assessment Notification Dispatcher",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": [
                "GET /health",
                "POST /api/send-email"
            ]
        }))
    }

    async fn health_handler(State(state): State<Arc<Self>>) -> impl IntoResponse {
        Json(HealthResponse {
            healthy: true,
            service_name: "notification-dispatcher".to_string(),
            uptime_seconds: state.started_at.elapsed().as_secs(),
            status: "SERVING".to_string(),
            transport: state.transport.name().to_string(),
        })
    }

    async fn send_email_handler(
        State(state): State<Arc<Self>>,
        body: Result<Bytes, BytesRejection>,
    ) -> Result<Json<NotificationResponse>, DispatchError> {
        let body = body.map_err(body_rejection)?;
        let value: Value = serde_json::from_slice(&body)
            .map_err(|e| DispatchError::MalformedRequest(e.to_string()))?;
        let request = NotificationRequest::from_value(value)?;

        match state.dispatch(request).await {
            Ok(()) => Ok(Json(NotificationResponse::ok())),
            Err(err) => {
                tracing::error!("Error sending email: {}", err);
                Err(err)
            }
        }
    }
}
