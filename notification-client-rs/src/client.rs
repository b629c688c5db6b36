//! Client for the send-email endpoint

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use url::Url;

use shared_types_rs::{
    AcknowledgmentNotice, CompletionNotice, NotificationRequest, NotificationResponse,
    PersonalDetailsNotice,
};

use crate::common::{build_http_client, UserAgent};
use crate::config::ClientConfig;
use crate::error::{ErrorContext, Result, ServiceError};

/// Sends notices to the dispatcher.
///
/// Implementors only provide [`NotificationClient::send`]; the per-kind
/// helpers wrap the notice in its envelope.
#[async_trait]
pub trait NotificationClient: Send + Sync {
    /// Send one request and return the dispatcher's reply.
    ///
    /// `Ok` is returned for any well-formed reply, including
    /// `{success: false}`; callers check [`NotificationResponse::success`].
    async fn send(&self, request: NotificationRequest) -> Result<NotificationResponse>;

    async fn send_personal_details(
        &self,
        notice: PersonalDetailsNotice,
    ) -> Result<NotificationResponse> {
        self.send(NotificationRequest::PersonalDetails(notice)).await
    }

    async fn send_completion(&self, notice: CompletionNotice) -> Result<NotificationResponse> {
        self.send(NotificationRequest::FormCompletion(notice)).await
    }

    async fn send_acknowledgment(
        &self,
        notice: AcknowledgmentNotice,
    ) -> Result<NotificationResponse> {
        self.send(NotificationRequest::ThankYou(notice)).await
    }
}

/// reqwest-backed client
#[derive(Debug, Clone)]
pub struct HttpNotificationClient {
    http_client: Client,
    endpoint: Url,
}

impl HttpNotificationClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_user_agent(config, UserAgent::default())
    }

    pub fn with_user_agent(config: ClientConfig, user_agent: UserAgent) -> Result<Self> {
        Ok(Self {
            http_client: build_http_client(Some(user_agent))?,
            endpoint: config.endpoint()?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl NotificationClient for HttpNotificationClient {
    async fn send(&self, request: NotificationRequest) -> Result<NotificationResponse> {
        let kind = request.kind().as_str();
        let context = || {
            ErrorContext::new()
                .kind(kind)
                .endpoint(self.endpoint.as_str())
        };

        debug!("Sending {} notice to {}", kind, self.endpoint);

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| ServiceError::from(e).with_context(context()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::from(e).with_context(context()))?;

        // The dispatcher answers failures with the same JSON shape, so the
        // body is read before the status is considered.
        match serde_json::from_str::<NotificationResponse>(&body) {
            Ok(reply) => {
                if !reply.success {
                    warn!(
                        "Dispatcher rejected {} notice ({}): {}",
                        kind,
                        status,
                        reply.error.as_deref().unwrap_or("no reason given")
                    );
                }
                Ok(reply)
            }
            Err(_) if !status.is_success() => Err(ServiceError::service(status.as_u16(), body)
                .with_context(context().status_code(status.as_u16()))),
            Err(e) => Err(ServiceError::from(e).with_context(context())),
        }
    }
}
