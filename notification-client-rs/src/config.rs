//! Configuration for the notification client

use config_rs::{get_client_address, get_default_port, NOTIFICATION_DISPATCHER};
use url::Url;

use crate::error::{Result, ServiceError};

/// Path of the send-email operation on the dispatcher
pub const SEND_EMAIL_PATH: &str = "/api/send-email";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Dispatcher base address, e.g. `http://localhost:8080`
    pub base_url: String,

    /// Path appended to `base_url`
    pub endpoint_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: format!("http://localhost:{}", get_default_port(NOTIFICATION_DISPATCHER)),
            endpoint_path: SEND_EMAIL_PATH.to_string(),
        }
    }
}

impl ClientConfig {
    /// Read the dispatcher address from `NOTIFICATION_DISPATCHER_SERVICE_ADDR` /
    /// `NOTIFICATION_DISPATCHER_SERVICE_PORT`
    pub fn from_env() -> Self {
        Self {
            base_url: get_client_address(
                NOTIFICATION_DISPATCHER,
                get_default_port(NOTIFICATION_DISPATCHER),
                None,
            ),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Full endpoint URL
    pub fn endpoint(&self) -> Result<Url> {
        let base = Url::parse(&self.base_url).map_err(|e| {
            ServiceError::configuration(format!("Invalid dispatcher address {}: {}", self.base_url, e))
        })?;
        base.join(&self.endpoint_path).map_err(|e| {
            ServiceError::configuration(format!("Invalid endpoint path {}: {}", self.endpoint_path, e))
        })
    }
}
