//! Error handling for the notification client
//!
//! Errors are categorized by where the round trip broke down: the transport
//! (`Network`), the dispatcher's answer (`Service`), or our reading of it
//! (`Parsing`). Every variant can carry an [`ErrorContext`].

use std::fmt;
use thiserror::Error;

/// Result type for notification client operations
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Main error type for the notification client
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Connection or transport errors; the dispatcher was not reached or did not answer
    #[error("Network error: {0}")]
    Network(String),

    /// The dispatcher answered with a non-success status and no readable body
    #[error("Service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// Response parsing errors
    #[error("Parsing error: {0}")]
    Parsing(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Errors with additional context
    #[error("{inner}")]
    WithContext {
        inner: Box<ServiceError>,
        context: ErrorContext,
    },
}

impl ServiceError {
    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        ServiceError::Network(message.into())
    }

    /// Create a service error for an HTTP status
    pub fn service(status: u16, message: impl Into<String>) -> Self {
        ServiceError::Service {
            status,
            message: message.into(),
        }
    }

    /// Create a parsing error
    pub fn parsing(message: impl Into<String>) -> Self {
        ServiceError::Parsing(message.into())
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        ServiceError::Configuration(message.into())
    }

    /// Add context to an existing error
    pub fn with_context(self, context: ErrorContext) -> Self {
        ServiceError::WithContext {
            inner: Box::new(self),
            context,
        }
    }

    /// Get the HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ServiceError::Service { status, .. } => Some(*status),
            ServiceError::WithContext { inner, context } => {
                context.status_code.or_else(|| inner.status_code())
            }
            _ => None,
        }
    }

    /// The error without any context wrappers
    pub fn root(&self) -> &ServiceError {
        match self {
            ServiceError::WithContext { inner, .. } => inner.root(),
            other => other,
        }
    }
}

/// Error context information
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Notice kind being sent
    pub kind: Option<String>,

    /// HTTP status code if applicable
    pub status_code: Option<u16>,

    /// Endpoint that was called
    pub endpoint: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn status_code(mut self, code: u16) -> Self {
        self.status_code = Some(code);
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "kind={} endpoint={}",
            self.kind.as_deref().unwrap_or("-"),
            self.endpoint.as_deref().unwrap_or("-")
        )?;
        if let Some(status) = self.status_code {
            write!(f, " status={}", status)?;
        }
        Ok(())
    }
}

/// Convert reqwest errors to ServiceError
impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        let service_error = if err.is_timeout() {
            ServiceError::network(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            ServiceError::network(format!("Connection error: {}", err))
        } else if err.is_decode() {
            ServiceError::parsing(format!("Response decode error: {}", err))
        } else {
            ServiceError::network(format!("HTTP client error: {}", err))
        };

        match err.status() {
            Some(status) => service_error.with_context(ErrorContext::new().status_code(status.as_u16())),
            None => service_error,
        }
    }
}

/// Convert serde_json errors to ServiceError
impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::parsing(format!("JSON error: {}", err))
    }
}
