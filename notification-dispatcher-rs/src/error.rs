//! Dispatcher failures and their HTTP mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared_types_rs::{FileDataError, NotificationResponse, RequestError};
use thiserror::Error;

use crate::transport::TransportError;

/// Every way a send-email request can fail.
///
/// Client errors (`InvalidType`, `MalformedRequest`, `ContentType`,
/// `PayloadTooLarge`) are detected before anything is rendered; the rest happen while rendering or
/// sending.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Invalid type")]
    InvalidType,

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Content type must be application/json, got '{0}'")]
    ContentType(String),

    #[error("Payload too large: maximum size is {max_bytes} bytes")]
    PayloadTooLarge { max_bytes: usize },

    #[error("Failed to render notice: {0}")]
    Render(String),

    #[error("Failed to decode attachment: {0}")]
    Attachment(#[from] FileDataError),

    #[error("Invalid address: {0}")]
    Address(String),

    #[error("Failed to send email: {0}")]
    Transport(String),
}

impl DispatchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidType | Self::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            Self::ContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Render(_) | Self::Attachment(_) | Self::Address(_) | Self::Transport(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Convert to HTTP status code and failure body
    pub fn to_response(&self) -> (StatusCode, Json<NotificationResponse>) {
        (
            self.status_code(),
            Json(NotificationResponse::failure(self.to_string())),
        )
    }
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        self.to_response().into_response()
    }
}

impl From<RequestError> for DispatchError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::UnknownKind => DispatchError::InvalidType,
            other => DispatchError::MalformedRequest(other.to_string()),
        }
    }
}

impl From<TransportError> for DispatchError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Address(reason) => DispatchError::Address(reason),
            other => DispatchError::Transport(other.to_string()),
        }
    }
}

impl From<std::fmt::Error> for DispatchError {
    fn from(err: std::fmt::Error) -> Self {
        DispatchError::Render(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(DispatchError::InvalidType.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            DispatchError::MalformedRequest("missing data".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            DispatchError::ContentType("text/plain".into()).status_code(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            DispatchError::PayloadTooLarge { max_bytes: 16 }.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            DispatchError::Transport("connection refused".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unknown_kind_maps_to_invalid_type() {
        let err: DispatchError = RequestError::UnknownKind.into();
        let (status, Json(body)) = err.to_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, NotificationResponse::failure("Invalid type"));
    }

    #[test]
    fn test_address_failures_keep_their_variant() {
        let err: DispatchError = TransportError::Address("not-an-email".into()).into();
        assert!(matches!(err, DispatchError::Address(_)));

        let err: DispatchError = TransportError::Delivery("timeout".into()).into();
        assert_eq!(err.to_string(), "Failed to send email: Delivery failed: timeout");
    }
}
