//! Request checks applied before the send-email handler runs

use axum::extract::rejection::BytesRejection;
use axum::extract::Request;
use axum::http::{header, HeaderMap, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tower_http::limit::RequestBodyLimitLayer;

use crate::error::DispatchError;

/// Maximum request payload size (10MB), enough for two encoded attachments
pub const MAX_PAYLOAD_SIZE: usize = 10 * 1024 * 1024;

pub const SEND_EMAIL_PATH: &str = "/api/send-email";

/// Generate middleware config for payload limits
pub fn payload_limit_config() -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(MAX_PAYLOAD_SIZE)
}

/// Map a body extraction failure onto the dispatcher's error type
pub fn body_rejection(rejection: BytesRejection) -> DispatchError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        DispatchError::PayloadTooLarge {
            max_bytes: MAX_PAYLOAD_SIZE,
        }
    } else {
        DispatchError::MalformedRequest(rejection.body_text())
    }
}

/// Replace the plain-text 413 produced by the body limit with a failure body.
///
/// The limit layer answers on its own when `Content-Length` is already over
/// the limit, so this runs outside it.
pub async fn payload_too_large_as_json(response: Response) -> Response {
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/json"))
        .unwrap_or(false);

    if response.status() == StatusCode::PAYLOAD_TOO_LARGE && !is_json {
        return DispatchError::PayloadTooLarge {
            max_bytes: MAX_PAYLOAD_SIZE,
        }
        .into_response();
    }
    response
}

/// Validate the Content-Type header
pub fn validate_content_type(headers: &HeaderMap, expected: &str) -> Result<(), DispatchError> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if !content_type.to_ascii_lowercase().starts_with(expected) {
        return Err(DispatchError::ContentType(content_type.to_string()));
    }

    Ok(())
}

/// Reject POSTs to the send-email route that are not JSON
pub async fn validate_content_type_middleware(
    req: Request,
    next: Next,
) -> Result<Response, DispatchError> {
    if req.method() == Method::POST && req.uri().path() == SEND_EMAIL_PATH {
        validate_content_type(req.headers(), "application/json")?;
    }
    Ok(next.run(req).await)
}
