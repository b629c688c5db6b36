//! # Notification Client
//!
//! Thin typed boundary between the intake wizard and the notification
//! dispatcher endpoint.
//!
//! - `NotificationClient`: the trait the wizard depends on; one method per
//!   notice kind, each a single request/response round trip
//! - `HttpNotificationClient`: reqwest implementation posting the
//!   `{type, data}` envelope to `/api/send-email`
//! - `ServiceError`: transport, status and parsing failures
//!
//! There is no retry and no backoff. A failure is handed back to the caller,
//! which decides whether it blocks the user.

pub mod client;
pub use client::{HttpNotificationClient, NotificationClient};

pub mod error;
pub use error::{ErrorContext, Result, ServiceError};

pub mod config;
pub use config::ClientConfig;

mod common;

#[cfg(test)]
mod tests;

/// Create a client pointed at the dispatcher address found in the environment
pub fn notification_client() -> Result<HttpNotificationClient> {
    HttpNotificationClient::new(ClientConfig::from_env())
}
