//! config-rs/lib.rs
//! Shared configuration utilities for the intake services
//! Provides standardized port/address lookup and the mail settings the
//! notification dispatcher is constructed with.

use std::env;
use std::fmt;
use std::net::SocketAddr;

use thiserror::Error;

/// Service key for the notification dispatcher
pub const NOTIFICATION_DISPATCHER: &str = "NOTIFICATION_DISPATCHER";

/// Errors raised while building configuration from the environment
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),

    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Get service port from environment variables with proper fallback
///
/// # Arguments
/// * `service_name` - The name of the service (e.g., "NOTIFICATION_DISPATCHER")
/// * `default_port` - The default port to use if not specified in environment
pub fn get_service_port(service_name: &str, default_port: u16) -> u16 {
    let var_name = format!("{}_SERVICE_PORT", service_name.to_uppercase());
    env::var(&var_name)
        .unwrap_or_else(|_| default_port.to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            log::warn!("Invalid port in {}, using default {}", var_name, default_port);
            default_port
        })
}

/// Create a SocketAddr for binding a service
///
/// `<SERVICE>_SERVICE_ADDR` may hold either `host:port` or `http://host:port`;
/// otherwise the service binds every interface on its configured port.
pub fn get_bind_address(service_name: &str, default_port: u16) -> SocketAddr {
    let var_name = format!("{}_SERVICE_ADDR", service_name.to_uppercase());

    if let Ok(addr_str) = env::var(&var_name) {
        if let Some(addr) = parse_socket_addr(&addr_str) {
            return addr;
        }
        log::warn!("Invalid address format in {}, using default", var_name);
    }

    let port = get_service_port(service_name, default_port);
    SocketAddr::from(([0, 0, 0, 0], port))
}

fn parse_socket_addr(value: &str) -> Option<SocketAddr> {
    if let Ok(addr) = value.parse::<SocketAddr>() {
        return Some(addr);
    }
    value
        .split_once("://")
        .and_then(|(_, rest)| rest.trim_end_matches('/').parse::<SocketAddr>().ok())
}

/// Get client connection address for connecting to a service
///
/// # Arguments
/// * `service_name` - The name of the service
/// * `default_port` - The default port to use if not specified in environment
/// * `host` - Optional host to use if not specified in environment (default: "localhost")
pub fn get_client_address(service_name: &str, default_port: u16, host: Option<&str>) -> String {
    let addr_var_name = format!("{}_SERVICE_ADDR", service_name.to_uppercase());
    let port_var_name = format!("{}_SERVICE_PORT", service_name.to_uppercase());

    if let Ok(addr) = env::var(&addr_var_name) {
        return addr;
    }

    let port = env::var(&port_var_name)
        .unwrap_or_else(|_| default_port.to_string())
        .parse::<u16>()
        .unwrap_or(default_port);

    let host = host.unwrap_or("localhost");
    format!("http://{}:{}", host, port)
}

/// Get default port for a specific service
pub fn get_default_port(service_name: &str) -> u16 {
    match service_name.to_uppercase().as_str() {
        NOTIFICATION_DISPATCHER => 8080,
        _ => 50100,
    }
}

/// SMTP and addressing settings for outbound notices.
///
/// Constructed once at process start and handed to the dispatcher; handler
/// code never reads the environment itself.
#[derive(Clone, PartialEq, Eq)]
pub struct MailSettings {
    pub smtp_host: String,
    pub smtp_port: u16,
    /// `true` selects implicit TLS, otherwise STARTTLS is attempted opportunistically
    pub smtp_secure: bool,
    pub smtp_user: Option<String>,
    pub smtp_pass: Option<String>,
    /// Envelope and header sender
    pub sender: String,
    /// Administrator mailbox(es) receiving internal notices
    pub admin_recipients: Vec<String>,
}

impl MailSettings {
    pub const DEFAULT_SMTP_PORT: u16 = 587;

    /// Load settings from the process environment (after `.env`, if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let smtp_host = read("SMTP_HOST").ok_or(ConfigError::Missing("SMTP_HOST"))?;

        let smtp_port = match read("SMTP_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                var: "SMTP_PORT",
                reason: e.to_string(),
            })?,
            None => Self::DEFAULT_SMTP_PORT,
        };

        let smtp_secure = read("SMTP_SECURE")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let smtp_user = read("SMTP_USER");
        let smtp_pass = read("SMTP_PASS");
        if smtp_user.is_some() != smtp_pass.is_some() {
            return Err(ConfigError::Invalid {
                var: "SMTP_PASS",
                reason: "SMTP_USER and SMTP_PASS must be set together".to_string(),
            });
        }

        let sender = read("SMTP_FROM")
            .or_else(|| smtp_user.clone())
            .ok_or(ConfigError::Missing("SMTP_FROM"))?;

        let admin_recipients: Vec<String> = read("ADMIN_EMAIL")
            .ok_or(ConfigError::Missing("ADMIN_EMAIL"))?
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if admin_recipients.is_empty() {
            return Err(ConfigError::Invalid {
                var: "ADMIN_EMAIL",
                reason: "no recipient address given".to_string(),
            });
        }

        Ok(Self {
            smtp_host,
            smtp_port,
            smtp_secure,
            smtp_user,
            smtp_pass,
            sender,
            admin_recipients,
        })
    }

    /// Username/password pair, when authentication is configured
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.smtp_user, &self.smtp_pass) {
            (Some(user), Some(pass)) => Some((user.as_str(), pass.as_str())),
            _ => None,
        }
    }
}

impl fmt::Debug for MailSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailSettings")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_secure", &self.smtp_secure)
            .field("smtp_user", &self.smtp_user)
            .field("smtp_pass", &self.smtp_pass.as_ref().map(|_| "<redacted>"))
            .field("sender", &self.sender)
            .field("admin_recipients", &self.admin_recipients)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_get_service_port() {
        std::env::set_var("CFGTEST_SERVICE_PORT", "9000");
        assert_eq!(get_service_port("CFGTEST", 8000), 9000);

        std::env::remove_var("UNKNOWN_SERVICE_PORT");
        assert_eq!(get_service_port("UNKNOWN", 8000), 8000);
    }

    #[test]
    fn test_get_client_address() {
        std::env::set_var("CLIENTTEST_SERVICE_ADDR", "http://example.com:9000");
        assert_eq!(get_client_address("CLIENTTEST", 8000, None), "http://example.com:9000");

        std::env::remove_var("CLIENTTEST_SERVICE_ADDR");
        std::env::set_var("CLIENTTEST_SERVICE_PORT", "9001");
        assert_eq!(get_client_address("CLIENTTEST", 8000, None), "http://localhost:9001");

        std::env::remove_var("NOBODY_SERVICE_ADDR");
        std::env::remove_var("NOBODY_SERVICE_PORT");
        assert_eq!(
            get_client_address("NOBODY", 8000, Some("service.local")),
            "http://service.local:8000"
        );
    }

    #[test]
    fn test_parse_socket_addr_accepts_url_form() {
        assert_eq!(
            parse_socket_addr("http://127.0.0.1:8081"),
            Some("127.0.0.1:8081".parse().unwrap())
        );
        assert_eq!(parse_socket_addr("not-an-address"), None);
    }

    #[test]
    fn test_default_port() {
        assert_eq!(get_default_port("notification_dispatcher"), 8080);
        assert_eq!(get_default_port("other"), 50100);
    }

    #[test]
    fn test_mail_settings_full() {
        let settings = MailSettings::from_lookup(lookup_from(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_PORT", "465"),
            ("SMTP_SECURE", "true"),
            ("SMTP_USER", "mailer@example.com"),
            ("SMTP_PASS", "hunter2"),
            ("ADMIN_EMAIL", "ops@example.com, lead@example.com"),
        ]))
        .unwrap();

        assert_eq!(settings.smtp_port, 465);
        assert!(settings.smtp_secure);
        assert_eq!(settings.sender, "mailer@example.com");
        assert_eq!(settings.admin_recipients, vec!["ops@example.com", "lead@example.com"]);
        assert_eq!(settings.credentials(), Some(("mailer@example.com", "hunter2")));
        assert!(!format!("{:?}", settings).contains("hunter2"));
    }

    #[test]
    fn test_mail_settings_defaults() {
        let settings = MailSettings::from_lookup(lookup_from(&[
            ("SMTP_HOST", "localhost"),
            ("SMTP_FROM", "noreply@example.com"),
            ("ADMIN_EMAIL", "ops@example.com"),
        ]))
        .unwrap();

        assert_eq!(settings.smtp_port, MailSettings::DEFAULT_SMTP_PORT);
        assert!(!settings.smtp_secure);
        assert_eq!(settings.credentials(), None);
    }

    #[test]
    fn test_mail_settings_errors() {
        assert_eq!(
            MailSettings::from_lookup(lookup_from(&[])),
            Err(ConfigError::Missing("SMTP_HOST"))
        );

        let bad_port = MailSettings::from_lookup(lookup_from(&[
            ("SMTP_HOST", "localhost"),
            ("SMTP_PORT", "smtp"),
            ("SMTP_FROM", "a@b.co"),
            ("ADMIN_EMAIL", "ops@example.com"),
        ]));
        assert!(matches!(bad_port, Err(ConfigError::Invalid { var: "SMTP_PORT", .. })));

        let no_admin = MailSettings::from_lookup(lookup_from(&[
            ("SMTP_HOST", "localhost"),
            ("SMTP_FROM", "a@b.co"),
            ("ADMIN_EMAIL", " , "),
        ]));
        assert!(matches!(no_admin, Err(ConfigError::Invalid { var: "ADMIN_EMAIL", .. })));

        let half_credentials = MailSettings::from_lookup(lookup_from(&[
            ("SMTP_HOST", "localhost"),
            ("SMTP_USER", "a@b.co"),
            ("ADMIN_EMAIL", "ops@example.com"),
        ]));
        assert!(matches!(half_credentials, Err(ConfigError::Invalid { var: "SMTP_PASS", .. })));
    }
}
