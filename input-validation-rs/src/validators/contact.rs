//! Contact detail validators (email, phone)

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{Pattern, ValidationError, ValidationResult};

lazy_static! {
    /// `local@domain.tld` with no whitespace and a single `@`
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles");

    /// Optional `+` and country code, optional parenthesized area code,
    /// then 3-3-(4..6) digits separated by nothing, space, hyphen or dot
    static ref PHONE_REGEX: Regex = Regex::new(
        r"^\+?(?:[0-9]{1,3}[-\s.]?)?\(?[0-9]{3}\)?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$"
    )
    .expect("phone pattern compiles");
}

/// Value must be present and look like an email address
pub fn email(s: &str) -> ValidationResult<()> {
    if s.trim().is_empty() {
        return Err(ValidationError::Missing);
    }
    if EMAIL_REGEX.is_match(s) {
        Ok(())
    } else {
        Err(ValidationError::PatternMismatch(Pattern::Email))
    }
}

/// Value must be present and look like a phone number
pub fn phone(s: &str) -> ValidationResult<()> {
    if s.trim().is_empty() {
        return Err(ValidationError::Missing);
    }
    if PHONE_REGEX.is_match(s) {
        Ok(())
    } else {
        log::debug!("rejected phone number of {} characters", s.chars().count());
        Err(ValidationError::PatternMismatch(Pattern::Phone))
    }
}
