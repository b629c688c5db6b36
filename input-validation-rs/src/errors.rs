//! Error handling for the validation library

use std::fmt;
use thiserror::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Named patterns a value can be checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Email,
    Phone,
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Email => f.write_str("email address"),
            Pattern::Phone => f.write_str("phone number"),
        }
    }
}

/// Enum representing different validation error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Value is empty (after trimming, where the rule trims)
    #[error("Value is required")]
    Missing,

    /// Value is shorter than the minimum number of characters
    #[error("Value has {actual} characters, at least {min} required")]
    TooShort { min: usize, actual: usize },

    /// Value does not have the expected shape
    #[error("Not a valid {0}")]
    PatternMismatch(Pattern),
}

impl ValidationError {
    /// True for the "nothing entered" case, as opposed to a malformed value
    pub fn is_missing(&self) -> bool {
        matches!(self, ValidationError::Missing)
    }
}
