//! String validators

use crate::errors::{ValidationError, ValidationResult};

/// Value must contain something other than whitespace
pub fn required(s: &str) -> ValidationResult<()> {
    if s.trim().is_empty() {
        Err(ValidationError::Missing)
    } else {
        Ok(())
    }
}

/// Value must be non-empty; whitespace counts as content
pub fn required_untrimmed(s: &str) -> ValidationResult<()> {
    if s.is_empty() {
        Err(ValidationError::Missing)
    } else {
        Ok(())
    }
}

/// Trimmed value must have at least `min` characters (not bytes)
pub fn min_chars(s: &str, min: usize) -> ValidationResult<()> {
    let actual = s.trim().chars().count();
    if actual < min {
        Err(ValidationError::TooShort { min, actual })
    } else {
        Ok(())
    }
}
