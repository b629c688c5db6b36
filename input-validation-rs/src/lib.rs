//! # Input Validation Library
//!
//! Reusable field validators for the intake form. Validators are pure
//! functions returning a typed [`ValidationError`]; turning an error into a
//! localized message is left to the caller.
//!
//! - `validators::string`: presence and minimum length checks (trimmed)
//! - `validators::contact`: email and phone number shapes

mod errors;
pub mod validators;

pub use errors::{Pattern, ValidationError, ValidationResult};

/// Re-export commonly used validators for convenience
pub mod prelude {
    pub use crate::errors::{Pattern, ValidationError, ValidationResult};
    pub use crate::validators::contact::{email, phone};
    pub use crate::validators::string::{min_chars, required, required_untrimmed};
}

/// Minimum number of characters in a full name
pub const MIN_NAME_CHARS: usize = 3;
