//! Validator functions
//!
//! Each validator checks a single value and reports the first problem found.

pub mod contact;
pub mod string;

pub use contact::*;
pub use string::*;
