//! Wire contract shared by the intake wizard, the notification client and
//! the notification dispatcher.

pub mod files;
pub mod language;
pub mod notification;
pub mod record;

pub use files::{FileData, FileDataError};
pub use language::Language;
pub use notification::{
    AcknowledgmentNotice, CompletionNotice, NotificationKind, NotificationRequest,
    NotificationResponse, PersonalDetailsNotice, RequestError,
};
pub use record::{AssessmentRecord, Field, Section, AFFIRMATIVE, NEGATIVE};

/// Storage key under which the display language preference is kept
pub const LANGUAGE_PREFERENCE_KEY: &str = "formLanguage";
