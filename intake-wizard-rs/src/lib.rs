//! # Intake Wizard
//!
//! Drives one visit of the six-section assessment questionnaire:
//!
//! - [`IntakeWizard`]: step machine, answer record, error map and the two
//!   points where notices are sent
//! - [`validation`]: personal-section and full-form rules with localized
//!   messages
//! - [`options`]: ownership types, organizational levels and yes/no choices
//! - [`preferences`]: where the display language is remembered
//! - [`i18n`]: English and Arabic interface text
//!
//! The wizard is presentation agnostic. A UI renders from its accessors and
//! feeds user actions into it.

pub mod attachments;
pub mod i18n;
pub mod options;
pub mod preferences;
pub mod validation;
pub mod wizard;

pub use attachments::{AttachedFile, AttachmentSlot};
pub use i18n::{ConfirmationView, NavLabels};
pub use options::{Choice, OrgLevel, OwnershipType};
pub use preferences::{FilePreferences, MemoryPreferences, PreferenceError, PreferenceStore};
pub use validation::ValidationErrors;
pub use wizard::{AdvanceOutcome, IntakeWizard, SubmitOutcome, LAST_STEP};

pub use shared_types_rs::{AssessmentRecord, Field, Language, Section};
