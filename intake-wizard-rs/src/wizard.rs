// intake-wizard-rs/src/wizard.rs
// The step machine of one form visit

use log::{debug, error, info, warn};
use notification_client::NotificationClient;
use shared_types_rs::{
    AcknowledgmentNotice, AssessmentRecord, CompletionNotice, Field, Language,
    PersonalDetailsNotice, Section, LANGUAGE_PREFERENCE_KEY,
};

use crate::attachments::{AttachedFile, AttachmentSlot};
use crate::i18n::{self, ConfirmationView, NavLabels};
use crate::options::{Choice, OrgLevel, OwnershipType};
use crate::preferences::PreferenceStore;
use crate::validation::{validate_all, validate_personal, ValidationErrors};

/// Index of the training section, the only step that can submit
pub const LAST_STEP: usize = Section::ALL.len() - 1;

/// Result of a Next action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Now on this step; the view should scroll back to the top
    Moved(usize),
    /// The personal section is invalid; see [`IntakeWizard::errors`]
    Blocked,
    /// Not possible from the current state (last step, busy or submitted)
    Unavailable,
}

/// Result of a Submit action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The completion notice was accepted; show the confirmation view
    Submitted(ConfirmationView),
    /// At least one field is invalid; see [`IntakeWizard::errors`]
    Invalid,
    /// The completion notice failed; show the prompt and let the user retry
    Failed { prompt: &'static str },
    /// Not possible from the current state
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Editing,
    Submitted,
}

/// One visit of the assessment form.
///
/// The wizard owns the answer record and the two optional files, tracks the
/// current step and the error map, and sends notices through `C`. The
/// display language is read from `S` on construction and written back on
/// every change.
///
/// `submitting` is set while a notice is outstanding. Dropping an
/// `advance`/`submit` future before it completes leaves it set; call
/// [`IntakeWizard::restart`] to recover.
pub struct IntakeWizard<C, S> {
    client: C,
    preferences: S,
    language: Language,
    record: AssessmentRecord,
    org_chart_file: Option<AttachedFile>,
    employee_distribution_file: Option<AttachedFile>,
    step: usize,
    submitting: bool,
    errors: ValidationErrors,
    phase: Phase,
}

impl<C, S> IntakeWizard<C, S>
where
    C: NotificationClient,
    S: PreferenceStore,
{
    pub fn new(client: C, preferences: S) -> Self {
        let language = load_language(&preferences);
        Self {
            client,
            preferences,
            language,
            record: AssessmentRecord::new(),
            org_chart_file: None,
            employee_distribution_file: None,
            step: 0,
            submitting: false,
            errors: ValidationErrors::new(),
            phase: Phase::Editing,
        }
    }

    /// Start a fresh visit: step 0, new record, no errors.
    ///
    /// The language preference is read again, so a change made on the
    /// confirmation view carries over.
    pub fn restart(&mut self) {
        self.language = load_language(&self.preferences);
        self.record = AssessmentRecord::new();
        self.org_chart_file = None;
        self.employee_distribution_file = None;
        self.step = 0;
        self.submitting = false;
        self.errors = ValidationErrors::new();
        self.phase = Phase::Editing;
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn section(&self) -> Section {
        Section::from_index(self.step).unwrap_or(Section::Personal)
    }

    pub fn section_title(&self) -> &'static str {
        i18n::section_title(self.section(), self.language)
    }

    pub fn nav_labels(&self) -> NavLabels {
        NavLabels::for_language(self.language)
    }

    pub fn can_retreat(&self) -> bool {
        self.is_editing() && self.step > 0
    }

    pub fn can_advance(&self) -> bool {
        self.is_editing() && self.step < LAST_STEP
    }

    pub fn can_submit(&self) -> bool {
        self.is_editing() && self.step == LAST_STEP
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }

    fn is_editing(&self) -> bool {
        self.phase == Phase::Editing && !self.submitting
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn record(&self) -> &AssessmentRecord {
        &self.record
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn attachment(&self, slot: AttachmentSlot) -> Option<&AttachedFile> {
        match slot {
            AttachmentSlot::OrgChart => self.org_chart_file.as_ref(),
            AttachmentSlot::EmployeeDistribution => self.employee_distribution_file.as_ref(),
        }
    }

    /// Switch the display language and remember it.
    ///
    /// A store failure is logged; the switch still takes effect.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        if let Err(e) = self.preferences.set(LANGUAGE_PREFERENCE_KEY, language.code()) {
            warn!("Could not save language preference: {}", e);
        }
    }

    /// Replace a field value. Any error shown for the field is cleared.
    ///
    /// Returns `false` when the wizard is no longer editable.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.phase == Phase::Submitted {
            return false;
        }
        self.record.set(field, value);
        self.errors.clear(field);
        true
    }

    /// Record a yes/no answer. Returns `false`, leaving the record untouched,
    /// when `field` is not a yes/no question.
    pub fn set_choice(&mut self, field: Field, choice: Choice) -> bool {
        if !field.is_choice() {
            warn!("{} is not a yes/no field", field);
            return false;
        }
        self.set_field(field, choice.stored_value())
    }

    pub fn set_ownership_type(&mut self, ownership: OwnershipType) -> bool {
        self.set_field(Field::OwnershipType, ownership.label(self.language))
    }

    pub fn toggle_org_level(&mut self, level: OrgLevel) -> bool {
        let levels = level.toggle(&self.record.org_levels, self.language);
        self.set_field(Field::OrgLevels, levels)
    }

    /// Attach a file to a slot, replacing any previous one
    pub fn attach_file(&mut self, slot: AttachmentSlot, file: AttachedFile) -> bool {
        if self.phase == Phase::Submitted {
            return false;
        }
        debug!("Attached {} ({} bytes) as {:?}", file.name, file.size(), slot);
        match slot {
            AttachmentSlot::OrgChart => self.org_chart_file = Some(file),
            AttachmentSlot::EmployeeDistribution => self.employee_distribution_file = Some(file),
        }
        true
    }

    /// Previous action; never validates and never notifies
    pub fn retreat(&mut self) -> Option<usize> {
        if !self.can_retreat() {
            return None;
        }
        self.step -= 1;
        Some(self.step)
    }

    /// Next action.
    ///
    /// Leaving the personal section validates it and, when valid, sends the
    /// personal-details notice. That notice is best effort: a failure is
    /// logged and the step still advances. It is sent on every advance out of
    /// step 0, including after going back.
    pub async fn advance(&mut self) -> AdvanceOutcome {
        if !self.can_advance() {
            return AdvanceOutcome::Unavailable;
        }

        if self.step == 0 {
            let errors = validate_personal(&self.record, self.language);
            if !errors.is_empty() {
                debug!("Personal section has {} invalid field(s)", errors.len());
                self.errors = errors;
                return AdvanceOutcome::Blocked;
            }

            self.submitting = true;
            let notice = PersonalDetailsNotice::from_record(&self.record);
            match self.client.send_personal_details(notice).await {
                Ok(reply) if reply.success => info!("Personal details notice sent"),
                Ok(reply) => warn!(
                    "Personal details notice rejected: {}",
                    reply.error.as_deref().unwrap_or("unknown error")
                ),
                Err(e) => warn!("Error sending personal details notice: {}", e),
            }
            self.submitting = false;
        }

        self.step += 1;
        AdvanceOutcome::Moved(self.step)
    }

    /// Submit action, available on the last step.
    ///
    /// Every section is validated first. On success the completion notice is
    /// sent with both attachments encoded; if it fails the wizard stays on the
    /// last step with the record intact. Once it succeeds the acknowledgment
    /// is sent to the user in the current language (best effort), the record
    /// is discarded and the confirmation view returned.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.can_submit() {
            return SubmitOutcome::Unavailable;
        }

        let errors = validate_all(&self.record, self.language);
        if !errors.is_empty() {
            debug!("Submission blocked by {} invalid field(s)", errors.len());
            self.errors = errors;
            return SubmitOutcome::Invalid;
        }

        self.submitting = true;

        let notice = CompletionNotice {
            record: self.record.clone(),
            org_chart_file_data: self.org_chart_file.as_ref().map(AttachedFile::to_file_data),
            employee_distribution_file_data: self
                .employee_distribution_file
                .as_ref()
                .map(AttachedFile::to_file_data),
        };

        let failure = match self.client.send_completion(notice).await {
            Ok(reply) if reply.success => None,
            Ok(reply) => Some(reply.error.unwrap_or_else(|| "unknown error".to_string())),
            Err(e) => Some(e.to_string()),
        };
        if let Some(reason) = failure {
            error!("Error submitting form: {}", reason);
            self.submitting = false;
            return SubmitOutcome::Failed {
                prompt: i18n::submission_failed(self.language),
            };
        }
        info!("Form submitted");

        let acknowledgment = AcknowledgmentNotice {
            full_name: self.record.full_name.clone(),
            email: self.record.email.clone(),
            language: self.language,
        };
        match self.client.send_acknowledgment(acknowledgment).await {
            Ok(reply) if reply.success => info!("Thank you email sent to user"),
            Ok(reply) => warn!(
                "Thank you email rejected: {}",
                reply.error.as_deref().unwrap_or("unknown error")
            ),
            Err(e) => warn!("Error sending thank you email: {}", e),
        }

        self.record = AssessmentRecord::default();
        self.org_chart_file = None;
        self.employee_distribution_file = None;
        self.errors = ValidationErrors::new();
        self.submitting = false;
        self.phase = Phase::Submitted;

        SubmitOutcome::Submitted(ConfirmationView::for_language(self.language))
    }
}

fn load_language<S: PreferenceStore>(preferences: &S) -> Language {
    match preferences.get(LANGUAGE_PREFERENCE_KEY) {
        Ok(Some(code)) => Language::parse(&code).unwrap_or_else(|| {
            warn!("Ignoring unknown stored language {:?}", code);
            Language::default()
        }),
        Ok(None) => Language::default(),
        Err(e) => {
            warn!("Could not read language preference: {}", e);
            Language::default()
        }
    }
}
