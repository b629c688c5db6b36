// intake-wizard-rs/src/validation.rs
// Form rules and the localized error map

use std::collections::BTreeMap;

use input_validation_rs::prelude::*;
use input_validation_rs::MIN_NAME_CHARS;
use shared_types_rs::{AssessmentRecord, Field, Language, Section};

use crate::i18n::validation_message;

/// Localized messages for the currently invalid fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.messages.contains_key(&field)
    }

    /// Drop the message for `field`, returning whether there was one
    pub fn clear(&mut self, field: Field) -> bool {
        self.messages.remove(&field).is_some()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.messages.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.messages.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn record(&mut self, field: Field, result: ValidationResult<()>, language: Language) {
        if let Err(error) = result {
            self.messages
                .insert(field, validation_message(field, &error, language).to_string());
        }
    }
}

fn full_name(value: &str) -> ValidationResult<()> {
    required(value)?;
    min_chars(value, MIN_NAME_CHARS)
}

/// Rules for the personal section
pub fn validate_personal(record: &AssessmentRecord, language: Language) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.record(Field::FullName, full_name(&record.full_name), language);
    errors.record(Field::JobTitle, required(&record.job_title), language);
    errors.record(Field::Department, required(&record.department), language);
    errors.record(Field::Email, email(&record.email), language);
    errors.record(Field::Phone, phone(&record.phone), language);
    errors.record(
        Field::DateCompleted,
        required_untrimmed(&record.date_completed),
        language,
    );
    errors
}

/// Whether `field` must be filled in for the record to be submitted
pub fn is_required(field: Field, record: &AssessmentRecord) -> bool {
    match field {
        Field::EmployeeDistribution => false,
        Field::EvaluationMethod => record.training_was_evaluated(),
        _ => true,
    }
}

/// Every rule of the form; all failures are collected
pub fn validate_all(record: &AssessmentRecord, language: Language) -> ValidationErrors {
    let mut errors = validate_personal(record, language);
    for section in Section::ALL.into_iter().skip(1) {
        for &field in section.fields() {
            if is_required(field, record) {
                errors.record(field, required(record.get(field)), language);
            }
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn valid_personal() -> AssessmentRecord {
        let mut record = AssessmentRecord::default();
        record.full_name = "Ann Lee".into();
        record.job_title = "CFO".into();
        record.department = "Finance".into();
        record.email = "ann@acme.com".into();
        record.phone = "+1 (123) 456-7890".into();
        record.date_completed = "2024-05-01".into();
        record
    }

    fn complete(evaluated: &str) -> AssessmentRecord {
        let mut record = valid_personal();
        for field in Field::all().filter(|f| f.section() != Section::Personal) {
            record.set(field, "x");
        }
        record.set(Field::EmployeeDistribution, "");
        record.set(Field::EvaluatedTraining, evaluated);
        record.set(Field::EvaluationMethod, "");
        record
    }

    #[test]
    fn test_valid_personal_section() {
        assert!(validate_personal(&valid_personal(), Language::En).is_empty());
    }

    #[test]
    fn test_short_name_is_the_only_error() {
        let mut record = valid_personal();
        record.full_name = "Al".into();

        let errors = validate_personal(&record, Language::En);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::FullName), Some("Name must be at least 3 characters"));
    }

    #[test]
    fn test_empty_personal_section_reports_every_field_in_arabic() {
        let mut record = AssessmentRecord::default();
        record.date_completed.clear();

        let errors = validate_personal(&record, Language::Ar);
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get(Field::Email), Some("البريد الإلكتروني مطلوب"));
        assert_eq!(errors.get(Field::DateCompleted), Some("التاريخ مطلوب"));
    }

    #[test_case("a@b", Field::Email, "Please enter a valid email address" ; "email without tld")]
    #[test_case("abc", Field::Email, "Please enter a valid email address" ; "email without at")]
    #[test_case("12345", Field::Phone, "Please enter a valid phone number" ; "short phone")]
    fn test_pattern_failures(value: &str, field: Field, message: &str) {
        let mut record = valid_personal();
        record.set(field, value);
        let errors = validate_personal(&record, Language::En);
        assert_eq!(errors.get(field), Some(message));
    }

    #[test]
    fn test_date_is_not_trimmed() {
        let mut record = valid_personal();
        record.date_completed = " ".into();
        assert!(validate_personal(&record, Language::En).is_empty());
    }

    #[test_case("Yes", true ; "affirmative requires method")]
    #[test_case("No", false ; "negative does not")]
    fn test_evaluation_method_conditional(evaluated: &str, method_required: bool) {
        let record = complete(evaluated);
        let errors = validate_all(&record, Language::En);
        assert_eq!(errors.contains(Field::EvaluationMethod), method_required);
        assert_eq!(errors.len(), usize::from(method_required));
    }

    #[test]
    fn test_validate_all_collects_every_section() {
        let errors = validate_all(&AssessmentRecord::new(), Language::En);
        assert!(errors.contains(Field::FullName));
        assert!(errors.contains(Field::CompanyName));
        assert!(errors.contains(Field::OrgChartAvailable));
        assert!(errors.contains(Field::Policies));
        assert!(errors.contains(Field::Projects));
        assert!(errors.contains(Field::TrainingPrograms));
        assert!(!errors.contains(Field::EmployeeDistribution));
        assert!(!errors.contains(Field::EvaluationMethod));
        assert!(!errors.contains(Field::DateCompleted));
        // 26 fields minus date, distribution and the conditional method
        assert_eq!(errors.len(), 23);
    }

    #[test]
    fn test_clear_removes_single_field() {
        let mut errors = validate_all(&AssessmentRecord::new(), Language::En);
        let before = errors.len();
        assert!(errors.clear(Field::Vision));
        assert!(!errors.clear(Field::Vision));
        assert_eq!(errors.len(), before - 1);
    }
}
