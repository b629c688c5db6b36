// intake-wizard-rs/src/i18n.rs
// English and Arabic interface text

//! Every user-facing string of the wizard lives here, keyed by the typed
//! thing it describes rather than by string ids. A missing translation is a
//! non-exhaustive match, so both languages always stay complete.

use input_validation_rs::ValidationError;
use shared_types_rs::{Field, Language, Section};

/// Title shown above a section
pub fn section_title(section: Section, language: Language) -> &'static str {
    use Section::*;
    match language {
        Language::En => match section {
            Personal => "Personal Information",
            Company => "Basic Company Information",
            Structure => "Organizational Structure",
            Culture => "Corporate Culture and Values",
            Strategy => "Strategic Direction",
            Training => "Training Experience",
        },
        Language::Ar => match section {
            Personal => "المعلومات الشخصية",
            Company => "الهوية الأساسية",
            Structure => "الهيكل والتنظيم",
            Culture => "الثقافة والقيم",
            Strategy => "التوجه الاستراتيجي",
            Training => "الخبرة مع التدريب",
        },
    }
}

/// Navigation button captions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLabels {
    pub previous: &'static str,
    pub next: &'static str,
    pub submit: &'static str,
}

impl NavLabels {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::En => Self {
                previous: "Previous",
                next: "Next",
                submit: "Submit Assessment",
            },
            Language::Ar => Self {
                previous: "السابق",
                next: "التالي",
                submit: "تقديم التقييم",
            },
        }
    }
}

/// Alert shown when the completion notice could not be delivered
pub fn submission_failed(language: Language) -> &'static str {
    match language {
        Language::En => "There was an error submitting your form. Please try again.",
        Language::Ar => "حدث خطأ أثناء إرسال النموذج. يرجى المحاولة مرة أخرى.",
    }
}

/// Content of the thank-you page shown after a successful submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationView {
    pub language: Language,
    pub title: &'static str,
    pub message: &'static str,
    pub return_label: &'static str,
}

impl ConfirmationView {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::En => Self {
                language,
                title: "Thank You for Completing the Assessment",
                message: "Your submission has been received. Our team will review your information and get back to you shortly.",
                return_label: "Return to Home",
            },
            Language::Ar => Self {
                language,
                title: "شكرًا لإكمال التقييم",
                message: "تم استلام مشاركتك. سيقوم فريقنا بمراجعة معلوماتك والرد عليك قريبًا.",
                return_label: "العودة إلى الصفحة الرئيسية",
            },
        }
    }

    pub fn dir(&self) -> &'static str {
        self.language.dir()
    }
}

/// Message for a field that failed validation.
///
/// Length and pattern failures only occur on the name, email and phone
/// fields; any other combination falls back to the field's required message.
pub fn validation_message(field: Field, error: &ValidationError, language: Language) -> &'static str {
    let ar = language == Language::Ar;
    match (field, error) {
        (Field::FullName, ValidationError::TooShort { .. }) => {
            if ar {
                "يجب أن يتكون الاسم من 3 أحرف على الأقل"
            } else {
                "Name must be at least 3 characters"
            }
        }
        (Field::Email, ValidationError::PatternMismatch(_)) => {
            if ar {
                "يرجى إدخال بريد إلكتروني صحيح"
            } else {
                "Please enter a valid email address"
            }
        }
        (Field::Phone, ValidationError::PatternMismatch(_)) => {
            if ar {
                "يرجى إدخال رقم هاتف صحيح"
            } else {
                "Please enter a valid phone number"
            }
        }
        _ => required_message(field, language),
    }
}

fn required_message(field: Field, language: Language) -> &'static str {
    use Field::*;
    let (en, ar) = match field {
        FullName => ("Full name is required", "الاسم الكامل مطلوب"),
        JobTitle => ("Job title is required", "المسمى الوظيفي مطلوب"),
        Department => ("Department is required", "القسم/الإدارة مطلوب"),
        Email => ("Email is required", "البريد الإلكتروني مطلوب"),
        Phone => ("Phone number is required", "رقم الهاتف مطلوب"),
        DateCompleted => ("Date is required", "التاريخ مطلوب"),
        CompanyName => ("Company name is required", "اسم الشركة مطلوب"),
        Industry => ("Industry/Sector is required", "القطاع أو المجال مطلوب"),
        YearEstablished => ("Year established is required", "سنة التأسيس مطلوبة"),
        Location => ("Geographic location is required", "الموقع الجغرافي مطلوب"),
        OwnershipType => ("Ownership type is required", "نوع الملكية مطلوب"),
        EmployeeCount => ("Employee count is required", "عدد الموظفين مطلوب"),
        EmployeeDistribution => (
            "Employee distribution is required",
            "توزيع الموظفين مطلوب",
        ),
        OrgLevels => ("Organizational levels are required", "المستويات الوظيفية مطلوبة"),
        OrgChartAvailable => (
            "Please specify if org chart is available",
            "يرجى تحديد ما إذا كان المخطط الهيكلي متوفرًا",
        ),
        Vision => ("Company vision is required", "الرؤية المؤسسية مطلوبة"),
        Mission => ("Company mission is required", "الرسالة المؤسسية مطلوبة"),
        CoreValues => ("Core values are required", "القيم الجوهرية مطلوبة"),
        Policies => ("Policies and procedures are required", "السياسات والإجراءات مطلوبة"),
        Objectives => ("Strategic objectives are required", "الأهداف الاستراتيجية مطلوبة"),
        Challenges => ("Challenges are required", "التحديات مطلوبة"),
        Projects => ("Projects are required", "المشروعات مطلوبة"),
        HasTrainingDept => (
            "Please specify if there is a training department",
            "يرجى تحديد ما إذا كان هناك قسم تدريب",
        ),
        TrainingPrograms => ("Training programs are required", "برامج التدريب مطلوبة"),
        EvaluatedTraining => (
            "Please specify if training has been evaluated",
            "يرجى تحديد ما إذا تم تقييم التدريب",
        ),
        EvaluationMethod => ("Evaluation method is required", "طريقة التقييم مطلوبة"),
    };
    match language {
        Language::En => en,
        Language::Ar => ar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use input_validation_rs::Pattern;

    #[test]
    fn test_section_titles() {
        assert_eq!(section_title(Section::Company, Language::En), "Basic Company Information");
        assert_eq!(section_title(Section::Training, Language::Ar), "الخبرة مع التدريب");
    }

    #[test]
    fn test_nav_labels() {
        assert_eq!(NavLabels::for_language(Language::En).submit, "Submit Assessment");
        assert_eq!(NavLabels::for_language(Language::Ar).next, "التالي");
    }

    #[test]
    fn test_validation_messages_follow_error_kind() {
        let short = ValidationError::TooShort { min: 3, actual: 2 };
        assert_eq!(
            validation_message(Field::FullName, &short, Language::En),
            "Name must be at least 3 characters"
        );
        assert_eq!(
            validation_message(Field::FullName, &ValidationError::Missing, Language::Ar),
            "الاسم الكامل مطلوب"
        );
        assert_eq!(
            validation_message(
                Field::Email,
                &ValidationError::PatternMismatch(Pattern::Email),
                Language::En
            ),
            "Please enter a valid email address"
        );
        assert_eq!(
            validation_message(Field::EvaluationMethod, &ValidationError::Missing, Language::En),
            "Evaluation method is required"
        );
    }

    #[test]
    fn test_confirmation_direction() {
        let view = ConfirmationView::for_language(Language::Ar);
        assert_eq!(view.dir(), "rtl");
        assert_eq!(view.return_label, "العودة إلى الصفحة الرئيسية");
        assert_eq!(
            ConfirmationView::for_language(Language::En).title,
            "Thank You for Completing the Assessment"
        );
    }
}
