//! HTML rendering of the three notices
//!
//! All documents share one shell: the brand header, a footer carrying the
//! copyright year and the support address, and `lang`/`dir` attributes
//! matching the display language. Every user-supplied value is HTML-escaped.

use std::fmt::Write;

use html_escape::encode_text;
use shared_types_rs::{
    AcknowledgmentNotice, CompletionNotice, Field, Language, PersonalDetailsNotice, Section,
};

use crate::error::DispatchError;

pub const SUPPORT_ADDRESS: &str = "info@rsmacademy.ae";
const LOGO_URL: &str = "https://cdn-nexlink.s3.us-east-2.amazonaws.com/rsm-international-vector-logo_2_eb7fb9d1-228a-426a-b682-c0d24dc736fa.jpg";

pub const PERSONAL_DETAILS_SUBJECT: &str = "New User Started Filling Form";
pub const COMPLETION_SUBJECT: &str = "Form Submission Completed";

const STYLES: &str = r#"
    body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; margin: 0; padding: 0; }
    .email-container { max-width: 600px; margin: 0 auto; padding: 20px; border: 1px solid #e5e5e5; border-radius: 8px; background-color: #ffffff; }
    .logo-container { text-align: center; margin-bottom: 20px; padding-bottom: 20px; border-bottom: 1px solid #e5e5e5; }
    .logo { max-width: 180px; height: auto; }
    h2 { color: #0056b3; margin-top: 0; margin-bottom: 20px; text-align: center; font-size: 22px; }
    p { margin-bottom: 15px; font-size: 16px; }
    .footer { margin-top: 30px; padding-top: 20px; border-top: 1px solid #e5e5e5; text-align: center; font-size: 14px; color: #666; }
    .section { margin-bottom: 25px; background-color: #f9f9f9; padding: 15px; border-radius: 5px; }
    .section h3 { color: #0056b3; margin-top: 0; margin-bottom: 15px; font-size: 18px; }
    .highlight { font-weight: bold; color: #0056b3; }
    .contact-info { background-color: #0056b3; color: white; padding: 10px 15px; border-radius: 5px; margin-top: 20px; text-align: center; }
    .contact-info a { color: white; text-decoration: underline; }
"#;

const PARAGRAPH: &str = r#"style="font-size: 16px; line-height: 1.5;""#;

/// A rendered notice, not yet addressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNotice {
    pub subject: String,
    pub html: String,
    pub language: Language,
}

/// Subject of the acknowledgment in the given language
pub fn acknowledgment_subject(language: Language) -> &'static str {
    match language {
        Language::En => "Thank You – Your Free Assessment Request Has Been Received",
        Language::Ar => "شكراً - تم استلام طلب التقييم المجاني الخاص بك",
    }
}

fn section_heading(section: Section) -> &'static str {
    match section {
        Section::Personal => "Personal Information",
        Section::Company => "Company Information",
        Section::Structure => "Organizational Structure",
        Section::Culture => "Corporate Culture and Values",
        Section::Strategy => "Strategic Direction",
        Section::Training => "Training Experience",
    }
}

fn field_label(field: Field) -> &'static str {
    match field {
        Field::FullName => "Name",
        Field::JobTitle => "Job Title",
        Field::Department => "Department",
        Field::Email => "Email",
        Field::Phone => "Phone",
        Field::DateCompleted => "Date",
        Field::CompanyName => "Company Name",
        Field::Industry => "Industry",
        Field::YearEstablished => "Year Established",
        Field::Location => "Location",
        Field::OwnershipType => "Ownership Type",
        Field::EmployeeCount => "Employee Count",
        Field::EmployeeDistribution => "Employee Distribution",
        Field::OrgLevels => "Organizational Levels",
        Field::OrgChartAvailable => "Org Chart Available",
        Field::Vision => "Vision",
        Field::Mission => "Mission",
        Field::CoreValues => "Core Values",
        Field::Policies => "Policies",
        Field::Objectives => "Objectives",
        Field::Challenges => "Challenges",
        Field::Projects => "Projects",
        Field::HasTrainingDept => "Has Training Department",
        Field::TrainingPrograms => "Training Programs",
        Field::EvaluatedTraining => "Evaluated Training",
        Field::EvaluationMethod => "Evaluation Method",
    }
}

fn row(out: &mut String, label: &str, value: &str) -> std::fmt::Result {
    writeln!(
        out,
        r#"<p><span class="highlight">{}:</span> {}</p>"#,
        label,
        encode_text(value)
    )
}

/// Wrap `content` in the shared document shell
fn shell(content: &str, language: Language, year: i32) -> Result<String, DispatchError> {
    let mut html = String::with_capacity(STYLES.len() + content.len() + 1024);
    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(
        html,
        r#"<html lang="{}" dir="{}">"#,
        language.code(),
        language.dir()
    )?;
    writeln!(html, "<head>")?;
    writeln!(html, r#"<meta charset="UTF-8">"#)?;
    writeln!(
        html,
        r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#
    )?;
    writeln!(html, "<title>RSM Academy</title>")?;
    writeln!(html, "<style>{}</style>", STYLES)?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    writeln!(html, r#"<div class="email-container">"#)?;
    writeln!(
        html,
        r#"<div class="logo-container"><img src="{}" alt="RSM Academy Logo" class="logo"></div>"#,
        LOGO_URL
    )?;
    html.push_str(content);
    writeln!(html, r#"<div class="footer">"#)?;
    writeln!(html, "<p>© {} RSM Academy. All rights reserved.</p>", year)?;
    writeln!(
        html,
        r#"<p>For support, please contact <a href="mailto:{0}">{0}</a></p>"#,
        SUPPORT_ADDRESS
    )?;
    writeln!(html, "</div>")?;
    writeln!(html, "</div>")?;
    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;
    Ok(html)
}

/// Admin notice sent when a user leaves the first step
pub fn personal_details(
    notice: &PersonalDetailsNotice,
    year: i32,
) -> Result<RenderedNotice, DispatchError> {
    let mut content = String::new();
    writeln!(content, "<h2>{}</h2>", PERSONAL_DETAILS_SUBJECT)?;
    writeln!(content, r#"<div class="section">"#)?;
    writeln!(content, "<h3>Personal Details:</h3>")?;
    for (field, value) in [
        (Field::FullName, &notice.full_name),
        (Field::JobTitle, &notice.job_title),
        (Field::Department, &notice.department),
        (Field::Email, &notice.email),
        (Field::Phone, &notice.phone),
        (Field::DateCompleted, &notice.date_completed),
    ] {
        row(&mut content, field_label(field), value)?;
    }
    writeln!(content, "</div>")?;
    writeln!(
        content,
        r#"<div class="contact-info"><p>Please check the admin dashboard for more details.</p></div>"#
    )?;

    Ok(RenderedNotice {
        subject: PERSONAL_DETAILS_SUBJECT.to_string(),
        html: shell(&content, Language::En, year)?,
        language: Language::En,
    })
}

/// Admin notice listing every answer, with attached files named in the
/// organizational structure section
pub fn completion(notice: &CompletionNotice, year: i32) -> Result<RenderedNotice, DispatchError> {
    let record = &notice.record;
    let mut content = String::new();
    writeln!(content, "<h2>User Has Completed Form Submission</h2>")?;

    for section in Section::ALL {
        writeln!(content, r#"<div class="section">"#)?;
        writeln!(content, "<h3>{}:</h3>", section_heading(section))?;
        for &field in section.fields() {
            row(&mut content, field_label(field), record.get(field))?;
        }
        if section == Section::Structure {
            if let Some(file) = &notice.org_chart_file_data {
                row(&mut content, "Org Chart File", &format!("{} (Attached)", file.name))?;
            }
            if let Some(file) = &notice.employee_distribution_file_data {
                row(
                    &mut content,
                    "Employee Distribution File",
                    &format!("{} (Attached)", file.name),
                )?;
            }
        }
        writeln!(content, "</div>")?;
    }

    Ok(RenderedNotice {
        subject: COMPLETION_SUBJECT.to_string(),
        html: shell(&content, Language::En, year)?,
        language: Language::En,
    })
}

/// Thank-you message to the submitting user, in their display language
pub fn acknowledgment(
    notice: &AcknowledgmentNotice,
    year: i32,
) -> Result<RenderedNotice, DispatchError> {
    let language = notice.language;
    let subject = acknowledgment_subject(language);
    let name = encode_text(&notice.full_name);

    let (greeting, paragraphs, closing, team, contact) = match language {
        Language::En => (
            format!("Dear {},", name),
            [
                "Thank you for completing the form and requesting your free assessment with RSM Saudi Arabia Professional Academy.",
                "We're pleased to inform you that your request has been received successfully. One of our team members will be reaching out to you shortly to discuss the next steps regarding your assessment.",
                "Should you have any immediate questions, feel free to reply to this email.",
            ],
            "Warm regards,",
            "Team RSM Saudi Professional Academy",
            "For any inquiries, please contact:",
        ),
        Language::Ar => (
            format!("عزيزي/عزيزتي {}،", name),
            [
                "شكراً لإكمال النموذج وطلب التقييم المجاني مع أكاديمية RSM السعودية المهنية.",
                "يسرنا إبلاغك بأنه تم استلام طلبك بنجاح. سيتواصل معك أحد أعضاء فريقنا قريباً لمناقشة الخطوات التالية المتعلقة بتقييمك.",
                "في حال كان لديك أي أسئلة فورية، لا تتردد في الرد على هذا البريد الإلكتروني.",
            ],
            "مع أطيب التحيات،",
            "فريق أكاديمية RSM السعودية المهنية",
            "للتواصل معنا:",
        ),
    };

    let mut content = String::new();
    writeln!(content, "<h2>{}</h2>", subject)?;
    writeln!(content, r#"<div class="section">"#)?;
    writeln!(content, "<p {}>{}</p>", PARAGRAPH, greeting)?;
    for paragraph in paragraphs {
        writeln!(content, "<p {}>{}</p>", PARAGRAPH, paragraph)?;
    }
    writeln!(content, "</div>")?;
    writeln!(content, r#"<div class="section">"#)?;
    writeln!(content, "<p {}>{}</p>", PARAGRAPH, closing)?;
    writeln!(
        content,
        r#"<p style="font-size: 16px; line-height: 1.5; font-weight: bold; color: #0056b3;">{}</p>"#,
        team
    )?;
    writeln!(content, "</div>")?;
    writeln!(
        content,
        r#"<div class="contact-info"><p>{} <a href="mailto:{1}">{1}</a></p></div>"#,
        contact, SUPPORT_ADDRESS
    )?;

    Ok(RenderedNotice {
        subject: subject.to_string(),
        html: shell(&content, language, year)?,
        language,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types_rs::{AssessmentRecord, FileData};

    fn personal() -> PersonalDetailsNotice {
        PersonalDetailsNotice {
            full_name: "Ann <Lee>".into(),
            job_title: "CFO".into(),
            department: "Finance".into(),
            email: "ann@acme.com".into(),
            phone: "123-456-7890".into(),
            date_completed: "2024-05-01".into(),
        }
    }

    #[test]
    fn test_shell_footer_and_direction() {
        let rendered = personal_details(&personal(), 2031).unwrap();
        assert!(rendered.html.contains(r#"<html lang="en" dir="ltr">"#));
        assert!(rendered.html.contains("© 2031 RSM Academy. All rights reserved."));
        assert!(rendered.html.contains("mailto:info@rsmacademy.ae"));
        assert!(rendered.html.contains(LOGO_URL));
    }

    #[test]
    fn test_personal_details_escapes_values() {
        let rendered = personal_details(&personal(), 2024).unwrap();
        assert_eq!(rendered.subject, PERSONAL_DETAILS_SUBJECT);
        assert!(rendered.html.contains("Ann &lt;Lee&gt;"));
        assert!(!rendered.html.contains("<Lee>"));
        assert!(rendered.html.contains("Please check the admin dashboard"));
    }

    #[test]
    fn test_completion_lists_every_section_and_files() {
        let mut record = AssessmentRecord::default();
        record.company_name = "Acme".into();
        record.evaluation_method = "Surveys".into();
        let notice = CompletionNotice {
            record,
            org_chart_file_data: Some(FileData::encode("chart.pdf", "application/pdf", b"x")),
            employee_distribution_file_data: None,
        };

        let rendered = completion(&notice, 2024).unwrap();
        assert_eq!(rendered.subject, COMPLETION_SUBJECT);
        for section in Section::ALL {
            assert!(rendered.html.contains(section_heading(section)));
        }
        assert!(rendered
            .html
            .contains(r#"<span class="highlight">Company Name:</span> Acme"#));
        assert!(rendered
            .html
            .contains(r#"<span class="highlight">Evaluation Method:</span> Surveys"#));
        assert!(rendered.html.contains("chart.pdf (Attached)"));
        assert!(!rendered.html.contains("Employee Distribution File"));
    }

    #[test]
    fn test_acknowledgment_follows_language() {
        let mut notice = AcknowledgmentNotice {
            full_name: "Sara".into(),
            email: "s@x.com".into(),
            language: Language::Ar,
        };
        let rendered = acknowledgment(&notice, 2024).unwrap();
        assert_eq!(rendered.subject, "شكراً - تم استلام طلب التقييم المجاني الخاص بك");
        assert!(rendered.html.contains(r#"dir="rtl""#));
        assert!(rendered.html.contains("عزيزي/عزيزتي Sara،"));

        notice.language = Language::En;
        let rendered = acknowledgment(&notice, 2024).unwrap();
        assert!(rendered.subject.starts_with("Thank You"));
        assert!(rendered.html.contains(r#"dir="ltr""#));
        assert!(rendered.html.contains("Dear Sara,"));
    }
}
