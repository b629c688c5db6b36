// shared-types-rs/src/notification.rs
// Request/response contract of the send-email endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::files::FileData;
use crate::language::Language;
use crate::record::AssessmentRecord;

/// Discriminator values accepted in the `type` member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    PersonalDetails,
    FormCompletion,
    ThankYou,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::PersonalDetails => "personalDetails",
            NotificationKind::FormCompletion => "formCompletion",
            NotificationKind::ThankYou => "thankYou",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "personalDetails" => Some(NotificationKind::PersonalDetails),
            "formCompletion" => Some(NotificationKind::FormCompletion),
            "thankYou" => Some(NotificationKind::ThankYou),
            _ => None,
        }
    }
}

/// Personal section snapshot sent when the user leaves the first step
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalDetailsNotice {
    pub full_name: String,
    pub job_title: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub date_completed: String,
}

impl PersonalDetailsNotice {
    pub fn from_record(record: &AssessmentRecord) -> Self {
        Self {
            full_name: record.full_name.clone(),
            job_title: record.job_title.clone(),
            department: record.department.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            date_completed: record.date_completed.clone(),
        }
    }
}

/// Full answer set plus optional attachments
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionNotice {
    #[serde(flatten)]
    pub record: AssessmentRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_chart_file_data: Option<FileData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_distribution_file_data: Option<FileData>,
}

impl CompletionNotice {
    pub fn attachments(&self) -> impl Iterator<Item = &FileData> {
        self.org_chart_file_data
            .iter()
            .chain(self.employee_distribution_file_data.iter())
    }
}

/// Thank-you message addressed to the submitting user
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AcknowledgmentNotice {
    pub full_name: String,
    pub email: String,
    pub language: Language,
}

/// A notification request, one variant per notice kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum NotificationRequest {
    #[serde(rename = "personalDetails")]
    PersonalDetails(PersonalDetailsNotice),
    #[serde(rename = "formCompletion")]
    FormCompletion(CompletionNotice),
    #[serde(rename = "thankYou")]
    ThankYou(AcknowledgmentNotice),
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Invalid type")]
    UnknownKind,

    #[error("Invalid {kind} payload: {source}")]
    InvalidPayload {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl NotificationRequest {
    pub fn kind(&self) -> NotificationKind {
        match self {
            NotificationRequest::PersonalDetails(_) => NotificationKind::PersonalDetails,
            NotificationRequest::FormCompletion(_) => NotificationKind::FormCompletion,
            NotificationRequest::ThankYou(_) => NotificationKind::ThankYou,
        }
    }

    /// Decode a `{type, data}` envelope.
    ///
    /// The discriminator is checked before the payload is looked at, so an
    /// unknown `type` is always reported as [`RequestError::UnknownKind`].
    pub fn from_value(value: Value) -> Result<Self, RequestError> {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .and_then(NotificationKind::from_wire)
            .ok_or(RequestError::UnknownKind)?;
        let data = value.get("data").cloned().unwrap_or(Value::Null);

        let invalid = |source: serde_json::Error| RequestError::InvalidPayload {
            kind: kind.as_str(),
            source,
        };
        Ok(match kind {
            NotificationKind::PersonalDetails => {
                NotificationRequest::PersonalDetails(serde_json::from_value(data).map_err(invalid)?)
            }
            NotificationKind::FormCompletion => {
                NotificationRequest::FormCompletion(serde_json::from_value(data).map_err(invalid)?)
            }
            NotificationKind::ThankYou => {
                NotificationRequest::ThankYou(serde_json::from_value(data).map_err(invalid)?)
            }
        })
    }
}

/// Endpoint reply: `{success: true}` or `{success: false, error}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NotificationResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_uses_type_and_data() {
        let request = NotificationRequest::ThankYou(AcknowledgmentNotice {
            full_name: "Sara".into(),
            email: "s@x.com".into(),
            language: Language::Ar,
        });
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"type": "thankYou", "data": {"fullName": "Sara", "email": "s@x.com", "language": "ar"}})
        );
        assert_eq!(NotificationRequest::from_value(value).unwrap(), request);
    }

    #[test]
    fn test_unknown_kind_is_rejected_before_payload() {
        let err = NotificationRequest::from_value(json!({"type": "bogus", "data": 42})).unwrap_err();
        assert!(matches!(err, RequestError::UnknownKind));
        assert_eq!(err.to_string(), "Invalid type");

        let err = NotificationRequest::from_value(json!({"data": {}})).unwrap_err();
        assert!(matches!(err, RequestError::UnknownKind));
    }

    #[test]
    fn test_payload_shape_errors() {
        let err = NotificationRequest::from_value(json!({"type": "personalDetails"})).unwrap_err();
        assert!(matches!(err, RequestError::InvalidPayload { kind: "personalDetails", .. }));
    }

    #[test]
    fn test_completion_flattens_record_and_files() {
        let mut record = AssessmentRecord::default();
        record.company_name = "Acme".into();
        let notice = CompletionNotice {
            record,
            org_chart_file_data: Some(FileData::encode("org.pdf", "application/pdf", b"%PDF")),
            employee_distribution_file_data: None,
        };
        let value = serde_json::to_value(&notice).unwrap();
        assert_eq!(value["companyName"], "Acme");
        assert_eq!(value["orgChartFileData"]["name"], "org.pdf");
        assert!(value.get("employeeDistributionFileData").is_none());

        let back: CompletionNotice = serde_json::from_value(value).unwrap();
        assert_eq!(back.attachments().count(), 1);
        assert_eq!(back, notice);
    }

    #[test]
    fn test_response_shapes() {
        assert_eq!(serde_json::to_value(NotificationResponse::ok()).unwrap(), json!({"success": true}));
        assert_eq!(
            serde_json::to_value(NotificationResponse::failure("Invalid type")).unwrap(),
            json!({"success": false, "error": "Invalid type"})
        );
    }
}
