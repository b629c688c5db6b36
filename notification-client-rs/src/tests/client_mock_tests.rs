//! Client tests against a mock dispatcher

#[cfg(test)]
mod tests {
    use serde_json::json;
    use shared_types_rs::{
        AcknowledgmentNotice, AssessmentRecord, CompletionNotice, FileData, Language,
        PersonalDetailsNotice,
    };
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::{ClientConfig, HttpNotificationClient, NotificationClient, ServiceError};

    fn client_for(server: &MockServer) -> HttpNotificationClient {
        HttpNotificationClient::new(ClientConfig::default().with_base_url(server.uri()))
            .expect("client should build")
    }

    #[tokio::test]
    async fn test_personal_details_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/send-email"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "type": "personalDetails",
                "data": {
                    "fullName": "Ann Lee",
                    "jobTitle": "CFO",
                    "department": "Finance",
                    "email": "ann@acme.com",
                    "phone": "+1 (123) 456-7890",
                    "dateCompleted": "2024-05-01"
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let notice = PersonalDetailsNotice {
            full_name: "Ann Lee".into(),
            job_title: "CFO".into(),
            department: "Finance".into(),
            email: "ann@acme.com".into(),
            phone: "+1 (123) 456-7890".into(),
            date_completed: "2024-05-01".into(),
        };
        let reply = client_for(&server).send_personal_details(notice).await.unwrap();
        assert!(reply.success);
        assert_eq!(reply.error, None);
    }

    #[tokio::test]
    async fn test_acknowledgment_carries_language() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/send-email"))
            .and(body_json(json!({
                "type": "thankYou",
                "data": {"fullName": "سارة", "email": "sara@acme.com", "language": "ar"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let reply = client_for(&server)
            .send_acknowledgment(AcknowledgmentNotice {
                full_name: "سارة".into(),
                email: "sara@acme.com".into(),
                language: Language::Ar,
            })
            .await
            .unwrap();
        assert!(reply.success);
    }

    #[tokio::test]
    async fn test_failure_reply_is_returned_not_raised() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/send-email"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(json!({"success": false, "error": "Failed to send email"})),
            )
            .mount(&server)
            .await;

        let mut record = AssessmentRecord::default();
        record.full_name = "Ann Lee".into();
        let notice = CompletionNotice {
            record,
            org_chart_file_data: Some(FileData::encode("org.pdf", "application/pdf", b"%PDF-1.4")),
            employee_distribution_file_data: None,
        };

        let reply = client_for(&server).send_completion(notice).await.unwrap();
        assert!(!reply.success);
        assert_eq!(reply.error.as_deref(), Some("Failed to send email"));
    }

    #[tokio::test]
    async fn test_non_json_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .send_acknowledgment(AcknowledgmentNotice::default())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), Some(502));
        match err.root() {
            ServiceError::Service { status, message } => {
                assert_eq!(*status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_success_is_parsing_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .send_acknowledgment(AcknowledgmentNotice::default())
            .await
            .unwrap_err();
        assert!(matches!(err.root(), ServiceError::Parsing(_)));
    }

    #[tokio::test]
    async fn test_unreachable_dispatcher_is_network_error() {
        // Port 9 (discard) is not expected to be listening
        let client =
            HttpNotificationClient::new(ClientConfig::default().with_base_url("http://127.0.0.1:9"))
                .unwrap();

        let err = client
            .send_acknowledgment(AcknowledgmentNotice::default())
            .await
            .unwrap_err();
        assert!(matches!(err.root(), ServiceError::Network(_)));
    }

    #[test]
    fn test_endpoint_is_joined_to_base() {
        let client =
            HttpNotificationClient::new(ClientConfig::default().with_base_url("http://dispatch:8080"))
                .unwrap();
        assert_eq!(client.endpoint().as_str(), "http://dispatch:8080/api/send-email");
    }
}
