//! Turning transmitted file data back into mail attachments

use shared_types_rs::{CompletionNotice, FileData};

use crate::error::DispatchError;
use crate::transport::MailAttachment;

/// Decode one transmitted file
pub fn decode(file: &FileData) -> Result<MailAttachment, DispatchError> {
    let bytes = file.decode()?;
    if file.size != 0 && file.size != bytes.len() as u64 {
        log::warn!(
            "Attachment {} declared {} bytes but decoded to {}",
            file.name,
            file.size,
            bytes.len()
        );
    }
    Ok(MailAttachment {
        filename: file.name.clone(),
        content_type: file.content_type().to_string(),
        bytes,
    })
}

/// Decode every file carried by a completion notice, org chart first.
///
/// Fails on the first file that does not decode, so nothing is sent with a
/// partial attachment set.
pub fn collect(notice: &CompletionNotice) -> Result<Vec<MailAttachment>, DispatchError> {
    notice.attachments().map(decode).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types_rs::AssessmentRecord;

    #[test]
    fn test_decode_preserves_name_size_and_type() {
        let bytes: Vec<u8> = (0..=255u8).cycle().take(4099).collect();
        let file = FileData::encode("org chart.png", "image/png", &bytes);

        let attachment = decode(&file).unwrap();
        assert_eq!(attachment.filename, "org chart.png");
        assert_eq!(attachment.content_type, "image/png");
        assert_eq!(attachment.bytes.len() as u64, file.size);
        assert_eq!(attachment.bytes, bytes);
    }

    #[test]
    fn test_collect_keeps_order_and_skips_absent() {
        let notice = CompletionNotice {
            record: AssessmentRecord::default(),
            org_chart_file_data: Some(FileData::encode("chart.pdf", "application/pdf", b"a")),
            employee_distribution_file_data: Some(FileData::encode("staff.csv", "", b"b,c")),
        };
        let names: Vec<_> = collect(&notice)
            .unwrap()
            .into_iter()
            .map(|a| (a.filename, a.content_type))
            .collect();
        assert_eq!(
            names,
            vec![
                ("chart.pdf".to_string(), "application/pdf".to_string()),
                ("staff.csv".to_string(), "application/octet-stream".to_string()),
            ]
        );

        assert!(collect(&CompletionNotice::default()).unwrap().is_empty());
    }

    #[test]
    fn test_undecodable_payload_fails() {
        let notice = CompletionNotice {
            record: AssessmentRecord::default(),
            org_chart_file_data: Some(FileData {
                name: "broken.pdf".into(),
                mime_type: "application/pdf".into(),
                size: 3,
                base64: "data:application/pdf;base64,!!!not base64".into(),
            }),
            employee_distribution_file_data: None,
        };
        let err = collect(&notice).unwrap_err();
        assert!(matches!(err, DispatchError::Attachment(_)));
        assert!(err.to_string().contains("broken.pdf"));
    }
}
