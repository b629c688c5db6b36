// shared-types-rs/src/files.rs
// Transmission form of an uploaded attachment

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DATA_URI_MARKER: &str = ";base64,";
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Error)]
pub enum FileDataError {
    #[error("attachment {name} is not valid base64: {source}")]
    Decode {
        name: String,
        #[source]
        source: base64::DecodeError,
    },
}

/// An attached file as it travels inside a completion notice.
///
/// `base64` carries a data URI (`data:<type>;base64,<payload>`); the prefix
/// is stripped before decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileData {
    pub name: String,
    #[serde(rename = "type", default)]
    pub mime_type: String,
    #[serde(default)]
    pub size: u64,
    pub base64: String,
}

impl FileData {
    /// Encode raw bytes as a data URI the way a browser file reader does
    pub fn encode(name: impl Into<String>, mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        let mime_type = mime_type.into();
        let uri_type = if mime_type.is_empty() {
            FALLBACK_CONTENT_TYPE
        } else {
            mime_type.as_str()
        };
        let base64 = format!("data:{}{}{}", uri_type, DATA_URI_MARKER, STANDARD.encode(bytes));
        Self {
            name: name.into(),
            mime_type,
            size: bytes.len() as u64,
            base64,
        }
    }

    /// The base64 payload with any data URI prefix removed
    pub fn payload(&self) -> &str {
        self.base64.rsplit(DATA_URI_MARKER).next().unwrap_or_default()
    }

    pub fn decode(&self) -> Result<Vec<u8>, FileDataError> {
        STANDARD
            .decode(self.payload().trim())
            .map_err(|source| FileDataError::Decode {
                name: self.name.clone(),
                source,
            })
    }

    /// Declared content type, or `application/octet-stream` when none was given
    pub fn content_type(&self) -> &str {
        if self.mime_type.trim().is_empty() {
            FALLBACK_CONTENT_TYPE
        } else {
            self.mime_type.trim()
        }
    }
}
