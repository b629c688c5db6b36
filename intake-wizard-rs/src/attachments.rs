// intake-wizard-rs/src/attachments.rs
// Files picked by the user, held in memory until submission

use std::io;
use std::path::Path;

use shared_types_rs::FileData;

/// The two upload slots of the organizational structure section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentSlot {
    OrgChart,
    EmployeeDistribution,
}

/// A user-selected file.
///
/// Only the raw bytes are kept while the wizard runs; the textual encoding is
/// produced by [`AttachedFile::to_file_data`] at submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl AttachedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Read a file from disk; the name is the final path component
    pub fn from_path(path: impl AsRef<Path>, mime_type: impl Into<String>) -> io::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, mime_type, bytes))
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Transmission form: a data URI plus the original name, type and size
    pub fn to_file_data(&self) -> FileData {
        FileData::encode(self.name.clone(), self.mime_type.clone(), &self.bytes)
    }
}
