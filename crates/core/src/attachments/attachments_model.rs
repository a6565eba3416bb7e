use serde::{Deserialize, Serialize};

/// An attachment file held in memory, ready to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Response shape of the attachment store after a successful upload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredAttachment {
    pub file_path: String,
    pub file_name: String,
    pub size: u64,
    pub mime_type: String,
}
