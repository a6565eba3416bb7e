use thiserror::Error;

/// Custom error type for attachment-related operations
#[derive(Debug, Error)]
pub enum AttachmentError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),
    #[error("Delete failed: {0}")]
    DeleteFailed(String),
}

impl From<AttachmentError> for String {
    fn from(error: AttachmentError) -> Self {
        error.to_string()
    }
}
