use async_trait::async_trait;

use super::attachments_model::{AttachmentFile, StoredAttachment};
use crate::Result;

/// Trait defining the contract for the attachment store.
///
/// The store is a separate service from the record stores; uploads are
/// multipart, deletions are addressed by file name and best-effort.
#[async_trait]
pub trait AttachmentRepositoryTrait: Send + Sync {
    async fn upload(
        &self,
        file: AttachmentFile,
        transaction_type: &str,
    ) -> Result<StoredAttachment>;
    async fn delete(&self, file_name: &str) -> Result<()>;
}
