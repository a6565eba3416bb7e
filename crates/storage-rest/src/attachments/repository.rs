use async_trait::async_trait;
use log::debug;
use reqwest::multipart;
use std::sync::Arc;

use digibank_core::attachments::{AttachmentFile, AttachmentRepositoryTrait, StoredAttachment};
use digibank_core::Result;

use crate::client::RestClient;
use crate::errors::RestError;

pub struct AttachmentRepository {
    client: Arc<RestClient>,
}

impl AttachmentRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        AttachmentRepository { client }
    }
}

#[async_trait]
impl AttachmentRepositoryTrait for AttachmentRepository {
    /// Uploads the file as multipart form data (`file` + `transactionType`
    /// fields) and returns the stored path metadata.
    async fn upload(
        &self,
        file: AttachmentFile,
        transaction_type: &str,
    ) -> Result<StoredAttachment> {
        let part = multipart::Part::bytes(file.bytes)
            .file_name(file.file_name.clone())
            .mime_str(&file.mime_type)
            .map_err(RestError::from)?;
        let form = multipart::Form::new()
            .part("file", part)
            .text("transactionType", transaction_type.to_string());

        let url = self.client.attachment_url("/api/upload");
        let stored: StoredAttachment = self
            .client
            .http()
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(RestError::from)?
            .error_for_status()
            .map_err(RestError::from)?
            .json()
            .await
            .map_err(RestError::from)?;

        debug!("Uploaded attachment {} to {}", stored.file_name, stored.file_path);
        Ok(stored)
    }

    async fn delete(&self, file_name: &str) -> Result<()> {
        let url = self
            .client
            .attachment_url(&format!("/api/upload/{}", file_name));
        self.client
            .http()
            .delete(&url)
            .send()
            .await
            .map_err(RestError::from)?
            .error_for_status()
            .map_err(RestError::from)?;
        Ok(())
    }
}
