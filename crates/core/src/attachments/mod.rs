//! Attachments module - upload models and store trait.

mod attachments_errors;
mod attachments_model;
mod attachments_traits;

pub use attachments_errors::AttachmentError;
pub use attachments_model::{AttachmentFile, StoredAttachment};
pub use attachments_traits::AttachmentRepositoryTrait;
