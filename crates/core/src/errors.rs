//! Core error types for the digibank application.
//!
//! This module defines transport-agnostic error types. Store-specific
//! errors (from HTTP clients, serialization, etc.) are converted to these
//! types by the storage layer.

use std::num::ParseFloatError;
use thiserror::Error;

use crate::accounts::AccountError;
use crate::attachments::AttachmentError;
use crate::goals::GoalError;
use crate::investments::InvestmentError;
use crate::transactions::TransactionError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the digibank application.
///
/// Record-store specific failures are wrapped in string form to keep this
/// type transport-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Record store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] TransactionError),

    #[error("Account error: {0}")]
    Account(#[from] AccountError),

    #[error("Goal error: {0}")]
    Goal(#[from] GoalError),

    #[error("Investment error: {0}")]
    Investment(#[from] InvestmentError),

    #[error("Attachment error: {0}")]
    Attachment(#[from] AttachmentError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// True when the error means "the referenced record does not exist",
    /// regardless of which layer reported it.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::Store(StoreError::NotFound(_))
                | Error::Transaction(TransactionError::NotFound(_))
                | Error::Account(AccountError::NotFound(_))
                | Error::Goal(GoalError::NotFound(_))
                | Error::Investment(InvestmentError::NotFound(_))
        )
    }
}

/// Transport-agnostic error type for record-store operations.
///
/// This enum uses `String` for all error details, allowing the storage
/// layer to convert client-specific errors (reqwest, etc.) into this
/// format.
#[derive(Error, Debug)]
pub enum StoreError {
    /// None of the configured store endpoints could be reached.
    #[error("Record store unavailable: {0}")]
    Unavailable(String),

    /// The store rejected the request (non-2xx other than 404).
    #[error("Record store request failed: {0}")]
    RequestFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// The store answered with a body that could not be decoded.
    #[error("Invalid record store response: {0}")]
    InvalidResponse(String),

    /// Internal/unexpected store error.
    #[error("Internal record store error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse number: {0}")]
    NumberParse(#[from] ParseFloatError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] chrono::ParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
