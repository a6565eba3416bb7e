//! Storage-specific error types for REST operations.
//!
//! This module provides error types that wrap reqwest-specific errors and
//! convert them to the transport-agnostic error types defined in
//! `digibank_core`.

use reqwest::StatusCode;
use thiserror::Error;

use digibank_core::errors::{Error, StoreError};

/// Storage-specific errors that wrap HTTP client types.
///
/// These errors are internal to the storage layer and are converted to
/// `digibank_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum RestError {
    /// The endpoint could not be reached (connect error, timeout).
    /// Eligible for transport failover.
    #[error("Store endpoint unreachable: {0}")]
    Transport(String),

    /// The store answered with a non-success status.
    #[error("Store answered {status} for {url}")]
    Status { status: StatusCode, url: String },

    /// The response body could not be decoded.
    #[error("Failed to decode store response: {0}")]
    Decode(String),

    /// Every configured transport was exhausted without an answer.
    #[error("All store endpoints failed: {0}")]
    Exhausted(String),
}

impl RestError {
    /// Transport-class failures are retried on the next endpoint in the
    /// chain; anything the store actually answered is not.
    pub fn is_transport(&self) -> bool {
        matches!(self, RestError::Transport(_))
    }
}

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return RestError::Decode(err.to_string());
        }
        if let Some(status) = err.status() {
            return RestError::Status {
                status,
                url: err
                    .url()
                    .map(|u| u.to_string())
                    .unwrap_or_else(|| "<unknown>".to_string()),
            };
        }
        // Connect errors, timeouts, and request-build failures all read
        // as "could not reach the store".
        RestError::Transport(err.to_string())
    }
}

impl From<RestError> for Error {
    fn from(err: RestError) -> Self {
        match err {
            RestError::Transport(e) => Error::Store(StoreError::Unavailable(e)),
            RestError::Exhausted(e) => Error::Store(StoreError::Unavailable(e)),
            RestError::Status { status, url } if status == StatusCode::NOT_FOUND => {
                Error::Store(StoreError::NotFound(url))
            }
            RestError::Status { status, url } => {
                Error::Store(StoreError::RequestFailed(format!("{} for {}", status, url)))
            }
            RestError::Decode(e) => Error::Store(StoreError::InvalidResponse(e)),
        }
    }
}
