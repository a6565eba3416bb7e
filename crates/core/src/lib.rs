//! Digibank Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for the digibank demo
//! banking application. It is transport-agnostic and defines traits that
//! are implemented by the `storage-rest` crate against the external
//! record stores.

pub mod accounts;
pub mod attachments;
pub mod constants;
pub mod errors;
pub mod goals;
pub mod investments;
pub mod transactions;

// Re-export common types from the transaction module
pub use transactions::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
