//! REST record-store implementation for digibank.
//!
//! This crate provides all HTTP-related functionality against the mock
//! JSON record stores and the attachment upload service. It implements
//! the repository traits defined in `digibank-core` and contains:
//! - The shared REST client with its ordered transport fallback chain
//! - Repository implementations for all domain entities
//! - HTTP-specific error types and their conversion to core errors
//!
//! # Architecture
//!
//! This crate is the only place in the application where reqwest
//! dependencies exist. The `core` crate is transport-agnostic and works
//! with traits.
//!
//! ```text
//!          core (domain)
//!                │
//!                ▼
//!      storage-rest (this crate)
//!                │
//!                ▼
//!   record stores + attachment store
//! ```

pub mod client;
pub mod config;
pub mod context;
pub mod errors;

// Repository implementations
pub mod accounts;
pub mod attachments;
pub mod goals;
pub mod investments;
pub mod transactions;

// Re-export client utilities
pub use client::RestClient;
pub use config::RestStoreConfig;
pub use context::RestServiceContext;

// Re-export storage errors and conversion helpers
pub use errors::RestError;

// Re-export from digibank-core for convenience
pub use digibank_core::errors::{Error, Result, StoreError};
