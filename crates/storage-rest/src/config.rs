//! Configuration for the REST record stores.

use std::env;

/// Default record-store mount used by the local mock backend.
pub const DEFAULT_RECORD_STORE_URL: &str = "http://localhost:3000";

/// Default attachment-store mount used by the local upload server.
pub const DEFAULT_ATTACHMENT_STORE_URL: &str = "http://localhost:3001";

/// Environment variable naming the primary record-store base URL.
pub const RECORD_STORE_URL_ENV: &str = "DIGIBANK_API_URL";

/// Environment variable naming the legacy record-store base URL, tried
/// when the primary endpoint is unreachable.
pub const LEGACY_RECORD_STORE_URL_ENV: &str = "DIGIBANK_LEGACY_API_URL";

/// Environment variable naming the attachment-store base URL.
pub const ATTACHMENT_STORE_URL_ENV: &str = "DIGIBANK_UPLOAD_URL";

/// Connection settings for the record stores and the attachment store.
#[derive(Debug, Clone)]
pub struct RestStoreConfig {
    /// Base URL of the primary record store (accounts, transactions,
    /// goals, investments).
    pub record_store_url: String,
    /// Base URL of the legacy record store mount, if one is still
    /// deployed. Requests fall back to it when the primary endpoint
    /// cannot be reached.
    pub legacy_record_store_url: Option<String>,
    /// Base URL of the attachment upload service.
    pub attachment_store_url: String,
}

impl RestStoreConfig {
    pub fn new(record_store_url: impl Into<String>, attachment_store_url: impl Into<String>) -> Self {
        Self {
            record_store_url: normalize_base_url(record_store_url.into()),
            legacy_record_store_url: None,
            attachment_store_url: normalize_base_url(attachment_store_url.into()),
        }
    }

    pub fn with_legacy_record_store_url(mut self, url: impl Into<String>) -> Self {
        self.legacy_record_store_url = Some(normalize_base_url(url.into()));
        self
    }

    /// Builds the configuration from environment variables, falling back
    /// to the local mock-backend defaults.
    pub fn from_env() -> Self {
        let mut config = Self::new(
            env::var(RECORD_STORE_URL_ENV)
                .unwrap_or_else(|_| DEFAULT_RECORD_STORE_URL.to_string()),
            env::var(ATTACHMENT_STORE_URL_ENV)
                .unwrap_or_else(|_| DEFAULT_ATTACHMENT_STORE_URL.to_string()),
        );
        if let Ok(legacy) = env::var(LEGACY_RECORD_STORE_URL_ENV) {
            if !legacy.trim().is_empty() {
                config = config.with_legacy_record_store_url(legacy);
            }
        }
        config
    }

    /// The ordered list of record-store base URLs to try.
    pub fn record_store_transports(&self) -> Vec<String> {
        let mut transports = vec![self.record_store_url.clone()];
        if let Some(legacy) = &self.legacy_record_store_url {
            transports.push(legacy.clone());
        }
        transports
    }
}

impl Default for RestStoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RECORD_STORE_URL, DEFAULT_ATTACHMENT_STORE_URL)
    }
}

fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
