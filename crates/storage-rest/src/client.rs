//! Shared REST client for the record stores.
//!
//! Every request walks an ordered chain of base URLs (the primary store
//! first, then the legacy mount when one is configured) and returns the
//! first answer. Only transport-class failures move on to the next
//! endpoint; a store that answered - even with an error status - is
//! authoritative.

use log::warn;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::RestStoreConfig;
use crate::errors::RestError;

pub struct RestClient {
    http: Client,
    transports: Vec<String>,
    attachment_base: String,
}

impl RestClient {
    pub fn new(config: &RestStoreConfig) -> Self {
        Self {
            http: Client::new(),
            transports: config.record_store_transports(),
            attachment_base: config.attachment_store_url.clone(),
        }
    }

    /// The underlying HTTP client, for requests (multipart uploads) that
    /// do not go through the record-store transport chain.
    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Resolves a path against the attachment store.
    pub(crate) fn attachment_url(&self, path: &str) -> String {
        format!("{}{}", self.attachment_base, path)
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RestError> {
        self.with_transports(path, |url| async move {
            let response = self
                .http
                .get(&url)
                .query(query)
                .send()
                .await?
                .error_for_status()?;
            Ok(response.json::<T>().await?)
        })
        .await
    }

    pub async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RestError> {
        self.with_transports(path, |url| async move {
            let response = self
                .http
                .post(&url)
                .json(body)
                .send()
                .await?
                .error_for_status()?;
            Ok(response.json::<T>().await?)
        })
        .await
    }

    pub async fn put_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RestError> {
        self.with_transports(path, |url| async move {
            let response = self
                .http
                .put(&url)
                .json(body)
                .send()
                .await?
                .error_for_status()?;
            Ok(response.json::<T>().await?)
        })
        .await
    }

    pub async fn patch_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RestError> {
        self.with_transports(path, |url| async move {
            let response = self
                .http
                .patch(&url)
                .json(body)
                .send()
                .await?
                .error_for_status()?;
            Ok(response.json::<T>().await?)
        })
        .await
    }

    pub async fn delete(&self, path: &str) -> Result<(), RestError> {
        self.with_transports(path, |url| async move {
            self.http.delete(&url).send().await?.error_for_status()?;
            Ok(())
        })
        .await
    }

    /// Runs `request` against each configured base URL in order until one
    /// of them answers.
    async fn with_transports<T, F, Fut>(&self, path: &str, request: F) -> Result<T, RestError>
    where
        F: Fn(String) -> Fut,
        Fut: std::future::Future<Output = Result<T, RestError>>,
    {
        let mut last_transport_error: Option<RestError> = None;
        for base in &self.transports {
            match request(format!("{}{}", base, path)).await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transport() => {
                    warn!("Record store at {} unreachable ({}); trying next", base, e);
                    last_transport_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }
        Err(RestError::Exhausted(
            last_transport_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no store endpoints configured".to_string()),
        ))
    }
}
