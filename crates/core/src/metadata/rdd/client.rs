use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use super::types::RddDocument;
use crate::shared::cache::{Cache, CacheValue};

/// Fetched documents stay fresh for one day before they are refetched.
pub const DEFAULT_FRESHNESS_WINDOW: Duration = Duration::from_secs(60 * 60 * 24);

const REQUEST_TIMEOUT_SECONDS: u64 = 30;

#[derive(Error, Debug)]
pub enum RddFetchError {
    #[error("Could not get response from document url: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Document url returned error status: {0}")]
    Status(StatusCode),

    #[error("Document is not a valid metadata list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Retrieval seam for remote data documents. The production implementation
/// goes over HTTP with a freshness cache; tests plug in stubs.
#[async_trait]
pub trait RddFetcher: Send + Sync {
    async fn fetch_document(&self, url: &str) -> Result<RddDocument, RddFetchError>;
}

pub struct HttpRddClient {
    client: Client,
    cache: Arc<Cache>,
    freshness_window: Duration,
}

impl HttpRddClient {
    pub fn new(cache: Arc<Cache>) -> Result<Self, reqwest::Error> {
        Self::with_freshness_window(cache, DEFAULT_FRESHNESS_WINDOW)
    }

    pub fn with_freshness_window(
        cache: Arc<Cache>,
        freshness_window: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .user_agent("Chainmeta/1.0")
            .build()?;

        Ok(Self { client, cache, freshness_window })
    }

    /// Performs the HTTP request and parses the body into a document.
    ///
    /// # Returns
    /// * `Ok(RddDocument)` - The parsed list of metadata entries
    /// * `Err(RddFetchError)` - If the request fails, the status is not a
    ///   success, or the body is not a JSON list
    async fn request_document(&self, url: &str) -> Result<RddDocument, RddFetchError> {
        let response = self.client.get(url).header("Accept", "application/json").send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RddFetchError::Status(status));
        }

        let body = response.text().await?;
        let document: RddDocument = serde_json::from_str(&body)?;

        Ok(document)
    }
}

#[async_trait]
impl RddFetcher for HttpRddClient {
    async fn fetch_document(&self, url: &str) -> Result<RddDocument, RddFetchError> {
        if let Some(cached_result) = self.cache.get(url).await {
            debug!("Serving metadata document from cache: {}", url);
            return Ok(cached_result.to_rdd_document());
        }

        let document = self.request_document(url).await?;

        // Unfiltered documents are cached; filtering happens per assembly
        self.cache
            .insert_with_expiry(
                url.to_string(),
                CacheValue::RddDocument(document.clone()),
                self.freshness_window,
            )
            .await;

        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::RddEntry;
    use serde_json::json;

    #[tokio::test]
    async fn serves_cached_document_without_a_request() {
        let cache = Arc::new(Cache::new().await);
        let document = vec![RddEntry::new(json!({ "docs": { "hidden": false } }))];

        cache
            .insert_with_expiry(
                "https://unreachable.invalid/rdd.json".to_string(),
                CacheValue::RddDocument(document.clone()),
                Duration::from_secs(60),
            )
            .await;

        let client = HttpRddClient::new(cache).unwrap();

        // The host does not resolve, so a cache miss would error here
        let fetched = client.fetch_document("https://unreachable.invalid/rdd.json").await.unwrap();
        assert_eq!(fetched, document);
    }
}
