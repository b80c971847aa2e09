//! HTTP fetcher for the catalog and category endpoints
//!
//! A thin wrapper around `reqwest` that performs exactly one GET per call.
//! There are no retries and no rate limiting: a failed fetch is surfaced
//! to the caller, who owns any retry policy.

use std::time::Duration;

use tracing::debug;

use crate::error::{AljazeeraError, Result};
use crate::url::{FEED_BASE_URL, SITE_BASE_URL};

const USER_AGENT: &str = concat!("aljazeera-core/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: 15)
    pub timeout_secs: u64,
    /// Base URL of the upstream video feed
    pub feed_base_url: String,
    /// Base URL of the site the category listing is scraped from
    pub site_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            feed_base_url: FEED_BASE_URL.to_string(),
            site_base_url: SITE_BASE_URL.to_string(),
        }
    }
}

/// HTTP client performing single, sequential GET requests
pub struct HttpClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(AljazeeraError::Http)?;

        Ok(Self { client, config })
    }

    /// Fetch the raw response body from a URL
    ///
    /// # Errors
    /// `Http` on connection failure, timeout, or a non-2xx status.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url, "fetching");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(AljazeeraError::Http)?
            .error_for_status()
            .map_err(AljazeeraError::Http)?;

        let body = response.bytes().await.map_err(AljazeeraError::Http)?;
        debug!(url, bytes = body.len(), "fetched");
        Ok(body.to_vec())
    }

    /// The active configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
