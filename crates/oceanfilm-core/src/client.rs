//! HTTP transport for the metadata API
//!
//! Thin wrapper over reqwest performing exactly one attempt per request.
//! The query contract is a single GET with no retries and no backoff;
//! the only recovery path is a user-initiated re-query.

use std::time::Duration;

use crate::error::{QueryError, Result};
use crate::url::DEFAULT_BASE_URL;

/// Configuration for the metadata client
///
/// The access token is never hardcoded: construct explicitly or read it
/// from the environment with [`OmdbConfig::from_env`].
#[derive(Debug, Clone)]
pub struct OmdbConfig {
    /// Access token passed as the `apikey` query parameter
    pub api_key: String,

    /// API root; overridable to point at a stub server in tests
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl OmdbConfig {
    /// Creates a configuration for the public API root
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Replaces the API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Reads configuration from the environment
    ///
    /// `OMDB_API_KEY` is required; `OMDB_BASE_URL` optionally overrides
    /// the API root.
    ///
    /// # Errors
    /// Returns `MissingApiKey` if `OMDB_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OMDB_API_KEY").map_err(|_| QueryError::MissingApiKey)?;
        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var("OMDB_BASE_URL") {
            config.base_url = base_url;
        }
        Ok(config)
    }
}

/// HTTP client wrapper for the metadata API
pub struct OmdbClient {
    client: reqwest::Client,
    config: OmdbConfig,
}

impl OmdbClient {
    /// Creates a new client from the given configuration
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn new(config: OmdbConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(QueryError::Http)?;

        Ok(Self { client, config })
    }

    /// Creates a new client from the environment
    pub fn from_env() -> Result<Self> {
        Self::new(OmdbConfig::from_env()?)
    }

    pub(crate) fn config(&self) -> &OmdbConfig {
        &self.config
    }

    /// Performs a single GET and returns the response body
    ///
    /// Exactly one attempt: transport failures surface immediately as
    /// `Http`, and non-success statuses as `Upstream`. Robustness on
    /// top of this primitive is the caller's concern.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueryError::Upstream(format!("HTTP {status}")));
        }

        response.text().await.map_err(QueryError::Http)
    }
}
