//! Client builder for constructing [`KbnClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Normalizing the base URLs (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`KbnClient`] methods)
//! - Retry logic (handled by [`crate::endpoints::send_request_with_retry`])
//!
//! # Invariants
//! - Both base URLs are required and are always stored without trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP-only setups log a warning

use std::time::Duration;

use kbn_config::{
    AuthStrategy, Config,
    constants::{
        DEFAULT_INDEX_PATTERN_CACHE_SIZE, DEFAULT_MAX_REDIRECTS, DEFAULT_MAX_RETRIES,
        DEFAULT_TIMEOUT_SECS,
    },
};

use crate::client::KbnClient;
use crate::client::cache::IndexPatternCache;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`KbnClient`].
///
/// # Example
///
/// ```rust,ignore
/// use kbn_client::KbnClient;
///
/// let client = KbnClient::builder()
///     .elasticsearch_url("http://localhost:9200".to_string())
///     .kibana_url("http://localhost:5601".to_string())
///     .build()?;
/// ```
pub struct KbnClientBuilder {
    elasticsearch_url: Option<String>,
    kibana_url: Option<String>,
    auth_strategy: AuthStrategy,
    skip_verify: bool,
    timeout: Duration,
    max_retries: usize,
    cache_capacity: u64,
}

impl Default for KbnClientBuilder {
    fn default() -> Self {
        Self {
            elasticsearch_url: None,
            kibana_url: None,
            auth_strategy: AuthStrategy::None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            cache_capacity: DEFAULT_INDEX_PATTERN_CACHE_SIZE,
        }
    }
}

impl KbnClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Elasticsearch base URL, e.g. `http://localhost:9200`.
    pub fn elasticsearch_url(mut self, url: String) -> Self {
        self.elasticsearch_url = Some(url);
        self
    }

    /// Set the Kibana base URL, e.g. `http://localhost:5601`.
    pub fn kibana_url(mut self, url: String) -> Self {
        self.kibana_url = Some(url);
        self
    }

    /// Set the authentication strategy. Defaults to no credentials.
    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = strategy;
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retries for transient failures.
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set how many index patterns the client caches.
    pub fn cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.elasticsearch_url = Some(config.connection.elasticsearch_url.clone());
        self.kibana_url = Some(config.connection.kibana_url.clone());
        self.auth_strategy = config.auth.strategy.clone();
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.max_retries = config.connection.max_retries;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"http://localhost:9200/"` -> `"http://localhost:9200"`
    /// - `"http://example.com:5601//"` -> `"http://example.com:5601"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`KbnClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if either base URL was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<KbnClient> {
        let elasticsearch_url = self
            .elasticsearch_url
            .map(Self::normalize_base_url)
            .ok_or_else(|| ClientError::InvalidUrl("elasticsearch_url is required".to_string()))?;
        let kibana_url = self
            .kibana_url
            .map(Self::normalize_base_url)
            .ok_or_else(|| ClientError::InvalidUrl("kibana_url is required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            let any_https =
                elasticsearch_url.starts_with("https://") || kibana_url.starts_with("https://");
            if any_https {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(KbnClient {
            http,
            elasticsearch_url,
            kibana_url,
            auth_strategy: self.auth_strategy,
            max_retries: self.max_retries,
            index_pattern_cache: IndexPatternCache::new(self.cache_capacity),
        })
    }
}
