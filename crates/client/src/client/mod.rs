//! Main client and API methods.
//!
//! This module provides [`KbnClient`], which talks to Elasticsearch for index
//! discovery and to Kibana for saved objects and advanced settings.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - [`cache`]: Index-pattern saved object cache
//! - `indices`: Index query and time field methods
//! - `index_patterns`: Index-pattern creation and settings methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Filtering of results for display (see [`crate::indices`])
//!
//! # Invariants
//! - Base URLs never end with a slash
//! - The same credentials are attached to Elasticsearch and Kibana requests

pub mod builder;
pub mod cache;

mod index_patterns;
mod indices;

use kbn_config::AuthStrategy;

use crate::client::builder::KbnClientBuilder;
use crate::client::cache::IndexPatternCache;

/// Elasticsearch and Kibana client used by the wizard.
///
/// Cloning is cheap and clones share the HTTP pool and the cache.
#[derive(Clone, Debug)]
pub struct KbnClient {
    pub(crate) http: reqwest::Client,
    pub(crate) elasticsearch_url: String,
    pub(crate) kibana_url: String,
    pub(crate) auth_strategy: AuthStrategy,
    pub(crate) max_retries: usize,
    pub(crate) index_pattern_cache: IndexPatternCache,
}

impl KbnClient {
    /// Create a new client builder.
    pub fn builder() -> KbnClientBuilder {
        KbnClientBuilder::new()
    }

    /// Elasticsearch base URL, without trailing slash.
    pub fn elasticsearch_url(&self) -> &str {
        &self.elasticsearch_url
    }

    /// Kibana base URL, without trailing slash.
    pub fn kibana_url(&self) -> &str {
        &self.kibana_url
    }

    pub fn max_retries(&self) -> usize {
        self.max_retries
    }

    /// The index-pattern cache shared by clones of this client.
    pub fn index_pattern_cache(&self) -> &IndexPatternCache {
        &self.index_pattern_cache
    }
}
