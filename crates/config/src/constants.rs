//! Centralized constants for the index pattern wizard workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default Elasticsearch URL.
pub const DEFAULT_ELASTICSEARCH_URL: &str = "http://localhost:9200";

/// Default Kibana URL.
pub const DEFAULT_KIBANA_URL: &str = "http://localhost:5601";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of retries for rate-limited or transient failures.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound accepted for `max_retries`.
pub const MAX_MAX_RETRIES: usize = 10;

/// Maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default number of index-pattern saved objects kept in the client cache.
pub const DEFAULT_INDEX_PATTERN_CACHE_SIZE: u64 = 100;

// =============================================================================
// Index Matching
// =============================================================================

/// Maximum number of indices shown in any matching list.
pub const MAX_NUMBER_OF_MATCHING_INDICES: usize = 20;

/// Extra aggregation buckets requested to make room for system indices,
/// which are filtered out after the query returns.
pub const ESTIMATED_NUMBER_OF_SYSTEM_INDICES: usize = 100;

/// Default terms aggregation size for index queries.
pub const MAX_SEARCH_SIZE: usize =
    MAX_NUMBER_OF_MATCHING_INDICES + ESTIMATED_NUMBER_OF_SYSTEM_INDICES;

/// Pattern used to list every local index.
pub const ALL_LOCAL_INDICES_PATTERN: &str = "*";

// =============================================================================
// Wizard / UI Defaults
// =============================================================================

/// Minimum duration of the "fetch all indices" load, in milliseconds.
pub const DEFAULT_REASONABLE_WAIT_MS: u64 = 500;

/// Upper bound accepted for the reasonable wait, in milliseconds.
pub const MAX_REASONABLE_WAIT_MS: u64 = 10_000;

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval for spinner animation in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 250;

/// Advanced setting that holds the default index pattern id.
pub const DEFAULT_INDEX_SETTING: &str = "defaultIndex";
