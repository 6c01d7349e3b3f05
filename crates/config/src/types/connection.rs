//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (URLs, TLS verification, timeouts, retries).
//! - Define the main `Config` structure combining connection, auth, and wizard settings.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Duration fields are serialized as seconds (integers).
//! - `Config::default()` targets a local, unsecured stack (ports 9200 and 5601).

use crate::constants::{
    DEFAULT_ELASTICSEARCH_URL, DEFAULT_KIBANA_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS,
};
use crate::types::auth::AuthConfig;
use crate::types::wizard::WizardConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the Elasticsearch and Kibana endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of Elasticsearch (e.g., http://localhost:9200)
    pub elasticsearch_url: String,
    /// Base URL of Kibana (e.g., http://localhost:5601)
    pub kibana_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Maximum number of retries for rate-limited or transient failures
    pub max_retries: usize,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            elasticsearch_url: DEFAULT_ELASTICSEARCH_URL.to_string(),
            kibana_url: DEFAULT_KIBANA_URL.to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
    /// Wizard behavior
    #[serde(default)]
    pub wizard: WizardConfig,
}
