//! On-disk configuration file.
//!
//! Responsibilities:
//! - Define the JSON shape of the config file (`ConfigFile`).
//! - Resolve the default config file location.
//! - Read and parse the file, reporting read and parse failures separately.
//!
//! Does NOT handle:
//! - Merging file values with environment variables (see `loader`).
//! - Writing the file; the wizard never persists connection settings.
//!
//! Invariants:
//! - Every field is optional; missing fields fall through to env vars or defaults.
//! - Unknown fields are rejected so typos surface as parse errors.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::SecureValue;

mod path;

pub use path::default_config_path;

/// Contents of `config.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Elasticsearch base URL.
    pub elasticsearch_url: Option<String>,
    /// Kibana base URL.
    pub kibana_url: Option<String>,
    /// Username for basic authentication.
    pub username: Option<String>,
    /// Password for basic authentication.
    pub password: Option<SecureValue>,
    /// Encoded Elasticsearch API key.
    pub api_key: Option<SecureValue>,
    /// Skip TLS verification.
    pub skip_verify: Option<bool>,
    /// Request timeout in seconds.
    pub timeout_seconds: Option<u64>,
    /// Maximum retries for transient failures.
    pub max_retries: Option<usize>,
    /// Show system indices on startup.
    pub include_system_indices: Option<bool>,
    /// Minimum duration of the initial index load, in milliseconds.
    pub reasonable_wait_ms: Option<u64>,
}

/// Errors reading the config file.
#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reads and parses the config file from disk.
pub fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str::<ConfigFile>(&content).map_err(|e| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
