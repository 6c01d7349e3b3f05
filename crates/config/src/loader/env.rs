//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `KBN_*` environment variables.
//! - Apply their values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid values return ConfigError::InvalidValue naming the variable.

use secrecy::SecretString;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: FromStr>(key: &str, expected: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(key)
        .map(|raw| {
            raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: key.to_string(),
                message: expected.to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
///
/// Only variables that are set overwrite loader values.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("KBN_ELASTICSEARCH_URL") {
        loader.set_elasticsearch_url(Some(url));
    }
    if let Some(url) = env_var_or_none("KBN_KIBANA_URL") {
        loader.set_kibana_url(Some(url));
    }
    if let Some(username) = env_var_or_none("KBN_USERNAME") {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none("KBN_PASSWORD") {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(key) = env_var_or_none("KBN_API_KEY") {
        loader.set_api_key(Some(SecretString::new(key.into())));
    }
    if let Some(skip) = parse_env::<bool>("KBN_SKIP_VERIFY", "must be true or false")? {
        loader.set_skip_verify(Some(skip));
    }
    if let Some(secs) = parse_env::<u64>("KBN_TIMEOUT", "must be a number of seconds")? {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(retries) =
        parse_env::<usize>("KBN_MAX_RETRIES", "must be a non-negative integer")?
    {
        loader.set_max_retries(Some(retries));
    }
    if let Some(include) =
        parse_env::<bool>("KBN_INCLUDE_SYSTEM_INDICES", "must be true or false")?
    {
        loader.set_include_system_indices(Some(include));
    }
    if let Some(wait) =
        parse_env::<u64>("KBN_REASONABLE_WAIT_MS", "must be a number of milliseconds")?
    {
        loader.set_reasonable_wait_ms(Some(wait));
    }
    Ok(())
}
