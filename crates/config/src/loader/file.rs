//! Config file loading.
//!
//! Responsibilities:
//! - Locate the config file (explicit path or platform default).
//! - Apply its values to a ConfigLoader instance, resolving keyring secrets.
//!
//! Invariants:
//! - A missing file at the default location is not an error.
//! - A missing file at an explicitly configured path is an error.

use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::persistence::{ConfigFile, default_config_path, read_config_file};

/// Apply the config file to the loader.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let (path, explicit) = match loader.config_path() {
        Some(path) => (path.clone(), true),
        None => (
            default_config_path().map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))?,
            false,
        ),
    };

    if !path.exists() {
        if explicit {
            return Err(ConfigError::ConfigFileRead { path });
        }
        tracing::debug!(path = %path.display(), "No config file found, skipping");
        return Ok(());
    }

    let file = read_config_file(&path)?;
    tracing::debug!(path = %path.display(), "Loaded config file");
    apply_config_file(loader, &file)
}

fn apply_config_file(loader: &mut ConfigLoader, file: &ConfigFile) -> Result<(), ConfigError> {
    if let Some(url) = &file.elasticsearch_url {
        loader.set_elasticsearch_url(Some(url.clone()));
    }
    if let Some(url) = &file.kibana_url {
        loader.set_kibana_url(Some(url.clone()));
    }
    if let Some(username) = &file.username {
        loader.set_username(Some(username.clone()));
    }
    if let Some(password) = &file.password {
        loader.set_password(Some(password.resolve()?));
    }
    if let Some(key) = &file.api_key {
        loader.set_api_key(Some(key.resolve()?));
    }
    if let Some(skip) = file.skip_verify {
        loader.set_skip_verify(Some(skip));
    }
    if let Some(secs) = file.timeout_seconds {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(retries) = file.max_retries {
        loader.set_max_retries(Some(retries));
    }
    if let Some(include) = file.include_system_indices {
        loader.set_include_system_indices(Some(include));
    }
    if let Some(wait) = file.reasonable_wait_ms {
        loader.set_reasonable_wait_ms(Some(wait));
    }
    Ok(())
}
