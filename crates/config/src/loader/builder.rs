//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from the config file, environment variables, and direct builder methods.
//! - Build and validate the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Config file parsing (delegated to file.rs and `persistence`).
//!
//! Invariants / Assumptions:
//! - Sources are applied in call order; later calls overwrite earlier values.
//!   The intended order is `from_file()`, then `from_env()`, then `with_*` overrides.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{
    DEFAULT_ELASTICSEARCH_URL, DEFAULT_KIBANA_URL, DEFAULT_MAX_RETRIES,
    DEFAULT_REASONABLE_WAIT_MS, DEFAULT_TIMEOUT_SECS, MAX_MAX_RETRIES, MAX_REASONABLE_WAIT_MS,
    MAX_TIMEOUT_SECS,
};
use crate::types::{AuthConfig, AuthStrategy, Config, ConnectionConfig, WizardConfig};

/// Configuration loader that builds config from files, environment variables, and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    elasticsearch_url: Option<String>,
    kibana_url: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    api_key: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    max_retries: Option<usize>,
    include_system_indices: Option<bool>,
    reasonable_wait_ms: Option<u64>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    /// Missing `.env` files are silently ignored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DotenvParse` or `ConfigError::DotenvIo` when the file
    /// exists but cannot be used. Error messages never include raw .env contents.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Override the config file path.
    ///
    /// An explicit path must exist; the default path is optional.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from the JSON config file.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Read configuration from environment variables.
    ///
    /// Environment variables take precedence over config file settings.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the Elasticsearch URL.
    pub fn with_elasticsearch_url(mut self, url: String) -> Self {
        self.elasticsearch_url = Some(url);
        self
    }

    /// Set the Kibana URL.
    pub fn with_kibana_url(mut self, url: String) -> Self {
        self.kibana_url = Some(url);
        self
    }

    /// Set the username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Set the password.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: String) -> Self {
        self.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum number of retries.
    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Set whether system indices are shown on startup.
    pub fn with_include_system_indices(mut self, include: bool) -> Self {
        self.include_system_indices = Some(include);
        self
    }

    /// Set the minimum duration of the initial index load.
    pub fn with_reasonable_wait_ms(mut self, wait_ms: u64) -> Self {
        self.reasonable_wait_ms = Some(wait_ms);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let elasticsearch_url = validate_and_normalize_url(
            "elasticsearch_url",
            self.elasticsearch_url.as_deref().unwrap_or(DEFAULT_ELASTICSEARCH_URL),
        )?;
        let kibana_url = validate_and_normalize_url(
            "kibana_url",
            self.kibana_url.as_deref().unwrap_or(DEFAULT_KIBANA_URL),
        )?;

        // API key takes precedence over basic auth
        let strategy = match (self.api_key, self.username, self.password) {
            (Some(key), _, _) => AuthStrategy::ApiKey { key },
            (None, Some(username), Some(password)) => AuthStrategy::Basic { username, password },
            (None, Some(username), None) => {
                return Err(ConfigError::IncompleteAuth(format!(
                    "username '{username}' is set but no password was provided"
                )));
            }
            (None, None, Some(_)) => {
                return Err(ConfigError::IncompleteAuth(
                    "password is set but no username was provided".to_string(),
                ));
            }
            (None, None, None) => AuthStrategy::None,
        };

        let connection = ConnectionConfig {
            elasticsearch_url,
            kibana_url,
            skip_verify: self.skip_verify.unwrap_or(false),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
        };
        Self::validate_connection(&connection)?;

        let wizard = WizardConfig {
            include_system_indices: self.include_system_indices.unwrap_or(false),
            reasonable_wait_ms: self
                .reasonable_wait_ms
                .unwrap_or(DEFAULT_REASONABLE_WAIT_MS),
        };
        if wizard.reasonable_wait_ms > MAX_REASONABLE_WAIT_MS {
            return Err(ConfigError::InvalidReasonableWait {
                message: format!(
                    "must be at most {} ms (got {})",
                    MAX_REASONABLE_WAIT_MS, wizard.reasonable_wait_ms
                ),
            });
        }

        Ok(Config {
            connection,
            auth: AuthConfig { strategy },
            wizard,
        })
    }

    fn validate_connection(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        if connection.max_retries > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!(
                    "must be between 0 and {} (got {})",
                    MAX_MAX_RETRIES, connection.max_retries
                ),
            });
        }

        Ok(())
    }

    // Internal accessors for use by other loader modules

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_elasticsearch_url(&mut self, url: Option<String>) {
        self.elasticsearch_url = url;
    }

    pub(crate) fn set_kibana_url(&mut self, url: Option<String>) {
        self.kibana_url = url;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    pub(crate) fn set_api_key(&mut self, key: Option<SecretString>) {
        self.api_key = key;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_max_retries(&mut self, retries: Option<usize>) {
        self.max_retries = retries;
    }

    pub(crate) fn set_include_system_indices(&mut self, include: Option<bool>) {
        self.include_system_indices = include;
    }

    pub(crate) fn set_reasonable_wait_ms(&mut self, wait_ms: Option<u64>) {
        self.reasonable_wait_ms = wait_ms;
    }
}

/// Validates and normalizes a base URL string.
///
/// Validation rules:
/// - Trim surrounding whitespace; blank counts as missing
/// - Parse as an absolute URL with an http or https scheme and a host
/// - Normalize by stripping trailing slashes
fn validate_and_normalize_url(var: &str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingUrl {
            var: var.to_string(),
        });
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: var.to_string(),
        message: format!("must be an absolute http(s) URL with a host: {e}"),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "host is required".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
