//! Configuration management for the index pattern wizard.
//!
//! This crate provides types and loaders for the Elasticsearch and Kibana
//! connection settings and the wizard defaults, read from a JSON config file,
//! environment variables, and explicit overrides.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use persistence::{ConfigFile, ConfigFileError};
pub use types::{
    AuthConfig, AuthStrategy, Config, ConnectionConfig, SecureValue, WizardConfig,
};
