//! Configuration loading for the wizard.
//!
//! Responsibilities:
//! - Merge the config file, `KBN_*` environment variables and CLI flags.
//!
//! Does NOT handle:
//! - Creating the client (see `runtime::client`).
//!
//! Invariants:
//! - Precedence: CLI args > env vars > config file > defaults.
//! - `load_dotenv()` runs before environment variables are read.

use anyhow::{Context, Result};
use kbn_config::{Config, ConfigLoader};

use crate::cli::Cli;

/// Load configuration with CLI overrides applied last.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new().load_dotenv()?;

    if let Some(path) = &cli.config_path
        && !path.as_os_str().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }

    let mut loader = loader.from_file()?.from_env()?;

    if let Some(url) = &cli.elasticsearch_url {
        loader = loader.with_elasticsearch_url(url.clone());
    }
    if let Some(url) = &cli.kibana_url {
        loader = loader.with_kibana_url(url.clone());
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }
    if cli.include_system_indices {
        loader = loader.with_include_system_indices(true);
    }

    loader.build().context("invalid configuration")
}
