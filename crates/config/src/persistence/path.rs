//! Path helpers for configuration file locations.

use std::path::PathBuf;

use anyhow::Context;

/// Returns the default path to the configuration file.
///
/// - Linux: `~/.config/kbn-index-pattern-wizard/config.json`
/// - macOS: `~/Library/Application Support/kbn-index-pattern-wizard/config.json`
/// - Windows: `%AppData%\kbn-index-pattern-wizard\config\config.json`
pub fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", "kbn-index-pattern-wizard")
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join("config.json"))
}
