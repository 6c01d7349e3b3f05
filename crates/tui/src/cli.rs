//! Command-line arguments for the index pattern wizard.
//!
//! Responsibilities:
//! - Define the CLI with clap derive macros.
//!
//! Does NOT handle:
//! - Merging arguments with file and environment settings (see `runtime::config`).

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables (`KBN_*`)
/// 3. Config file
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "kbn-index-pattern-wizard",
    about = "Create a Kibana index pattern from the terminal",
    version,
    after_help = "Examples:\n  kbn-index-pattern-wizard\n  kbn-index-pattern-wizard --kibana-url http://kibana:5601\n  kbn-index-pattern-wizard --id logs-pattern --include-system-indices\n"
)]
pub struct Cli {
    /// Saved object id for the new index pattern (generated by Kibana when omitted)
    #[arg(long)]
    pub id: Option<String>,

    /// Path to a custom configuration file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Show system indices (names starting with '.') from the start
    #[arg(long)]
    pub include_system_indices: bool,

    /// Elasticsearch base URL
    #[arg(long)]
    pub elasticsearch_url: Option<String>,

    /// Kibana base URL
    #[arg(long)]
    pub kibana_url: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long)]
    pub skip_verify: bool,
}
