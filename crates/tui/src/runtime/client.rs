//! Backend client creation.
//!
//! Responsibilities:
//! - Build a [`KbnClient`] from the loaded configuration.
//!
//! Does NOT handle:
//! - Configuration loading (see `runtime::config`).

use anyhow::{Context, Result};
use kbn_client::KbnClient;
use kbn_config::Config;

/// Create the client used by every side effect.
///
/// # Errors
///
/// Returns an error if a URL is missing or the HTTP client cannot be built.
pub fn create_client(config: &Config) -> Result<KbnClient> {
    let client = KbnClient::builder()
        .from_config(config)
        .build()
        .context("failed to create Elasticsearch/Kibana client")?;

    tracing::info!(
        elasticsearch_url = client.elasticsearch_url(),
        kibana_url = client.kibana_url(),
        "Client created"
    );
    Ok(client)
}
