//! Kibana advanced settings endpoints.

use reqwest::Client;

use crate::auth::{AuthStrategy, apply_auth};
use crate::endpoints::{KBN_XSRF_HEADER, send_request_with_retry};
use crate::error::Result;
use crate::models::{SettingsChange, SettingsResponse};

/// Read all advanced settings.
pub async fn get_settings(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    max_retries: usize,
) -> Result<SettingsResponse> {
    let url = format!("{}/api/kibana/settings", base_url);

    let builder = apply_auth(client.get(&url), auth);
    let response =
        send_request_with_retry(builder, max_retries, "/api/kibana/settings", "GET").await?;

    let resp: SettingsResponse = response.json().await?;
    Ok(resp)
}

/// Write one advanced setting.
pub async fn set_setting(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    key: &str,
    value: &str,
    max_retries: usize,
) -> Result<()> {
    let url = format!("{}/api/kibana/settings", base_url);

    let builder = apply_auth(client.post(&url), auth)
        .header(KBN_XSRF_HEADER, "true")
        .json(&SettingsChange::single(key, value));
    send_request_with_retry(builder, max_retries, "/api/kibana/settings", "POST").await?;
    Ok(())
}
