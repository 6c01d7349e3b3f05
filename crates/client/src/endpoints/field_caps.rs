//! Field capabilities endpoint.

use reqwest::Client;

use crate::auth::{AuthStrategy, apply_auth};
use crate::endpoints::encode_index_pattern;
use crate::endpoints::send_request_with_retry;
use crate::error::{ClientError, Result};
use crate::models::FieldCapsResponse;

/// Fetch capabilities of every field in the indices matching `pattern`.
///
/// # Errors
///
/// Returns [`ClientError::MissingIndices`] when the pattern matches nothing,
/// either as a 404 or as an empty response.
pub async fn get_field_caps(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    pattern: &str,
    max_retries: usize,
) -> Result<FieldCapsResponse> {
    let url = format!("{}/{}/_field_caps", base_url, encode_index_pattern(pattern));

    let builder = apply_auth(client.get(&url), auth).query(&[("fields", "*")]);
    let response =
        match send_request_with_retry(builder, max_retries, "/{index}/_field_caps", "GET").await {
            Ok(response) => response,
            Err(ClientError::ApiError { status: 404, .. }) => {
                return Err(ClientError::MissingIndices(pattern.to_string()));
            }
            Err(e) if e.is_index_not_found() => {
                return Err(ClientError::MissingIndices(pattern.to_string()));
            }
            Err(e) => return Err(e),
        };

    let resp: FieldCapsResponse = response.json().await?;
    if resp.is_empty() {
        return Err(ClientError::MissingIndices(pattern.to_string()));
    }
    Ok(resp)
}
