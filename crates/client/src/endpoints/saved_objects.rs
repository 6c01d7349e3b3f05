//! Kibana saved objects endpoints for index patterns.

use reqwest::Client;
use serde_json::Value;

use crate::auth::{AuthStrategy, apply_auth};
use crate::endpoints::{KBN_XSRF_HEADER, encode_path_segment, send_request_with_retry};
use crate::error::{ClientError, Result};
use crate::models::{INDEX_PATTERN_TYPE, IndexPattern, IndexPatternAttributes, SavedObjectRequest};

/// Create an index-pattern saved object.
///
/// With `id` set the object is created under that id; otherwise Kibana
/// generates one. Returns the id from the response, or `None` when Kibana
/// did not return one.
pub async fn create_index_pattern_object(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    id: Option<&str>,
    attributes: &IndexPatternAttributes,
    max_retries: usize,
) -> Result<Option<String>> {
    let url = match id {
        Some(id) => format!(
            "{}/api/saved_objects/{}/{}",
            base_url,
            INDEX_PATTERN_TYPE,
            encode_path_segment(id)
        ),
        None => format!("{}/api/saved_objects/{}", base_url, INDEX_PATTERN_TYPE),
    };

    let builder = apply_auth(client.post(&url), auth)
        .header(KBN_XSRF_HEADER, "true")
        .json(&SavedObjectRequest { attributes });
    let response = send_request_with_retry(
        builder,
        max_retries,
        "/api/saved_objects/index-pattern",
        "POST",
    )
    .await?;

    let body: Value = response.json().await?;
    Ok(body
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(str::to_string))
}

/// Fetch an index-pattern saved object by id.
pub async fn get_index_pattern_object(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    id: &str,
    max_retries: usize,
) -> Result<IndexPattern> {
    let url = format!(
        "{}/api/saved_objects/{}/{}",
        base_url,
        INDEX_PATTERN_TYPE,
        encode_path_segment(id)
    );

    let builder = apply_auth(client.get(&url), auth);
    let response = match send_request_with_retry(
        builder,
        max_retries,
        "/api/saved_objects/index-pattern/{id}",
        "GET",
    )
    .await
    {
        Ok(response) => response,
        Err(ClientError::ApiError { status: 404, .. }) => {
            return Err(ClientError::NotFound(format!("index-pattern/{}", id)));
        }
        Err(e) => return Err(e),
    };

    let pattern: IndexPattern = response.json().await?;
    Ok(pattern)
}
