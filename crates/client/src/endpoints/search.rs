//! Index listing through a terms aggregation on `_index`.

use reqwest::Client;
use tracing::debug;

use crate::auth::{AuthStrategy, apply_auth};
use crate::endpoints::encode_index_pattern;
use crate::endpoints::send_request_with_retry;
use crate::error::{ClientError, Result};
use crate::models::{IndicesSearchResponse, MatchedIndex};

/// Run the index aggregation for `pattern`, returning names in bucket order.
///
/// A 404 means no index matched and yields an empty list.
pub async fn search_indices(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    pattern: &str,
    limit: usize,
    max_retries: usize,
) -> Result<Vec<MatchedIndex>> {
    let url = format!("{}/{}/_search", base_url, encode_index_pattern(pattern));

    let builder =
        apply_auth(client.post(&url), auth).json(&IndicesSearchResponse::request_body(limit));
    let response = match send_request_with_retry(builder, max_retries, "/{index}/_search", "POST")
        .await
    {
        Ok(response) => response,
        Err(ClientError::ApiError { status: 404, .. }) => {
            debug!(pattern, "Index query returned 404, treating as no matches");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    let resp: IndicesSearchResponse = response.json().await?;
    Ok(resp.into_matched_indices())
}
