//! Retry helper for HTTP requests with exponential backoff.
//!
//! Requests that fail with a retryable status (429, 502, 503, 504) are sent
//! again after an exponential backoff. Any other non-success status is turned
//! into [`ClientError::ApiError`] with the message and cause type pulled out
//! of the Elasticsearch or Kibana error body.

use reqwest::{RequestBuilder, Response};
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Maximum number of retry attempts when the caller passes zero.
const DEFAULT_MAX_RETRIES: usize = 3;

/// Sends an HTTP request, retrying transient failures.
///
/// Backoff is 2^attempt seconds (1s, 2s, 4s, ...). `endpoint` and `method`
/// are only used for logging.
///
/// # Errors
///
/// - [`ClientError::MaxRetriesExceeded`] when retries are exhausted.
/// - [`ClientError::Unauthorized`] for 401 and 403.
/// - [`ClientError::ApiError`] for any other non-success status.
/// - [`ClientError::HttpError`] for transport failures.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
    endpoint: &str,
    method: &str,
) -> Result<Response> {
    let max_retries = if max_retries == 0 {
        DEFAULT_MAX_RETRIES
    } else {
        max_retries
    };

    for attempt in 0..=max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                if attempt == 0 {
                    debug!(
                        endpoint,
                        method,
                        "Request builder cannot be cloned, single attempt only"
                    );
                    let response = builder.send().await?;
                    return check_status(response).await;
                }
                debug!(endpoint, method, "Cannot clone request builder for retry");
                return Err(ClientError::MaxRetriesExceeded(attempt));
            }
        };

        let response = attempt_builder.send().await?;
        let status = response.status().as_u16();

        if ClientError::is_retryable_status(status) {
            if attempt < max_retries {
                let backoff_secs = 2u64.pow(attempt as u32);
                debug!(
                    endpoint,
                    method,
                    status,
                    attempt = attempt + 1,
                    max_retries = max_retries + 1,
                    backoff_secs,
                    "Transient failure, retrying with exponential backoff"
                );
                tokio::time::sleep(tokio::time::Duration::from_secs(backoff_secs)).await;
                continue;
            }
            debug!(endpoint, method, attempts = attempt + 1, "Max retries exhausted");
            return Err(ClientError::MaxRetriesExceeded(max_retries + 1));
        }

        if attempt > 0 && response.status().is_success() {
            debug!(endpoint, method, attempt = attempt + 1, "Request succeeded after retry");
        }
        return check_status(response).await;
    }

    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}

/// Pass success responses through; convert the rest into `Unauthorized` or `ApiError`.
async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());
    let (message, cause_type) = parse_error_body(&body);

    if matches!(status, 401 | 403) {
        return Err(ClientError::Unauthorized(message));
    }

    Err(ClientError::ApiError {
        status,
        url,
        message,
        cause_type,
    })
}

/// Extract a readable message and the cause type from an error body.
///
/// Elasticsearch: `{"error": {"reason", "caused_by": {"type"}}}`. The
/// top-level `error.type` is not a cause and is ignored.
/// Kibana: `{"statusCode", "error", "message"}`.
/// Anything else is returned verbatim.
pub(crate) fn parse_error_body(body: &str) -> (String, Option<String>) {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return (body.to_string(), None);
    };

    if let Some(error) = value.get("error").filter(|e| e.is_object()) {
        let cause_type = error
            .pointer("/caused_by/type")
            .and_then(Value::as_str)
            .map(str::to_string);
        let message = error
            .get("reason")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| body.to_string());
        return (message, cause_type);
    }

    match value.get("message").and_then(Value::as_str) {
        Some(message) => (message.to_string(), None),
        None => (body.to_string(), None),
    }
}
