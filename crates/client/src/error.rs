//! Error types for the Elasticsearch and Kibana client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Elasticsearch cause type reported when a concrete index does not exist.
pub const INDEX_NOT_FOUND_EXCEPTION: &str = "index_not_found_exception";

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error response from Elasticsearch or Kibana.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
        /// `error.caused_by.type` from an Elasticsearch error body.
        cause_type: Option<String>,
    },

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// No index matches the pattern an index pattern is being created for.
    #[error("Couldn't locate any indices matching '{0}'")]
    MissingIndices(String),

    /// Not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Credentials were rejected (401 or 403).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Maximum retries exceeded.
    #[error("Maximum retries exceeded ({0} attempts)")]
    MaxRetriesExceeded(usize),
}

impl ClientError {
    /// Check if an HTTP status code is retryable.
    ///
    /// Retryable status codes:
    /// - 429: Too Many Requests
    /// - 502, 503, 504: transient gateway errors
    pub fn is_retryable_status(status: u16) -> bool {
        matches!(status, 429 | 502 | 503 | 504)
    }

    /// Check if this error means "the index does not exist".
    ///
    /// Cross-cluster searches can surface a data node 404 as a 500 from the
    /// coordinating node, so the cause type is checked regardless of status.
    pub fn is_index_not_found(&self) -> bool {
        matches!(
            self,
            Self::ApiError { cause_type: Some(cause), .. } if cause == INDEX_NOT_FOUND_EXCEPTION
        )
    }

    /// Check if this is the recoverable "no indices match" failure.
    pub fn is_missing_indices(&self) -> bool {
        matches!(self, Self::MissingIndices(_))
    }

    /// Check if this error indicates rejected credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}
