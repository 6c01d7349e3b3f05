//! Index discovery methods for [`KbnClient`].

use tracing::debug;

use crate::client::KbnClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{MatchedIndex, TimeFieldOption};

/// Pattern rejected by cross-cluster search; never sent to the backend.
const BARE_REMOTE_WILDCARD: &str = "*:";

impl KbnClient {
    /// List indices matching `raw_pattern`, sorted by name.
    ///
    /// The pattern is trimmed first. `*:` returns nothing without a request.
    /// A 404, an error body, a missing aggregation, or a failure caused by
    /// `index_not_found_exception` all mean "no matches". Any other error is
    /// returned.
    pub async fn get_indices(&self, raw_pattern: &str, limit: usize) -> Result<Vec<MatchedIndex>> {
        let pattern = raw_pattern.trim();

        if pattern == BARE_REMOTE_WILDCARD {
            debug!("Skipping index query for bare remote wildcard");
            return Ok(Vec::new());
        }

        let result = endpoints::search_indices(
            &self.http,
            &self.elasticsearch_url,
            &self.auth_strategy,
            pattern,
            limit,
            self.max_retries,
        )
        .await;

        let mut indices = match result {
            Ok(indices) => indices,
            Err(e) if e.is_index_not_found() => {
                debug!(
                    pattern,
                    "Index query failed with index_not_found_exception, treating as no matches"
                );
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        indices.sort();
        debug!(pattern, count = indices.len(), "Index query complete");
        Ok(indices)
    }

    /// Time field choices for `pattern`: date fields sorted by name, then
    /// the "no time field" option.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError::MissingIndices`] when nothing matches.
    pub async fn get_time_field_options(&self, pattern: &str) -> Result<Vec<TimeFieldOption>> {
        let caps = endpoints::get_field_caps(
            &self.http,
            &self.elasticsearch_url,
            &self.auth_strategy,
            pattern.trim(),
            self.max_retries,
        )
        .await?;

        Ok(caps.time_field_options())
    }
}
