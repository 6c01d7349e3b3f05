//! Index listing side effects.
//!
//! Responsibilities:
//! - Load every index on startup and on "check for new data".
//! - Load the exact and partial matches for the current query.

use std::sync::Arc;

use kbn_client::MatchedIndex;
use kbn_config::constants::{ALL_LOCAL_INDICES_PATTERN, MAX_SEARCH_SIZE};

use super::SideEffectContext;
use crate::action::{Action, MatchingIndices};
use crate::app::validate_pattern;

/// Load all local indices.
///
/// The result is held back until `reasonable_wait` has passed so the loading
/// screen does not flash.
pub fn handle_fetch_existing_indices(ctx: &SideEffectContext) {
    let client = ctx.client.clone();
    let tx = ctx.tx.clone();
    let wait = ctx.reasonable_wait;

    ctx.task_tracker.spawn(async move {
        let (result, ()) = tokio::join!(
            client.get_indices(ALL_LOCAL_INDICES_PATTERN, MAX_SEARCH_SIZE),
            tokio::time::sleep(wait),
        );
        if let Err(e) = &result {
            tracing::warn!(error = %e, "Failed to load existing indices");
        }
        let _ = tx
            .send(Action::ExistingIndicesLoaded(result.map_err(Arc::new)))
            .await;
    });
}

/// Load matches for `query`.
///
/// Invalid queries are not sent. A query ending in `*` is only queried as
/// typed; otherwise `query` and `query*` are fetched concurrently.
pub fn handle_fetch_matching_indices(ctx: &SideEffectContext, query: String) {
    if validate_pattern(&query).is_err() {
        return;
    }

    let client = ctx.client.clone();
    let tx = ctx.tx.clone();

    ctx.task_tracker.spawn(async move {
        let result = if query.ends_with('*') {
            client
                .get_indices(&query, MAX_SEARCH_SIZE)
                .await
                .map(|exact| MatchingIndices {
                    exact,
                    partial: Vec::<MatchedIndex>::new(),
                })
        } else {
            let partial_query = format!("{query}*");
            let (exact, partial) = tokio::join!(
                client.get_indices(&query, MAX_SEARCH_SIZE),
                client.get_indices(&partial_query, MAX_SEARCH_SIZE),
            );
            exact.and_then(|exact| partial.map(|partial| MatchingIndices { exact, partial }))
        };

        let _ = tx
            .send(Action::MatchingIndicesLoaded {
                query,
                result: result.map_err(Arc::new),
            })
            .await;
    });
}
