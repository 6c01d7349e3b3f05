//! Index pattern side effects: time field lookup and creation.

use std::sync::Arc;

use kbn_client::CreateIndexPatternParams;

use super::SideEffectContext;
use crate::action::Action;

/// Load the time field choices for `pattern`.
pub fn handle_load_time_field_options(ctx: &SideEffectContext, pattern: String) {
    let client = ctx.client.clone();
    let tx = ctx.tx.clone();

    ctx.task_tracker.spawn(async move {
        let result = client.get_time_field_options(&pattern).await;
        let _ = tx
            .send(Action::TimeFieldOptionsLoaded {
                pattern,
                result: result.map_err(Arc::new),
            })
            .await;
    });
}

/// Create the index pattern described by `params`.
pub fn handle_create_index_pattern(ctx: &SideEffectContext, params: CreateIndexPatternParams) {
    let client = ctx.client.clone();
    let tx = ctx.tx.clone();

    ctx.task_tracker.spawn(async move {
        let result = client.create_index_pattern(&params).await;
        match &result {
            Ok(Some(id)) => tracing::info!(id, title = %params.name, "Index pattern created"),
            Ok(None) => tracing::warn!(title = %params.name, "Create returned no id"),
            Err(e) => {
                tracing::warn!(error = %e, title = %params.name, "Failed to create index pattern")
            }
        }
        let _ = tx
            .send(Action::IndexPatternCreated(result.map_err(Arc::new)))
            .await;
    });
}
