//! Side effect dispatcher.
//!
//! Routes trigger actions to their handlers. Every other action is a no-op.

use std::time::Instant;

use tracing::{Instrument, info_span};

use super::{SideEffectContext, index_patterns, indices};
use crate::action::Action;

/// Start the backend call, if any, that `action` asks for.
///
/// Returns once the work is spawned; results arrive later on `ctx.tx`.
pub async fn handle_side_effects(action: &Action, ctx: &SideEffectContext) {
    let start = Instant::now();
    let span = info_span!(
        "wizard.handle_action",
        action_type = action.name(),
        duration_ms = tracing::field::Empty,
    );

    async move {
        match action {
            Action::FetchExistingIndices => indices::handle_fetch_existing_indices(ctx),
            Action::QueryChanged { query, .. } => {
                indices::handle_fetch_matching_indices(ctx, query.clone())
            }
            Action::GoToTimeFieldStep { pattern } => {
                index_patterns::handle_load_time_field_options(ctx, pattern.clone())
            }
            Action::CreateIndexPattern(params) => {
                index_patterns::handle_create_index_pattern(ctx, params.clone())
            }
            _ => {}
        }

        let duration = start.elapsed().as_millis() as i64;
        tracing::Span::current().record("duration_ms", duration);
    }
    .instrument(span)
    .await;
}
