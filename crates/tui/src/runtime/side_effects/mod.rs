//! Async side effect handlers for wizard actions.
//!
//! Responsibilities:
//! - Start backend calls for trigger actions.
//! - Send the results back over the action channel.
//!
//! Does NOT handle:
//! - State changes (the reducer applies the result actions).
//! - Rendering or terminal management.
//!
//! Invariants:
//! - Every backend call runs in a task spawned on the shared [`TaskTracker`].
//! - Every trigger produces exactly one result action, success or failure.
//! - Result actions carry the query or pattern they were started for, so the
//!   reducer can drop stale responses.

mod dispatcher;
mod index_patterns;
mod indices;
mod types;

pub use dispatcher::handle_side_effects;
pub use tokio_util::task::TaskTracker;
pub use types::{SharedClient, SideEffectContext};
