//! Shared types for side effect handlers.

use std::sync::Arc;
use std::time::Duration;

use kbn_client::KbnClient;
use tokio::sync::mpsc::Sender;

use super::TaskTracker;
use crate::action::Action;

/// Client shared by all spawned tasks.
///
/// Every client method takes `&self`, so no lock is needed.
pub type SharedClient = Arc<KbnClient>;

/// Everything a handler needs besides the action itself.
#[derive(Clone)]
pub struct SideEffectContext {
    pub client: SharedClient,
    pub tx: Sender<Action>,
    pub task_tracker: TaskTracker,
    /// Minimum duration of the initial index load.
    pub reasonable_wait: Duration,
}
