//! Wizard behavior settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::DEFAULT_REASONABLE_WAIT_MS;

/// Settings that shape the wizard rather than the connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardConfig {
    /// Whether system indices (names starting with `.`) are shown on startup.
    #[serde(default)]
    pub include_system_indices: bool,
    /// Minimum duration of the initial "fetch all indices" load, in milliseconds.
    #[serde(default = "default_reasonable_wait_ms")]
    pub reasonable_wait_ms: u64,
}

fn default_reasonable_wait_ms() -> u64 {
    DEFAULT_REASONABLE_WAIT_MS
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            include_system_indices: false,
            reasonable_wait_ms: DEFAULT_REASONABLE_WAIT_MS,
        }
    }
}

impl WizardConfig {
    /// The reasonable wait as a `Duration`.
    pub fn reasonable_wait(&self) -> Duration {
        Duration::from_millis(self.reasonable_wait_ms)
    }
}
