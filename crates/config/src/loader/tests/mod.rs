//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Every test clears the `KBN_*` variables it does not set itself.

use std::sync::Mutex;

pub mod file_tests;
pub mod validation_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// All variables read by `apply_env`.
pub const KBN_VARS: [&str; 10] = [
    "KBN_ELASTICSEARCH_URL",
    "KBN_KIBANA_URL",
    "KBN_USERNAME",
    "KBN_PASSWORD",
    "KBN_API_KEY",
    "KBN_SKIP_VERIFY",
    "KBN_TIMEOUT",
    "KBN_MAX_RETRIES",
    "KBN_INCLUDE_SYSTEM_INDICES",
    "KBN_REASONABLE_WAIT_MS",
];

/// Runs `f` with the given variables set and every other `KBN_*` variable unset.
pub fn with_kbn_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
    let all: Vec<(&str, Option<&str>)> = KBN_VARS
        .iter()
        .map(|key| {
            let value = vars.iter().find(|(k, _)| k == key).map(|(_, v)| *v);
            (*key, value)
        })
        .collect();
    temp_env::with_vars(all, f);
}
