//! Whitelist rule for index lists shown to the user.
//!
//! Invariants:
//! - Output never exceeds [`MAX_NUMBER_OF_MATCHING_INDICES`] entries.
//! - Input order is preserved.

use kbn_config::constants::MAX_NUMBER_OF_MATCHING_INDICES;

use crate::models::MatchedIndex;

/// True when `name` is a system index (leading period).
pub fn is_system_index(name: &str) -> bool {
    name.starts_with('.')
}

/// Drop system indices unless `include_system_indices`, then keep the first 20.
pub fn whitelist_indices(
    indices: &[MatchedIndex],
    include_system_indices: bool,
) -> Vec<MatchedIndex> {
    indices
        .iter()
        .filter(|index| include_system_indices || !is_system_index(&index.name))
        .take(MAX_NUMBER_OF_MATCHING_INDICES)
        .cloned()
        .collect()
}
