//! In-memory cache of index-pattern saved objects.
//!
//! Responsibilities:
//! - Hold index patterns fetched by id so repeated reads skip Kibana.
//! - Drop an entry when the pattern is (re)created.
//!
//! Does NOT handle:
//! - Persistence across runs.
//! - Caching of index queries or field capabilities, which must stay live.
//!
//! Invariants:
//! - Entries are keyed by saved object id.
//! - Creating an index pattern always invalidates its id.

use moka::future::Cache as MokaCache;
use moka::policy::EvictionPolicy;
use tracing::trace;

use crate::models::IndexPattern;

/// Bounded LRU cache of index patterns by id.
#[derive(Clone, Debug)]
pub struct IndexPatternCache {
    inner: MokaCache<String, IndexPattern>,
}

impl IndexPatternCache {
    /// Create a cache holding at most `capacity` patterns.
    pub fn new(capacity: u64) -> Self {
        let inner = MokaCache::builder()
            .max_capacity(capacity)
            .eviction_policy(EvictionPolicy::lru())
            .build();
        Self { inner }
    }

    pub async fn get(&self, id: &str) -> Option<IndexPattern> {
        let hit = self.inner.get(id).await;
        trace!(id, hit = hit.is_some(), "Index pattern cache lookup");
        hit
    }

    pub async fn insert(&self, pattern: IndexPattern) {
        self.inner.insert(pattern.id.clone(), pattern).await;
    }

    /// Drop the cached copy of `id`, if any.
    pub async fn invalidate(&self, id: &str) {
        self.inner.invalidate(id).await;
        trace!(id, "Invalidated index pattern cache entry");
    }

    pub fn clear(&self) {
        self.inner.invalidate_all();
    }
}
