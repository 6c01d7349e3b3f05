//! Index query models.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// An index returned by an index query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchedIndex {
    pub name: String,
}

impl MatchedIndex {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Response of the `_search` call used to list indices.
///
/// Both fields are optional: a body with `error` set or without
/// `aggregations` is treated as "no matches".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndicesSearchResponse {
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub aggregations: Option<IndexAggregations>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndexAggregations {
    pub indices: IndexTerms,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndexTerms {
    #[serde(default)]
    pub buckets: Vec<IndexBucket>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndexBucket {
    pub key: String,
}

impl IndicesSearchResponse {
    /// Build the request body: no hits, one terms aggregation on `_index`.
    pub fn request_body(limit: usize) -> Value {
        json!({
            "size": 0,
            "aggs": {
                "indices": {
                    "terms": {
                        "field": "_index",
                        "size": limit,
                    }
                }
            }
        })
    }

    /// Index names from the aggregation, in bucket order.
    pub fn into_matched_indices(self) -> Vec<MatchedIndex> {
        if self.error.is_some() {
            return Vec::new();
        }
        match self.aggregations {
            Some(aggs) => aggs
                .indices
                .buckets
                .into_iter()
                .map(|bucket| MatchedIndex::new(bucket.key))
                .collect(),
            None => Vec::new(),
        }
    }
}
