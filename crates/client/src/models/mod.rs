//! Data models for Elasticsearch and Kibana API responses.
//!
//! Submodules:
//! - `indices`: index query request and aggregation response.
//! - `field_caps`: `_field_caps` response and time field options.
//! - `index_patterns`: index-pattern saved objects.
//! - `settings`: Kibana advanced settings.

mod field_caps;
mod index_patterns;
mod indices;
mod settings;

pub use field_caps::{FieldCapability, FieldCapsResponse, NO_TIME_FIELD, TimeFieldOption};
pub use index_patterns::{
    CreateIndexPatternParams, INDEX_PATTERN_TYPE, IndexPattern, IndexPatternAttributes,
    SavedObjectRequest,
};
pub use indices::{IndexAggregations, IndexBucket, IndexTerms, IndicesSearchResponse, MatchedIndex};
pub use settings::{SettingValue, SettingsChange, SettingsResponse};
