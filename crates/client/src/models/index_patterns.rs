//! Index-pattern saved object models.

use serde::{Deserialize, Serialize};

use super::field_caps::TimeFieldOption;

/// Saved object type of an index pattern.
pub const INDEX_PATTERN_TYPE: &str = "index-pattern";

/// Attributes stored on an index-pattern saved object.
///
/// `time_field_name` is always serialized; `None` is written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexPatternAttributes {
    pub title: String,
    #[serde(rename = "timeFieldName", default)]
    pub time_field_name: Option<String>,
}

/// An index-pattern saved object as returned by Kibana.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexPattern {
    pub id: String,
    #[serde(rename = "type", default = "default_type")]
    pub object_type: String,
    #[serde(default)]
    pub version: Option<String>,
    pub attributes: IndexPatternAttributes,
}

fn default_type() -> String {
    INDEX_PATTERN_TYPE.to_string()
}

/// Body of a saved object create request.
#[derive(Debug, Clone, Serialize)]
pub struct SavedObjectRequest<'a> {
    pub attributes: &'a IndexPatternAttributes,
}

/// Parameters for creating an index pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIndexPatternParams {
    /// Explicit id (edit mode). Kibana generates one when `None`.
    pub id: Option<String>,
    /// Pattern title, e.g. `logs-*`.
    pub name: String,
    pub time_field: TimeFieldOption,
}

impl CreateIndexPatternParams {
    pub fn attributes(&self) -> IndexPatternAttributes {
        IndexPatternAttributes {
            title: self.name.clone(),
            time_field_name: self.time_field.field_name().map(str::to_string),
        }
    }
}
