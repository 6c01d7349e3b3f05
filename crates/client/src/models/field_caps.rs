//! Field capabilities and time field choices.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Wire value of the "I don't want to use the Time Filter" choice.
pub const NO_TIME_FIELD: &str = "-1";

/// Field types usable as a time field.
const TIME_FIELD_TYPES: &[&str] = &["date", "date_nanos"];

/// Response of `GET {pattern}/_field_caps`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldCapsResponse {
    #[serde(default)]
    pub indices: Vec<String>,
    /// Field name to (field type to capability).
    #[serde(default)]
    pub fields: BTreeMap<String, BTreeMap<String, FieldCapability>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldCapability {
    #[serde(rename = "type")]
    pub field_type: String,
}

impl FieldCapsResponse {
    /// True when the response does not describe any index.
    ///
    /// Newer Elasticsearch versions list the resolved indices; older ones
    /// only return fields, so an empty field map counts as no match too.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty() && self.fields.is_empty()
    }

    /// Names of date-typed fields, sorted.
    ///
    /// Metadata fields (leading underscore) are never time fields.
    pub fn time_field_names(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|(name, _)| !name.starts_with('_'))
            .filter(|(_, caps)| {
                caps.keys()
                    .any(|field_type| TIME_FIELD_TYPES.contains(&field_type.as_str()))
            })
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Options for the time field step: date fields, then "no time field".
    pub fn time_field_options(&self) -> Vec<TimeFieldOption> {
        let mut options: Vec<TimeFieldOption> = self
            .time_field_names()
            .into_iter()
            .map(TimeFieldOption::Field)
            .collect();
        options.push(TimeFieldOption::NoTimeField);
        options
    }
}

/// A choice in the time field step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimeFieldOption {
    /// Use this date field for time filtering.
    Field(String),
    /// Create the pattern without a time field.
    NoTimeField,
}

impl TimeFieldOption {
    /// Parse a wire value; `"-1"` means no time field.
    pub fn from_value(value: &str) -> Self {
        if value == NO_TIME_FIELD {
            Self::NoTimeField
        } else {
            Self::Field(value.to_string())
        }
    }

    /// Wire value of this option.
    pub fn as_value(&self) -> &str {
        match self {
            Self::Field(name) => name,
            Self::NoTimeField => NO_TIME_FIELD,
        }
    }

    /// Time field name to persist. `None` is stored as `null`.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::Field(name) => Some(name),
            Self::NoTimeField => None,
        }
    }
}

impl From<String> for TimeFieldOption {
    fn from(value: String) -> Self {
        if value == NO_TIME_FIELD {
            Self::NoTimeField
        } else {
            Self::Field(value)
        }
    }
}

impl From<TimeFieldOption> for String {
    fn from(option: TimeFieldOption) -> Self {
        option.as_value().to_string()
    }
}

impl fmt::Display for TimeFieldOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::NoTimeField => f.write_str("I don't want to use the Time Filter"),
        }
    }
}
