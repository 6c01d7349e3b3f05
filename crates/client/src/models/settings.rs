//! Kibana advanced settings models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `GET /api/kibana/settings`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsResponse {
    #[serde(default)]
    pub settings: HashMap<String, SettingValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingValue {
    #[serde(rename = "userValue", default)]
    pub user_value: Option<Value>,
}

impl SettingsResponse {
    /// User-set string value of `key`. Empty strings count as unset.
    pub fn user_string(&self, key: &str) -> Option<String> {
        self.settings
            .get(key)
            .and_then(|setting| setting.user_value.as_ref())
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }
}

/// Body of `POST /api/kibana/settings`.
#[derive(Debug, Clone, Serialize)]
pub struct SettingsChange {
    pub changes: HashMap<String, Value>,
}

impl SettingsChange {
    pub fn single(key: &str, value: impl Into<Value>) -> Self {
        let mut changes = HashMap::new();
        changes.insert(key.to_string(), value.into());
        Self { changes }
    }
}
