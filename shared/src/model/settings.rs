use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

pub const SETTING_COMPANY_NAME: &str = "companyName";
pub const SETTING_TAGLINE: &str = "tagline";
pub const SETTING_CONTACT_EMAIL: &str = "contactEmail";
pub const SETTING_CONTACT_PHONE: &str = "contactPhone";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsResponse {
    pub settings: BTreeMap<String, String>,
}

/// Upsert payload. Values may be any JSON scalar and are stored as text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsRequest {
    pub settings: serde_json::Map<String, serde_json::Value>,
}

impl SettingsRequest {
    /// Key/value pairs to store, blank keys skipped, `null` stored as empty text.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.settings
            .iter()
            .filter_map(|(key, value)| {
                let key = key.trim();
                if key.is_empty() {
                    return None;
                }
                let value = match value {
                    serde_json::Value::Null => String::new(),
                    serde_json::Value::String(text) => text.clone(),
                    other => other.to_string(),
                };
                Some((key.to_string(), value))
            })
            .collect()
    }
}
