use std::collections::BTreeMap;
use shared::model::{SettingsRequest, SettingsResponse};
use shared::utils::API_PREFIX;
use crate::error::Error;
use crate::services::{request_get, request_put};

pub struct SettingsService {
    settings_path: String,
}

impl SettingsService {
    pub fn new() -> Self {
        Self {
            settings_path: format!("{API_PREFIX}/settings"),
        }
    }

    pub async fn get(&self) -> Result<BTreeMap<String, String>, Error> {
        let response: SettingsResponse = request_get(&self.settings_path).await?;
        Ok(response.settings)
    }

    pub async fn save(&self, settings: &BTreeMap<String, String>) -> Result<BTreeMap<String, String>, Error> {
        let request = SettingsRequest {
            settings: settings.iter()
                .map(|(key, value)| (key.clone(), serde_json::Value::String(value.clone())))
                .collect(),
        };
        let response: SettingsResponse = request_put(&self.settings_path, request).await?;
        Ok(response.settings)
    }
}
