use crate::model::Config;
use log::{error, info};
use serde::de::DeserializeOwned;
use shared::error::{info_err, PortalError};
use shared::utils::{CONFIG_FILE, CONFIG_PATH, CONSTANTS};
use std::env;
use std::path::PathBuf;

pub fn get_default_config_path() -> String {
    let working_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    working_dir.join(CONFIG_PATH).to_string_lossy().to_string()
}

pub fn get_default_config_file_path() -> String {
    PathBuf::from(get_default_config_path()).join(CONFIG_FILE).to_string_lossy().to_string()
}

/// Reads a yaml file with `${env:VAR}` placeholders resolved.
/// Returns `Ok(None)` if the file does not exist.
pub fn read_config_as<T: DeserializeOwned>(config_file: &str) -> Result<Option<T>, PortalError> {
    let path = PathBuf::from(config_file);
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path)
        .map_err(|err| info_err!("Can't read the config file: {config_file}: {err}"))?;
    let resolved = resolve_env_var(&content);
    serde_saphyr::from_str::<T>(&resolved)
        .map(Some)
        .map_err(|err| info_err!("Can't read the config file: {config_file}: {err}"))
}

pub fn read_config(config_file: &str) -> Result<Config, PortalError> {
    let mut config = if let Some(config) = read_config_as::<Config>(config_file)? {
        config
    } else {
        info!("Config file {config_file} not found, using defaults");
        Config::default()
    };
    config.prepare()?;
    Ok(config)
}

pub fn resolve_env_var(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    CONSTANTS.re_env_var.replace_all(value, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_else(|e| {
            error!("Could not resolve env var '{var_name}': {e}");
            format!("${{env:{var_name}}}")
        })
    }).to_string()
}
