use log::warn;
use serde::{Deserialize, Serialize};
use shared::error::{info_err, PortalError};
use shared::utils::parse_duration_secs;
use crate::auth::HashCost;

pub const ENV_JWT_SECRET: &str = "JWT_SECRET";
pub const ENV_JWT_EXPIRES_IN: &str = "JWT_EXPIRES_IN";
pub const ENV_PORT: &str = "PORT";

const DEV_SECRET: &str = "change-me-dev-secret";
const DEFAULT_ISSUER: &str = "novaportal";
const DEFAULT_TOKEN_TTL_MINS: u64 = 7 * 24 * 60;

fn default_host() -> String { "0.0.0.0".to_string() }
pub const fn default_api_port() -> u16 { 3000 }
fn default_web_root() -> String { "./web".to_string() }
fn default_issuer() -> String { DEFAULT_ISSUER.to_string() }
const fn default_token_ttl_mins() -> u64 { DEFAULT_TOKEN_TTL_MINS }
fn default_data_dir() -> String { "./data".to_string() }

pub fn port_override() -> Option<u16> {
    std::env::var(ENV_PORT).ok().and_then(|port| port.trim().parse::<u16>().ok())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_api_port")]
    pub port: u16,
    #[serde(default = "default_web_root")]
    pub web_root: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_api_port(),
            web_root: default_web_root(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_issuer")]
    pub issuer: String,
    #[serde(default)]
    pub secret: String,
    #[serde(default = "default_token_ttl_mins")]
    pub token_ttl_mins: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_mem_cost: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_time_cost: Option<u32>,
    #[serde(skip)]
    pub t_token_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            issuer: default_issuer(),
            secret: String::new(),
            token_ttl_mins: default_token_ttl_mins(),
            hash_mem_cost: None,
            hash_time_cost: None,
            t_token_ttl_secs: 0,
        }
    }
}

impl AuthConfig {
    pub const fn hash_cost(&self) -> HashCost {
        HashCost { mem_cost: self.hash_mem_cost, time_cost: self.hash_time_cost }
    }

    fn prepare<F>(&mut self, env: &F) -> Result<(), PortalError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(secret) = env(ENV_JWT_SECRET) {
            self.secret = secret;
        }
        if self.secret.trim().is_empty() {
            warn!("No token secret configured, using the development secret");
            self.secret = DEV_SECRET.to_string();
        }
        if self.issuer.trim().is_empty() {
            self.issuer = default_issuer();
        }
        self.t_token_ttl_secs = match env(ENV_JWT_EXPIRES_IN) {
            Some(expires_in) => parse_duration_secs(&expires_in)?,
            None => self.token_ttl_mins.saturating_mul(60),
        };
        if self.t_token_ttl_secs == 0 {
            return Err(info_err!("Token lifetime must be greater than zero"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: default_data_dir() }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogLevelConfig {
    #[serde(default)]
    pub log: Option<LogConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthcheckConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<LogConfig>,
}

impl Config {
    pub fn prepare(&mut self) -> Result<(), PortalError> {
        self.prepare_with_env(&|key: &str| std::env::var(key).ok().filter(|value| !value.is_empty()))
    }

    /// Applies environment overrides from `env` and fills computed fields.
    pub fn prepare_with_env<F>(&mut self, env: &F) -> Result<(), PortalError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = env(ENV_PORT) {
            self.api.port = port.trim().parse::<u16>().map_err(|_| info_err!("Invalid port: {port}"))?;
        }
        if self.storage.data_dir.trim().is_empty() {
            self.storage.data_dir = default_data_dir();
        }
        self.auth.prepare(env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let mut config = Config::default();
        config.prepare_with_env(&env_of(&[])).unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.auth.secret, DEV_SECRET);
        assert_eq!(config.auth.t_token_ttl_secs, 7 * 24 * 3600);
        assert_eq!(config.auth.issuer, "novaportal");
    }

    #[test]
    fn env_overrides() {
        let mut config = Config::default();
        config.prepare_with_env(&env_of(&[
            (ENV_JWT_SECRET, "s3cr3t"),
            (ENV_JWT_EXPIRES_IN, "12h"),
            (ENV_PORT, "8080"),
        ])).unwrap();
        assert_eq!(config.api.port, 8080);
        assert_eq!(config.auth.secret, "s3cr3t");
        assert_eq!(config.auth.t_token_ttl_secs, 43_200);
    }

    #[test]
    fn invalid_env_values() {
        let mut config = Config::default();
        assert!(config.prepare_with_env(&env_of(&[(ENV_PORT, "abc")])).is_err());
        let mut config = Config::default();
        assert!(config.prepare_with_env(&env_of(&[(ENV_JWT_EXPIRES_IN, "0")])).is_err());
    }

    #[test]
    fn parse_yaml() {
        let yaml = r"
api:
  port: 9000
auth:
  secret: abc
  token_ttl_mins: 30
storage:
  data_dir: /tmp/portal
log:
  log_level: debug
";
        let mut config: Config = serde_saphyr::from_str(yaml).unwrap();
        config.prepare_with_env(&env_of(&[])).unwrap();
        assert_eq!(config.api.port, 9000);
        assert_eq!(config.api.web_root, "./web");
        assert_eq!(config.auth.t_token_ttl_secs, 1800);
        assert_eq!(config.storage.data_dir, "/tmp/portal");
        assert_eq!(config.log.and_then(|l| l.log_level).as_deref(), Some("debug"));
    }
}
