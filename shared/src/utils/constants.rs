use regex::Regex;
use std::sync::LazyLock;

pub const CONFIG_PATH: &str = "config";
pub const CONFIG_FILE: &str = "config.yml";
pub const DATA_FILE: &str = "portal.json";

pub const API_PREFIX: &str = "/api";
pub const AUTH_LOGIN_PATH: &str = "/api/auth/login";
pub const AUTH_ME_PATH: &str = "/api/auth/me";
pub const HEALTH_PATH: &str = "/api/health";

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MESSAGE_LIST_LIMIT: usize = 200;

pub struct Constants {
    pub re_email: Regex,
    pub re_env_var: Regex,
    pub re_bearer: Regex,
}

pub static CONSTANTS: LazyLock<Constants> = LazyLock::new(||
    Constants {
        re_email: Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap(),
        re_env_var: Regex::new(r"\$\{env:(?P<var>[a-zA-Z_][a-zA-Z0-9_]*)}").unwrap(),
        re_bearer: Regex::new(r"^Bearer\s+(?P<token>.+)$").unwrap(),
    });

pub fn is_valid_email(email: &str) -> bool {
    CONSTANTS.re_email.is_match(email)
}
