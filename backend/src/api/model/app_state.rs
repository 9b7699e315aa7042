use crate::auth::{hash_password, HashCost, TokenService};
use crate::model::Config;
use crate::repository::Database;
use shared::error::PortalError;
use std::path::PathBuf;
use std::sync::Arc;

const DUMMY_PASSWORD: &[u8] = b"novaportal-dummy-password";

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Arc<Database>,
    pub tokens: Arc<TokenService>,
    pub hash_cost: HashCost,
    /// Verified against when the login email is unknown, keeps timing uniform.
    pub dummy_hash: Arc<str>,
}

impl AppState {
    pub async fn create(config: Arc<Config>) -> Result<Self, PortalError> {
        let db = Database::open(&PathBuf::from(&config.storage.data_dir)).await?;
        Self::with_database(config, db)
    }

    pub fn with_database(config: Arc<Config>, db: Database) -> Result<Self, PortalError> {
        let hash_cost = config.auth.hash_cost();
        let dummy_hash = hash_password(DUMMY_PASSWORD, hash_cost)?;
        Ok(Self {
            tokens: Arc::new(TokenService::from_config(&config.auth)),
            db: Arc::new(db),
            hash_cost,
            dummy_hash: Arc::from(dummy_hash),
            config,
        })
    }
}
