use log::error;
use serde::{Deserialize, Serialize};
use shared::error::{storage_err, PortalError};
use shared::model::{IdentityDto, MessageDto, ProjectDto, Role, UserDto};
use shared::utils::{current_time_secs, format_timestamp, DATA_FILE};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::sync::{RwLock, RwLockReadGuard};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub password_hash: String,
    pub created_at: String,
}

impl UserRecord {
    pub fn to_dto(&self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
            created_at: self.created_at.clone(),
        }
    }

    pub fn to_identity(&self) -> IdentityDto {
        IdentityDto {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
        }
    }
}

/// All persisted records, stored as one json document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tables {
    #[serde(default)]
    pub last_user_id: u64,
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub last_project_id: u64,
    #[serde(default)]
    pub projects: Vec<ProjectDto>,
    #[serde(default)]
    pub last_message_id: u64,
    #[serde(default)]
    pub messages: Vec<MessageDto>,
    #[serde(default)]
    pub settings: BTreeMap<String, String>,
}

impl Tables {
    pub fn next_user_id(&mut self) -> u64 {
        self.last_user_id += 1;
        self.last_user_id
    }

    pub fn next_project_id(&mut self) -> u64 {
        self.last_project_id += 1;
        self.last_project_id
    }

    pub fn next_message_id(&mut self) -> u64 {
        self.last_message_id += 1;
        self.last_message_id
    }
}

pub fn now_timestamp() -> String {
    format_timestamp(current_time_secs())
}

pub struct Database {
    path: PathBuf,
    tables: RwLock<Tables>,
}

impl Database {
    /// Opens the store in `data_dir`, creating the directory if needed.
    pub async fn open(data_dir: &Path) -> Result<Self, PortalError> {
        tokio::fs::create_dir_all(data_dir).await
            .map_err(|err| storage_err!("Can't create data dir {}: {err}", data_dir.display()))?;
        let path = data_dir.join(DATA_FILE);
        let tables = match tokio::fs::read(&path).await {
            Ok(content) => serde_json::from_slice::<Tables>(&content)
                .map_err(|err| storage_err!("Can't read data file {}: {err}", path.display()))?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Tables::default(),
            Err(err) => return Err(storage_err!("Can't read data file {}: {err}", path.display())),
        };
        Ok(Self { path, tables: RwLock::new(tables) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    /// Applies `change` to a copy of the tables and persists it. The in-memory
    /// state is only replaced once the file was written.
    pub async fn write<F, R>(&self, change: F) -> Result<R, PortalError>
    where
        F: FnOnce(&mut Tables) -> R,
    {
        let mut guard = self.tables.write().await;
        let mut tables = guard.clone();
        let result = change(&mut tables);
        let path = self.path.clone();
        let tables = tokio::task::spawn_blocking(move || persist(&path, &tables).map(|()| tables))
            .await
            .map_err(|err| storage_err!("Persist task failed: {err}"))
            .and_then(|persisted| persisted)
            .inspect_err(|err| error!("{err}"))?;
        *guard = tables;
        Ok(result)
    }
}

fn persist(path: &Path, tables: &Tables) -> Result<(), PortalError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let content = serde_json::to_vec_pretty(tables)
        .map_err(|err| storage_err!("Failed to serialize data: {err}"))?;
    let mut tempfile = NamedTempFile::new_in(dir)
        .map_err(|err| storage_err!("Failed to create temp file in {}: {err}", dir.display()))?;
    tempfile.write_all(&content)
        .and_then(|()| tempfile.flush())
        .map_err(|err| storage_err!("Failed to write temp file: {err}"))?;
    tempfile.persist(path)
        .map_err(|err| storage_err!("Failed to replace {}: {err}", path.display()))?;
    Ok(())
}
