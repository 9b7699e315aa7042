use crate::repository::{now_timestamp, Database, UserRecord};
use shared::error::PortalError;
use shared::model::{Role, UserDto};
use shared::utils::normalize_email;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("email already exists")]
    EmailExists,
    #[error(transparent)]
    Storage(#[from] PortalError),
}

pub struct NewUser {
    pub email: String,
    pub name: String,
    pub role: Role,
    pub password_hash: String,
}

pub async fn find_by_email(db: &Database, email: &str) -> Option<UserRecord> {
    let email = normalize_email(email);
    db.read().await.users.iter().find(|user| user.email == email).cloned()
}

/// Users newest first, optionally restricted to one role.
pub async fn list_users(db: &Database, role: Option<Role>) -> Vec<UserDto> {
    let tables = db.read().await;
    let mut users: Vec<UserDto> = tables.users.iter()
        .filter(|user| role.is_none_or(|r| user.role == r))
        .map(UserRecord::to_dto)
        .collect();
    users.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    users
}

pub async fn create_user(db: &Database, new_user: NewUser) -> Result<UserDto, UserStoreError> {
    let email = normalize_email(&new_user.email);
    let created = db.write(move |tables| {
        if tables.users.iter().any(|user| user.email == email) {
            return None;
        }
        let record = UserRecord {
            id: tables.next_user_id(),
            email,
            name: new_user.name,
            role: new_user.role,
            password_hash: new_user.password_hash,
            created_at: now_timestamp(),
        };
        let dto = record.to_dto();
        tables.users.push(record);
        Some(dto)
    }).await?;
    created.ok_or(UserStoreError::EmailExists)
}

/// Inserts the user or replaces name, role and password of an existing email.
pub async fn upsert_user(db: &Database, new_user: NewUser) -> Result<UserDto, PortalError> {
    let email = normalize_email(&new_user.email);
    db.write(move |tables| {
        if let Some(existing) = tables.users.iter_mut().find(|user| user.email == email) {
            existing.name = new_user.name;
            existing.role = new_user.role;
            existing.password_hash = new_user.password_hash;
            return existing.to_dto();
        }
        let record = UserRecord {
            id: tables.next_user_id(),
            email,
            name: new_user.name,
            role: new_user.role,
            password_hash: new_user.password_hash,
            created_at: now_timestamp(),
        };
        let dto = record.to_dto();
        tables.users.push(record);
        dto
    }).await
}
