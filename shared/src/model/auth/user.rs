use serde::{Deserialize, Serialize};
use zeroize::Zeroize;
use crate::model::Role;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserCredential {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl UserCredential {
    pub fn zeroize(&mut self) {
        self.password.zeroize();
    }
}

/// Public identity of a user, as returned by login and self-lookup and kept
/// in the client session snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityDto {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub user: IdentityDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: IdentityDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: UserDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<UserDto>,
}

/// Role stays a string here, it is parsed by the handler so an unknown value
/// is reported as `invalid_role` instead of a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub password: String,
}

impl CreateUserRequest {
    pub fn zeroize(&mut self) {
        self.password.zeroize();
    }
}
