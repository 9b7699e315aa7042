use log::error;
use shared::model::{CreateUserRequest, Role, UserDto, UserResponse, UsersResponse};
use shared::utils::API_PREFIX;
use crate::error::Error;
use crate::services::{request_get, request_post};

pub struct UserService {
    user_path: String,
}

impl UserService {
    pub fn new() -> Self {
        Self {
            user_path: format!("{API_PREFIX}/users"),
        }
    }

    pub async fn list(&self, role: Option<Role>) -> Result<Vec<UserDto>, Error> {
        let path = match role {
            Some(role) => format!("{}?role={role}", self.user_path),
            None => self.user_path.clone(),
        };
        let response: UsersResponse = request_get(&path).await?;
        Ok(response.users)
    }

    pub async fn create_user(&self, mut user: CreateUserRequest) -> Result<UserDto, Error> {
        let result = request_post::<_, UserResponse>(&self.user_path, &user).await;
        user.zeroize();
        match result {
            Ok(response) => Ok(response.user),
            Err(err) => {
                error!("{err}");
                Err(err)
            }
        }
    }
}
