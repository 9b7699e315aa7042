use crate::api::api_utils::{auth_error_response, bad_request, error_response, json_response, server_error};
use crate::api::api_utils::{try_payload, ERR_EMAIL_EXISTS, ERR_INVALID_EMAIL, ERR_MISSING_FIELDS, ERR_WEAK_PASSWORD};
use crate::api::model::AppState;
use crate::auth::{guarded, hash_password, TokenService};
use crate::repository::user_repository::{self, NewUser, UserStoreError};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use log::{error, info};
use serde::Deserialize;
use shared::model::{CreateUserRequest, Role, UserResponse, UsersResponse, USERS_CREATE, USERS_READ};
use shared::utils::{is_valid_email, normalize_email, MIN_PASSWORD_LEN};
use std::sync::Arc;
use zeroize::Zeroize;

#[derive(Debug, Default, Deserialize)]
struct UserFilter {
    #[serde(default)]
    role: Option<String>,
}

async fn list_users(State(app_state): State<Arc<AppState>>, Query(filter): Query<UserFilter>) -> Response {
    let role = match filter.role.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
        None => None,
        Some(role) => match role.parse::<Role>() {
            Ok(role) => Some(role),
            Err(err) => return auth_error_response(err),
        },
    };
    json_response(&UsersResponse { users: user_repository::list_users(&app_state.db, role).await })
}

async fn create_user(
    State(app_state): State<Arc<AppState>>,
    payload: Result<axum::Json<CreateUserRequest>, JsonRejection>,
) -> Response {
    let mut request = try_payload!(payload);
    let email = normalize_email(&request.email);
    let name = request.name.trim().to_string();
    let role = request.role.trim().to_string();

    if email.is_empty() || name.is_empty() || role.is_empty() || request.password.is_empty() {
        request.zeroize();
        return bad_request(ERR_MISSING_FIELDS);
    }
    let role = match role.parse::<Role>() {
        Ok(role) => role,
        Err(err) => {
            request.zeroize();
            return auth_error_response(err);
        }
    };
    if !is_valid_email(&email) {
        request.zeroize();
        return bad_request(ERR_INVALID_EMAIL);
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        request.zeroize();
        return bad_request(ERR_WEAK_PASSWORD);
    }

    let mut password = std::mem::take(&mut request.password);
    let cost = app_state.hash_cost;
    let hashed = tokio::task::spawn_blocking(move || {
        let hash = hash_password(password.as_bytes(), cost);
        password.zeroize();
        hash
    }).await;
    let password_hash = match hashed {
        Ok(Ok(hash)) => hash,
        Ok(Err(err)) => {
            error!("{err}");
            return server_error();
        }
        Err(err) => {
            error!("Password hashing task failed: {err}");
            return server_error();
        }
    };

    match user_repository::create_user(&app_state.db, NewUser { email, name, role, password_hash }).await {
        Ok(user) => {
            info!("User {} created with role {}", user.email, user.role);
            json_response(&UserResponse { user })
        }
        Err(UserStoreError::EmailExists) => error_response(StatusCode::CONFLICT, ERR_EMAIL_EXISTS),
        Err(UserStoreError::Storage(err)) => {
            error!("{err}");
            server_error()
        }
    }
}

pub fn user_api_register(tokens: &Arc<TokenService>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/users",
            guarded(get(list_users), tokens, USERS_READ).merge(guarded(post(create_user), tokens, USERS_CREATE)),
        )
}
