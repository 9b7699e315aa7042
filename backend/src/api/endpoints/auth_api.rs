use crate::api::api_utils::{auth_error_response, bad_request, json_response, server_error, ERR_MISSING_FIELDS};
use crate::api::api_utils::try_payload;
use crate::api::model::AppState;
use crate::auth::{guarded, verify_password, TokenService};
use crate::repository::user_repository;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Extension, Router};
use log::{debug, error, warn};
use shared::error::AuthError;
use shared::model::{Claims, MeResponse, TokenResponse, UserCredential, SELF_LOOKUP};
use shared::utils::{normalize_email, AUTH_LOGIN_PATH, AUTH_ME_PATH};
use std::sync::Arc;
use zeroize::Zeroize;

async fn login(
    State(app_state): State<Arc<AppState>>,
    payload: Result<axum::Json<UserCredential>, JsonRejection>,
) -> Response {
    let mut req = try_payload!(payload);
    let email = normalize_email(&req.email);
    if email.is_empty() || req.password.is_empty() {
        req.zeroize();
        return bad_request(ERR_MISSING_FIELDS);
    }

    let user = user_repository::find_by_email(&app_state.db, &email).await;
    // unknown emails are verified against the dummy hash
    let hash = user.as_ref().map_or_else(|| app_state.dummy_hash.to_string(), |u| u.password_hash.clone());
    let mut password = std::mem::take(&mut req.password);
    let verified = tokio::task::spawn_blocking(move || {
        let ok = verify_password(&hash, password.as_bytes());
        password.zeroize();
        ok
    }).await.unwrap_or_else(|err| {
        error!("Password verification task failed: {err}");
        false
    });

    match user {
        Some(user) if verified => {
            let identity = user.to_identity();
            match app_state.tokens.issue(&identity) {
                Ok(token) => {
                    debug!("Login {} as {}", identity.email, identity.role);
                    json_response(&TokenResponse { token, user: identity })
                }
                Err(err) => {
                    error!("{err}");
                    server_error()
                }
            }
        }
        _ => {
            warn!("Rejected login for {email}");
            auth_error_response(AuthError::InvalidCredentials)
        }
    }
}

async fn me(Extension(claims): Extension<Claims>) -> Response {
    match claims.identity() {
        Some(user) => json_response(&MeResponse { user }),
        None => auth_error_response(AuthError::Unauthorized),
    }
}

pub fn auth_api_register(tokens: &Arc<TokenService>) -> Router<Arc<AppState>> {
    Router::new()
        .route(AUTH_LOGIN_PATH, post(login))
        .route(AUTH_ME_PATH, guarded(get(me), tokens, SELF_LOOKUP))
}

#[cfg(test)]
mod tests {
    use crate::api::main_api::test_app::{body_json, get, post_json, TestApp};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn login_returns_token_and_identity() {
        let app = TestApp::seeded().await;
        let response = app.call(post_json("/api/auth/login", None, &json!({"email": " Admin1@Demo.Local ", "password": "Admin1!123"}))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["user"]["role"], "admin1");
        assert_eq!(body["user"]["email"], "admin1@demo.local");
        assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_look_the_same() {
        let app = TestApp::seeded().await;
        for (email, password) in [("admin1@demo.local", "wrong-pass"), ("nobody@demo.local", "Admin1!123")] {
            let response = app.call(post_json("/api/auth/login", None, &json!({"email": email, "password": password}))).await;
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(body_json(response).await, json!({"error": "invalid_credentials"}));
        }
    }

    #[tokio::test]
    async fn empty_fields() {
        let app = TestApp::seeded().await;
        let response = app.call(post_json("/api/auth/login", None, &json!({"email": "admin1@demo.local"}))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "missing_fields"}));
    }

    #[tokio::test]
    async fn me_echoes_token_claims() {
        let app = TestApp::seeded().await;
        let token = app.login("cliente@demo.local", "Cliente!123").await;
        let response = app.call(get("/api/auth/me", Some(&token))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["user"]["name"], "Cliente Demo");
        assert_eq!(body["user"]["role"], "cliente");

        let response = app.call(get("/api/auth/me", None)).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await, json!({"error": "missing_token"}));

        let response = app.call(get("/api/auth/me", Some("garbage"))).await;
        assert_eq!(body_json(response).await, json!({"error": "invalid_token"}));
    }
}
