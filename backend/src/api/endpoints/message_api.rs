use crate::api::api_utils::{bad_request, json_response, ERR_INVALID_EMAIL, ERR_MISSING_FIELDS};
use crate::api::api_utils::{try_payload, try_storage};
use crate::api::model::AppState;
use crate::auth::{guarded, TokenService};
use crate::repository::message_repository;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use log::debug;
use shared::model::{ContactRequest, ContactResponse, MessagesResponse, MESSAGES_READ};
use shared::utils::{is_valid_email, MESSAGE_LIST_LIMIT};
use std::sync::Arc;

async fn list_messages(State(app_state): State<Arc<AppState>>) -> Response {
    let messages = message_repository::list_messages(&app_state.db, MESSAGE_LIST_LIMIT).await;
    json_response(&MessagesResponse { messages })
}

async fn contact(
    State(app_state): State<Arc<AppState>>,
    payload: Result<axum::Json<ContactRequest>, JsonRejection>,
) -> Response {
    let mut request = try_payload!(payload);
    request.name = request.name.trim().to_string();
    request.email = request.email.trim().to_string();
    request.company = request.company.trim().to_string();
    request.message = request.message.trim().to_string();

    if request.name.is_empty() || request.email.is_empty() || request.message.is_empty() {
        return bad_request(ERR_MISSING_FIELDS);
    }
    if !is_valid_email(&request.email) {
        return bad_request(ERR_INVALID_EMAIL);
    }
    let id = try_storage!(message_repository::insert_message(&app_state.db, request).await);
    debug!("Contact message {id} stored");
    json_response(&ContactResponse { ok: true, id })
}

pub fn message_api_register(tokens: &Arc<TokenService>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/messages", guarded(get(list_messages), tokens, MESSAGES_READ))
        .route("/api/contact", post(contact))
}

#[cfg(test)]
mod tests {
    use crate::api::main_api::test_app::{body_json, get, post_json, TestApp};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn contact_then_admin_reads() {
        let app = TestApp::seeded().await;
        let response = app.call(post_json("/api/contact", None, &json!({"name": "Ana", "email": "bad", "message": "Hola"}))).await;
        assert_eq!(body_json(response).await, json!({"error": "invalid_email"}));
        let response = app.call(post_json("/api/contact", None, &json!({"name": "Ana", "email": "ana@empresa.com"}))).await;
        assert_eq!(body_json(response).await, json!({"error": "missing_fields"}));

        let response = app.call(post_json("/api/contact", None, &json!({
            "name": " Ana ", "email": "ana@empresa.com", "company": "Empresa", "message": "Hola"
        }))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"ok": true, "id": 1}));

        let client = app.login("cliente@demo.local", "Cliente!123").await;
        assert_eq!(app.call(get("/api/messages", Some(&client))).await.status(), StatusCode::FORBIDDEN);

        let admin2 = app.login("admin2@demo.local", "Admin2!123").await;
        let body = body_json(app.call(get("/api/messages", Some(&admin2))).await).await;
        assert_eq!(body["messages"][0]["name"], "Ana");
        assert_eq!(body["messages"][0]["company"], "Empresa");
    }
}
