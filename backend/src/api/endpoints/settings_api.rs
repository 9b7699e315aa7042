use crate::api::api_utils::json_response;
use crate::api::api_utils::{try_payload, try_storage};
use crate::api::model::AppState;
use crate::auth::{guarded, TokenService};
use crate::repository::settings_repository;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use shared::model::{SettingsRequest, SettingsResponse, SETTINGS_WRITE};
use std::sync::Arc;

async fn get_settings(State(app_state): State<Arc<AppState>>) -> Response {
    json_response(&SettingsResponse { settings: settings_repository::all_settings(&app_state.db).await })
}

async fn save_settings(
    State(app_state): State<Arc<AppState>>,
    payload: Result<axum::Json<SettingsRequest>, JsonRejection>,
) -> Response {
    let request = try_payload!(payload);
    let settings = try_storage!(settings_repository::upsert_settings(&app_state.db, request.entries()).await);
    json_response(&SettingsResponse { settings })
}

pub fn settings_api_register(tokens: &Arc<TokenService>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/settings", get(get_settings).merge(guarded(axum::routing::put(save_settings), tokens, SETTINGS_WRITE)))
}

#[cfg(test)]
mod tests {
    use crate::api::main_api::test_app::{body_json, get, put_json, TestApp};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn public_read_admin1_write() {
        let app = TestApp::seeded().await;
        let body = body_json(app.call(get("/api/settings", None)).await).await;
        assert_eq!(body["settings"]["companyName"], "Consultoría Nova");

        let admin2 = app.login("admin2@demo.local", "Admin2!123").await;
        let response = app.call(put_json("/api/settings", Some(&admin2), &json!({"settings": {"tagline": "x"}}))).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let admin1 = app.login("admin1@demo.local", "Admin1!123").await;
        let response = app.call(put_json("/api/settings", Some(&admin1), &json!({"settings": {"tagline": "Nueva", " ": "skip", "year": 2024}}))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["settings"]["tagline"], "Nueva");
        assert_eq!(body["settings"]["year"], "2024");
        assert_eq!(body["settings"]["contactPhone"], "+1 (000) 000-0000");

        let response = app.call(put_json("/api/settings", Some(&admin1), &json!({"settings": "nope"}))).await;
        assert_eq!(body_json(response).await, json!({"error": "invalid_payload"}));
    }
}
