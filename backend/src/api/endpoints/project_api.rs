use crate::api::api_utils::{bad_request, error_response, json_response, ERR_INVALID_ID, ERR_MISSING_FIELDS, ERR_NOT_FOUND};
use crate::api::api_utils::{try_payload, try_storage};
use crate::api::model::AppState;
use crate::auth::{guarded, TokenService};
use crate::repository::project_repository;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{delete, get, post, put};
use axum::{Extension, Router};
use log::info;
use serde::Deserialize;
use serde_json::json;
use shared::model::{Claims, ProjectRequest, ProjectResponse, ProjectsResponse, PROJECTS_LIST_ALL, PROJECTS_LIST_MINE, PROJECT_DELETE, PROJECT_WRITE};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
struct ProjectSearch {
    #[serde(default)]
    q: String,
}

fn parse_id(id: &str) -> Option<u64> {
    id.trim().parse::<u64>().ok()
}

async fn list_published(State(app_state): State<Arc<AppState>>, Query(search): Query<ProjectSearch>) -> Response {
    let projects = project_repository::list_published(&app_state.db, &search.q).await;
    json_response(&ProjectsResponse { projects })
}

async fn list_all(State(app_state): State<Arc<AppState>>) -> Response {
    let projects = project_repository::list_all(&app_state.db).await;
    json_response(&ProjectsResponse { projects })
}

/// Ownership filter: only projects assigned to the caller's email.
async fn list_mine(State(app_state): State<Arc<AppState>>, Extension(claims): Extension<Claims>) -> Response {
    let projects = project_repository::list_for_client(&app_state.db, &claims.email).await;
    json_response(&ProjectsResponse { projects })
}

async fn create_project(
    State(app_state): State<Arc<AppState>>,
    payload: Result<axum::Json<ProjectRequest>, JsonRejection>,
) -> Response {
    let request = try_payload!(payload).normalize();
    if !request.is_complete() {
        return bad_request(ERR_MISSING_FIELDS);
    }
    let project = try_storage!(project_repository::create_project(&app_state.db, request).await);
    info!("Project {} created", project.id);
    json_response(&ProjectResponse { project })
}

async fn update_project(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<axum::Json<ProjectRequest>, JsonRejection>,
) -> Response {
    let Some(id) = parse_id(&id) else {
        return bad_request(ERR_INVALID_ID);
    };
    if !project_repository::exists(&app_state.db, id).await {
        return error_response(StatusCode::NOT_FOUND, ERR_NOT_FOUND);
    }
    let request = try_payload!(payload).normalize();
    if !request.is_complete() {
        return bad_request(ERR_MISSING_FIELDS);
    }
    match try_storage!(project_repository::update_project(&app_state.db, id, request).await) {
        Some(project) => json_response(&ProjectResponse { project }),
        None => error_response(StatusCode::NOT_FOUND, ERR_NOT_FOUND),
    }
}

async fn delete_project(State(app_state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    let Some(id) = parse_id(&id) else {
        return bad_request(ERR_INVALID_ID);
    };
    if try_storage!(project_repository::delete_project(&app_state.db, id).await) {
        info!("Project {id} deleted");
    }
    json_response(&json!({"ok": true}))
}

pub fn project_api_register(tokens: &Arc<TokenService>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/projects", get(list_published).merge(guarded(post(create_project), tokens, PROJECT_WRITE)))
        .route("/api/projects/all", guarded(get(list_all), tokens, PROJECTS_LIST_ALL))
        .route("/api/projects/mine", guarded(get(list_mine), tokens, PROJECTS_LIST_MINE))
        .route(
            "/api/projects/{id}",
            guarded(put(update_project), tokens, PROJECT_WRITE).merge(guarded(delete(delete_project), tokens, PROJECT_DELETE)),
        )
}

#[cfg(test)]
mod tests {
    use crate::api::main_api::test_app::{body_json, delete, get, post_json, put_json, TestApp};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn public_list_and_search() {
        let app = TestApp::seeded().await;
        let body = body_json(app.call(get("/api/projects", None)).await).await;
        assert_eq!(body["projects"].as_array().map(Vec::len), Some(2));
        let body = body_json(app.call(get("/api/projects?q=TABLERO", None)).await).await;
        assert_eq!(body["projects"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["projects"][0]["industry"], "Retail");
    }

    #[tokio::test]
    async fn admin_token_on_client_route_is_forbidden() {
        let app = TestApp::seeded().await;
        let admin1 = app.login("admin1@demo.local", "Admin1!123").await;

        let response = app.call(get("/api/projects/all", Some(&admin1))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.call(get("/api/projects/mine", Some(&admin1))).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(response).await, json!({"error": "forbidden"}));
    }

    #[tokio::test]
    async fn client_sees_own_projects() {
        let app = TestApp::seeded().await;
        let client = app.login("cliente@demo.local", "Cliente!123").await;
        let body = body_json(app.call(get("/api/projects/mine", Some(&client))).await).await;
        assert_eq!(body["projects"].as_array().map(Vec::len), Some(2));
        let response = app.call(get("/api/projects/all", Some(&client))).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn create_update_delete_rules() {
        let app = TestApp::seeded().await;
        let admin1 = app.login("admin1@demo.local", "Admin1!123").await;
        let admin2 = app.login("admin2@demo.local", "Admin2!123").await;

        let response = app.call(post_json("/api/projects", Some(&admin2), &json!({"title": "Nuevo"}))).await;
        assert_eq!(body_json(response).await, json!({"error": "missing_fields"}));

        let response = app.call(post_json("/api/projects", Some(&admin2), &json!({
            "title": "Nuevo", "summary": "Resumen", "clientEmail": " Cliente@Demo.Local ", "published": false
        }))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let created = body_json(response).await;
        let id = created["project"]["id"].as_u64().unwrap();
        assert_eq!(created["project"]["clientEmail"], "cliente@demo.local");
        assert_eq!(created["project"]["published"], false);

        let path = format!("/api/projects/{id}");
        let response = app.call(put_json(&path, Some(&admin2), &json!({"title": "Editado", "summary": "Resumen"}))).await;
        let updated = body_json(response).await;
        assert_eq!(updated["project"]["title"], "Editado");
        assert_eq!(updated["project"]["published"], true);
        assert_eq!(updated["project"]["clientEmail"], serde_json::Value::Null);

        let response = app.call(put_json("/api/projects/999", Some(&admin2), &json!({"title": "x", "summary": "y"}))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let response = app.call(put_json("/api/projects/abc", Some(&admin2), &json!({}))).await;
        assert_eq!(body_json(response).await, json!({"error": "invalid_id"}));

        let response = app.call(delete(&path, Some(&admin2))).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let response = app.call(delete(&path, None)).await;
        assert_eq!(body_json(response).await, json!({"error": "missing_token"}));
        let response = app.call(delete(&path, Some(&admin1))).await;
        assert_eq!(body_json(response).await, json!({"ok": true}));
        let body = body_json(app.call(get("/api/projects/all", Some(&admin1))).await).await;
        assert_eq!(body["projects"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn loose_project_payloads_are_accepted() {
        let app = TestApp::seeded().await;
        let admin1 = app.login("admin1@demo.local", "Admin1!123").await;

        let response = app.call(post_json("/api/projects", Some(&admin1), &json!({
            "title": "T", "summary": "S", "published": null
        }))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["project"]["published"], true);

        let response = app.call(post_json("/api/projects", Some(&admin1), &json!({
            "title": "T", "summary": "S", "results": "not-a-list"
        }))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["project"]["results"], json!([]));
    }
}
