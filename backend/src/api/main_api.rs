use crate::api::api_utils::json_response;
use crate::api::endpoints::auth_api::auth_api_register;
use crate::api::endpoints::message_api::message_api_register;
use crate::api::endpoints::project_api::project_api_register;
use crate::api::endpoints::settings_api::settings_api_register;
use crate::api::endpoints::user_api::user_api_register;
use crate::api::endpoints::web_index::web_root_service;
use crate::api::model::AppState;
use crate::model::Config;
use axum::extract::State;
use axum::response::Response;
use axum::Router;
use log::{info, warn};
use serde_json::json;
use shared::error::to_io_error;
use shared::utils::HEALTH_PATH;
use std::path::PathBuf;
use std::sync::Arc;

async fn healthcheck(State(app_state): State<Arc<AppState>>) -> Response {
    json_response(&json!({
        "ok": true,
        "data_path": app_state.db.path().display().to_string(),
    }))
}

fn create_cors_layer() -> tower_http::cors::CorsLayer {
    tower_http::cors::CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
            axum::http::Method::HEAD,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(std::time::Duration::from_secs(3600))
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let tokens = Arc::clone(&app_state.tokens);
    let web_root = PathBuf::from(&app_state.config.api.web_root);
    if !web_root.is_dir() {
        warn!("Web root {} does not exist, only the api is served", web_root.display());
    }

    Router::new()
        .route(HEALTH_PATH, axum::routing::get(healthcheck))
        .merge(auth_api_register(&tokens))
        .merge(project_api_register(&tokens))
        .merge(settings_api_register(&tokens))
        .merge(message_api_register(&tokens))
        .merge(user_api_register(&tokens))
        .fallback_service(web_root_service(&web_root))
        .layer(create_cors_layer())
        .with_state(app_state)
}

pub async fn start_server(config: Arc<Config>) -> std::io::Result<()> {
    let host = config.api.host.clone();
    let port = config.api.port;
    let app_state = Arc::new(AppState::create(config).await.map_err(to_io_error)?);
    let router = create_router(app_state);

    info!("Server running: http://{host}:{port}");
    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    axum::serve(listener, router).await
}

#[cfg(test)]
pub(crate) mod test_app {
    use super::create_router;
    use crate::api::model::AppState;
    use crate::model::Config;
    use crate::repository::seed::seed_demo_data_with_env;
    use crate::repository::Database;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use axum::Router;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tempfile::TempDir;
    use tower::ServiceExt;

    pub struct TestApp {
        pub router: Router,
        pub state: Arc<AppState>,
        pub dir: TempDir,
    }

    impl TestApp {
        /// Router over a fresh store holding the demo data.
        pub async fn seeded() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let no_env = |_: &str| -> Option<String> { None };
            let mut config = Config::default();
            config.storage.data_dir = dir.path().join("data").to_string_lossy().to_string();
            config.api.web_root = dir.path().join("web").to_string_lossy().to_string();
            config.auth.secret = "test-secret".to_string();
            config.auth.hash_mem_cost = Some(1024);
            config.auth.hash_time_cost = Some(1);
            config.prepare_with_env(&no_env).unwrap();

            std::fs::create_dir_all(&config.api.web_root).unwrap();
            std::fs::write(dir.path().join("web").join("index.html"), "<html>nova</html>").unwrap();

            let db = Database::open(&dir.path().join("data")).await.unwrap();
            seed_demo_data_with_env(&db, config.auth.hash_cost(), &no_env).await.unwrap();
            let state = Arc::new(AppState::with_database(Arc::new(config), db).unwrap());
            let router = create_router(Arc::clone(&state));
            Self { router, state, dir }
        }

        pub async fn call(&self, request: Request<Body>) -> Response {
            self.router.clone().oneshot(request).await.unwrap()
        }

        pub async fn login(&self, email: &str, password: &str) -> String {
            let response = self.call(post_json("/api/auth/login", None, &json!({"email": email, "password": password}))).await;
            assert_eq!(response.status(), StatusCode::OK, "login {email}");
            body_json(response).await["token"].as_str().unwrap().to_string()
        }
    }

    fn request(method: Method, path: &str, token: Option<&str>, body: Option<&Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    pub fn get(path: &str, token: Option<&str>) -> Request<Body> {
        request(Method::GET, path, token, None)
    }

    pub fn delete(path: &str, token: Option<&str>) -> Request<Body> {
        request(Method::DELETE, path, token, None)
    }

    pub fn post_json(path: &str, token: Option<&str>, body: &Value) -> Request<Body> {
        request(Method::POST, path, token, Some(body))
    }

    pub fn put_json(path: &str, token: Option<&str>, body: &Value) -> Request<Body> {
        request(Method::PUT, path, token, Some(body))
    }

    pub async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::test_app::{body_json, delete, get, TestApp};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn health_reports_data_path() {
        let app = TestApp::seeded().await;
        let response = app.call(get("/api/health", None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["ok"], true);
        assert!(body["data_path"].as_str().is_some_and(|p| p.ends_with("portal.json")));
    }

    #[tokio::test]
    async fn seeded_admin1_login_scenario() {
        let app = TestApp::seeded().await;
        let token = app.login("admin1@demo.local", "Admin1!123").await;
        let claims = app.state.tokens.verify(&token).unwrap();
        assert_eq!(claims.role, Some(shared::model::Role::Admin1));

        // {admin1} route accepts, {cliente} route refuses
        let response = app.call(get("/api/users", Some(&token))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let response = app.call(get("/api/projects/mine", Some(&token))).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(response).await, json!({"error": "forbidden"}));
    }

    #[tokio::test]
    async fn token_from_other_secret_is_invalid() {
        let app = TestApp::seeded().await;
        let foreign = crate::auth::TokenService::new(b"other-secret", "novaportal", 600);
        let token = foreign.issue(&shared::model::IdentityDto {
            id: 1,
            email: "admin1@demo.local".to_string(),
            name: "Admin 1".to_string(),
            role: shared::model::Role::Admin1,
        }).unwrap();
        let response = app.call(delete("/api/projects/1", Some(&token))).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await, json!({"error": "invalid_token"}));
    }

    #[tokio::test]
    async fn unknown_paths_serve_index() {
        let app = TestApp::seeded().await;
        let response = app.call(get("/panel", None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<html>nova</html>");
        assert!(app.dir.path().join("data").join("portal.json").exists());
    }
}
