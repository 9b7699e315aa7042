use crate::api::api_utils::auth_error_response;
use crate::auth::{bearer_from_headers, TokenService};
use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::routing::MethodRouter;
use log::debug;
use shared::error::AuthError;
use shared::model::{Access, Claims};
use shared::utils::current_time_secs;
use std::sync::Arc;

/// Gate state for one route: the verifier and the route's rule.
#[derive(Clone)]
pub struct RouteGuard {
    tokens: Arc<TokenService>,
    access: Access,
}

impl RouteGuard {
    pub const fn new(tokens: Arc<TokenService>, access: Access) -> Self {
        Self { tokens, access }
    }
}

/// Resolves the caller of a request and checks it against `access`.
///
/// `Ok(None)` for public routes, otherwise the verified claims.
pub fn authorize_headers(headers: &HeaderMap, tokens: &TokenService, access: Access, now: i64) -> Result<Option<Claims>, AuthError> {
    if !access.requires_token() {
        return Ok(None);
    }
    let token = bearer_from_headers(headers).ok_or(AuthError::MissingToken)?;
    let claims = tokens.verify_at(token, now).map_err(|err| {
        debug!("Token rejected: {err}");
        AuthError::InvalidToken
    })?;
    access.check(claims.role).inspect_err(|err| {
        debug!("Access denied for subject {}: {err}", claims.sub);
    })?;
    Ok(Some(claims))
}

pub async fn authorize(State(guard): State<RouteGuard>, mut request: Request, next: Next) -> Response {
    match authorize_headers(request.headers(), &guard.tokens, guard.access, current_time_secs()) {
        Ok(Some(claims)) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Ok(None) => next.run(request).await,
        Err(err) => auth_error_response(err).into_response(),
    }
}

/// Wraps the handlers of `route` so they only run for callers satisfying `access`.
pub fn guarded<S>(route: MethodRouter<S>, tokens: &Arc<TokenService>, access: Access) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    route.route_layer(axum::middleware::from_fn_with_state(RouteGuard::new(Arc::clone(tokens), access), authorize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request as HttpRequest, StatusCode};
    use axum::routing::get;
    use axum::{Extension, Router};
    use shared::model::{IdentityDto, Role, PROJECT_DELETE, PROJECTS_LIST_MINE, SELF_LOOKUP};
    use tower::ServiceExt;

    const NOW: i64 = 1_700_000_000;

    fn tokens() -> Arc<TokenService> {
        Arc::new(TokenService::new(b"guard-secret", "novaportal", 600))
    }

    fn token_for(tokens: &TokenService, role: Role, now: i64) -> String {
        let identity = IdentityDto { id: 1, email: "someone@demo.local".to_string(), name: "Someone".to_string(), role };
        tokens.issue_at(&identity, now).unwrap()
    }

    fn headers_with(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, format!("Bearer {token}").parse().unwrap());
        headers
    }

    #[test]
    fn admin1_rule() {
        let tokens = tokens();
        let admin2 = headers_with(&token_for(&tokens, Role::Admin2, NOW));
        let admin1 = headers_with(&token_for(&tokens, Role::Admin1, NOW));
        assert_eq!(authorize_headers(&admin2, &tokens, PROJECT_DELETE, NOW), Err(AuthError::Forbidden));
        let claims = authorize_headers(&admin1, &tokens, PROJECT_DELETE, NOW).unwrap().unwrap();
        assert_eq!(claims.role, Some(Role::Admin1));
    }

    #[test]
    fn missing_header_is_not_forbidden() {
        let tokens = tokens();
        assert_eq!(authorize_headers(&HeaderMap::new(), &tokens, PROJECT_DELETE, NOW), Err(AuthError::MissingToken));
        let mut basic = HeaderMap::new();
        basic.insert(header::AUTHORIZATION, "Basic abc".parse().unwrap());
        assert_eq!(authorize_headers(&basic, &tokens, SELF_LOOKUP, NOW), Err(AuthError::MissingToken));
    }

    #[test]
    fn expired_and_foreign_tokens_are_invalid() {
        let tokens = tokens();
        let expired = headers_with(&token_for(&tokens, Role::Cliente, NOW - 601));
        assert_eq!(authorize_headers(&expired, &tokens, PROJECTS_LIST_MINE, NOW), Err(AuthError::InvalidToken));
        let foreign_service = TokenService::new(b"other", "novaportal", 600);
        let foreign = headers_with(&token_for(&foreign_service, Role::Cliente, NOW));
        assert_eq!(authorize_headers(&foreign, &tokens, PROJECTS_LIST_MINE, NOW), Err(AuthError::InvalidToken));
    }

    #[test]
    fn public_route_needs_nothing() {
        assert_eq!(authorize_headers(&HeaderMap::new(), &tokens(), Access::Public, NOW), Ok(None));
    }

    async fn whoami(Extension(claims): Extension<Claims>) -> String {
        claims.email
    }

    #[tokio::test]
    async fn middleware_attaches_claims() {
        let tokens = tokens();
        let app: Router = Router::new().route("/guarded", guarded(get(whoami), &tokens, PROJECT_DELETE));

        let token = tokens.issue(&IdentityDto {
            id: 1,
            email: "admin1@demo.local".to_string(),
            name: "Admin 1".to_string(),
            role: Role::Admin1,
        }).unwrap();
        let response = app.clone()
            .oneshot(HttpRequest::get("/guarded").header(header::AUTHORIZATION, format!("Bearer {token}")).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"admin1@demo.local");

        let response = app
            .oneshot(HttpRequest::get("/guarded").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"error":"missing_token"}"#);
    }
}
