use log::{debug, warn};
use shared::model::{IdentityDto, MeResponse, Session, TokenResponse, UserCredential};
use shared::utils::{normalize_email, AUTH_LOGIN_PATH, AUTH_ME_PATH};
use crate::error::Error;
use crate::services::{request_get, request_post, session_cache};

#[derive(Default)]
pub struct AuthService {}

impl AuthService {
    pub fn new() -> Self {
        Self {}
    }

    /// Current session, read from storage on every call.
    pub fn session(&self) -> Option<Session> {
        session_cache().get()
    }

    pub fn is_authenticated(&self) -> bool {
        session_cache().is_logged_in()
    }

    pub async fn login(&self, email: String, password: String) -> Result<IdentityDto, Error> {
        let mut credentials = UserCredential {
            email: normalize_email(&email),
            password,
        };
        let result = request_post::<_, TokenResponse>(AUTH_LOGIN_PATH, &credentials).await;
        credentials.zeroize();
        let response = result?;
        if session_cache().set(&response.token, &response.user) {
            debug!("Logged in as {} ({})", response.user.email, response.user.role);
            Ok(response.user)
        } else {
            Err(Error::RequestError)
        }
    }

    pub fn logout(&self) {
        session_cache().clear();
    }

    /// Self-lookup. Returns the session left after applying the answer, a
    /// rejected token drops it, network trouble keeps it.
    pub async fn me(&self) -> Option<Session> {
        if !self.is_authenticated() {
            return None;
        }
        let outcome = request_get::<MeResponse>(AUTH_ME_PATH).await
            .map(|response| response.user)
            .map_err(|err| {
                warn!("Self-lookup failed: {err}");
                err.self_lookup_failure()
            });
        session_cache().apply_self_lookup(outcome)
    }
}
