use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::model::IdentityDto;

pub const TOKEN_KEY: &str = "cn_token_v1";
pub const USER_KEY: &str = "cn_user_v1";
pub const VIEW_KEY: &str = "cn_panel_view_v1";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("session storage unavailable: {0}")]
pub struct StorageFault(pub String);

/// Key/value storage backing the client session, e.g. browser local storage.
pub trait SessionStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageFault>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageFault>;
    fn remove(&self, key: &str) -> Result<(), StorageFault>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: IdentityDto,
}

/// Why a self-lookup yielded no identity.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SelfLookupFailure {
    /// The server rejected the token.
    Rejected,
    /// Network or server trouble, says nothing about the token.
    Unavailable,
}

/// Persists the issued token and the identity snapshot.
///
/// There is no in-memory copy, every call goes to the store so all decisions
/// see the same state. Storage faults degrade to "no session".
pub struct SessionCache<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionCache<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub fn get(&self) -> Option<Session> {
        let token = self.read_item(TOKEN_KEY)?;
        let raw_user = self.read_item(USER_KEY)?;
        match serde_json::from_str::<IdentityDto>(&raw_user) {
            Ok(user) => Some(Session { token, user }),
            Err(err) => {
                warn!("Discarding unreadable session snapshot: {err}");
                self.clear();
                None
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.get().is_some()
    }

    /// Writes token and snapshot. Returns `false` and leaves no session behind
    /// if either write fails.
    pub fn set(&self, token: &str, user: &IdentityDto) -> bool {
        if token.is_empty() {
            warn!("Refusing to store an empty token");
            self.clear();
            return false;
        }
        let stored = serde_json::to_string(user)
            .map_err(|err| StorageFault(err.to_string()))
            .and_then(|raw_user| {
                self.store.write(TOKEN_KEY, token)?;
                self.store.write(USER_KEY, &raw_user)
            });
        match stored {
            Ok(()) => true,
            Err(err) => {
                warn!("Failed to store session: {err}");
                self.clear();
                false
            }
        }
    }

    /// Replaces the snapshot of an existing session, e.g. after a self-lookup.
    pub fn refresh(&self, user: &IdentityDto) -> bool {
        match self.get() {
            Some(session) => self.set(&session.token, user),
            None => false,
        }
    }

    /// Applies the outcome of a self-lookup and returns the session left
    /// behind: success replaces the snapshot, a rejected token ends the
    /// session, an unavailable server leaves it untouched.
    pub fn apply_self_lookup(&self, outcome: Result<IdentityDto, SelfLookupFailure>) -> Option<Session> {
        match outcome {
            Ok(user) => {
                self.refresh(&user);
            }
            Err(SelfLookupFailure::Rejected) => self.clear(),
            Err(SelfLookupFailure::Unavailable) => {}
        }
        self.get()
    }

    pub fn clear(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(err) = self.store.remove(key) {
                warn!("Failed to remove {key}: {err}");
            }
        }
    }

    pub fn saved_view(&self) -> Option<String> {
        self.read_item(VIEW_KEY)
    }

    pub fn save_view(&self, view: &str) {
        if let Err(err) = self.store.write(VIEW_KEY, view) {
            warn!("Failed to store panel view: {err}");
        }
    }

    fn read_item(&self, key: &str) -> Option<String> {
        match self.store.read(key) {
            Ok(Some(value)) if !value.is_empty() => Some(value),
            Ok(_) => None,
            Err(err) => {
                warn!("Failed to read {key}: {err}");
                None
            }
        }
    }
}
