//! # Persisted session
//!
//! [`SessionStore`] is the single typed accessor for the authenticated session.
//! It owns a [`Storage`] backend and exposes three lifecycle calls:
//!
//! - [`SessionStore::load`]: read the token and profile written at login.
//! - [`SessionStore::save`]: persist a fresh [`Session`] after `POST /login`.
//! - [`SessionStore::clear`]: wipe **all** client storage on logout.
//!
//! The wire layout matches what the backend-facing pages expect: the raw token
//! under `"token"` and the JSON-encoded [`SessionUser`] under `"user"`.

use serde::{Deserialize, Serialize};

use crate::models::{Role, SessionUser};
use crate::storage::Storage;
use crate::StoreError;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// An authenticated session: bearer token plus profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

impl Session {
    pub fn role(&self) -> Role {
        self.user.role
    }
}

/// Typed accessor over a [`Storage`] backend.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: Storage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load the persisted session.
    ///
    /// Returns `None` when either key is missing or the profile blob does not
    /// decode; a half-written session is treated as logged out.
    pub fn load(&self) -> Option<Session> {
        let token = self.storage.get(TOKEN_KEY)?;
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str::<SessionUser>(&raw) {
            Ok(user) => Some(Session { token, user }),
            Err(e) => {
                tracing::warn!("Discarding unreadable session profile: {}", e);
                None
            }
        }
    }

    /// Persist a session, overwriting any previous one.
    pub fn save(&self, session: &Session) -> Result<(), StoreError> {
        let user = serde_json::to_string(&session.user)?;
        self.storage.set(TOKEN_KEY, &session.token)?;
        self.storage.set(USER_KEY, &user)?;
        Ok(())
    }

    /// Drop everything held in client storage.
    pub fn clear(&self) {
        self.storage.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    fn session() -> Session {
        Session {
            token: "tok-1".into(),
            user: SessionUser {
                id: Some(7),
                name: "Ana".into(),
                email: "ana@lab.ma".into(),
                role: Role::Admin,
            },
        }
    }

    #[test]
    fn test_save_then_load() {
        let store = SessionStore::new(MemoryStorage::new());
        assert!(store.load().is_none());

        store.save(&session()).unwrap();
        assert_eq!(store.load(), Some(session()));
    }

    #[test]
    fn test_user_blob_is_plain_json() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.save(&session()).unwrap();

        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok-1"));
        let raw = storage.get(USER_KEY).unwrap();
        assert!(raw.contains("\"role\":\"admin\""));
    }

    #[test]
    fn test_clear_removes_unrelated_keys_too() {
        let storage = MemoryStorage::new();
        storage.set("theme", "dark").unwrap();
        let store = SessionStore::new(storage.clone());
        store.save(&session()).unwrap();

        store.clear();
        assert!(store.load().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_role_comes_from_stored_profile() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.save(&session()).unwrap();
        assert_eq!(store.load().map(|s| s.role()), Some(Role::Admin));

        storage
            .set(USER_KEY, r#"{"id":2,"name":"Old","email":"old@lab.ma"}"#)
            .unwrap();
        assert_eq!(store.load().map(|s| s.role()), Some(Role::Unknown));
    }

    #[test]
    fn test_corrupt_profile_is_logged_out() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "tok").unwrap();
        storage.set(USER_KEY, "not json").unwrap();
        assert!(SessionStore::new(storage).load().is_none());
    }
}
