//! Typed session state over a key-value backend.
//!
//! The booking client keeps three fixed keys in local storage: the bearer
//! token under `authToken` (and, for older callers, `token`) and the cached
//! user projection as JSON under `user`. There is no expiry logic here; a
//! 401/403 from the API clears the session through [`Session::clear`].

use crate::kv::KeyValueStore;
use crate::models::SessionUser;

/// Primary key the bearer token is stored under.
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Legacy duplicate of the token key, kept in sync on every write.
pub const TOKEN_KEY: &str = "token";
/// Key holding the cached [`SessionUser`] as JSON.
pub const USER_KEY: &str = "user";

/// Session state bound to a [`KeyValueStore`] backend.
#[derive(Clone, Debug, Default)]
pub struct Session<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist a successful sign-in: token under both token keys, user as
    /// JSON under the user key.
    pub fn save_sign_in(&self, token: &str, user: &SessionUser) {
        self.store.set(AUTH_TOKEN_KEY, token);
        self.store.set(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            self.store.set(USER_KEY, &json);
        }
    }

    /// The stored bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.store
            .get(AUTH_TOKEN_KEY)
            .or_else(|| self.store.get(TOKEN_KEY))
    }

    /// The cached user projection, if present and decodable.
    pub fn user(&self) -> Option<SessionUser> {
        let json = self.store.get(USER_KEY)?;
        serde_json::from_str(&json).ok()
    }

    /// Synchronous presence check on the token key.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Remove all three session keys. Succeeds even when nothing was stored.
    pub fn clear(&self) {
        self.store.remove(AUTH_TOKEN_KEY);
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn sample_user() -> SessionUser {
        SessionUser {
            id: 7,
            name: "Lan Pham".to_string(),
            email: "lan@example.com".to_string(),
            role: "USER".to_string(),
        }
    }

    #[test]
    fn test_sign_in_writes_all_keys() {
        let backing = MemoryStore::new();
        let session = Session::new(backing.clone());

        session.save_sign_in("tok-123", &sample_user());

        assert_eq!(backing.get(AUTH_TOKEN_KEY).as_deref(), Some("tok-123"));
        assert_eq!(backing.get(TOKEN_KEY).as_deref(), Some("tok-123"));
        assert!(backing.get(USER_KEY).is_some());
        assert!(session.is_authenticated());
        assert_eq!(session.user(), Some(sample_user()));
    }

    #[test]
    fn test_clear_removes_all_keys() {
        let backing = MemoryStore::new();
        let session = Session::new(backing.clone());

        session.save_sign_in("tok-123", &sample_user());
        session.clear();

        assert!(backing.get(AUTH_TOKEN_KEY).is_none());
        assert!(backing.get(TOKEN_KEY).is_none());
        assert!(backing.get(USER_KEY).is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_clear_when_empty_is_ok() {
        let session = Session::new(MemoryStore::new());
        session.clear();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_token_falls_back_to_legacy_key() {
        let backing = MemoryStore::new();
        let session = Session::new(backing.clone());

        backing.set(TOKEN_KEY, "legacy");
        assert_eq!(session.token().as_deref(), Some("legacy"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_corrupt_user_json_reads_as_none() {
        let backing = MemoryStore::new();
        let session = Session::new(backing.clone());

        backing.set(USER_KEY, "{not json");
        assert!(session.user().is_none());
    }
}
