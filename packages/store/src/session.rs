//! Session store: the signed-in [`User`] mirrored to durable storage.

use crate::models::User;
use crate::storage::{load_json, save_json, KeyValueStore};

/// Current authentication state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Session {
    #[default]
    SignedOut,
    SignedIn(User),
}

/// Holds at most one signed-in user and keeps `key` in sync with it.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    key: String,
    session: Session,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Restore the session from `key`. Absent or malformed → signed out.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let session = match load_json::<User, _>(&storage, &key) {
            Ok(Some(user)) => Session::SignedIn(user),
            Ok(None) => Session::SignedOut,
            Err(e) => {
                tracing::warn!("Ignoring stored user: {}", e);
                Session::SignedOut
            }
        };
        Self {
            storage,
            key,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&User> {
        match &self.session {
            Session::SignedIn(user) => Some(user),
            Session::SignedOut => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user().is_some()
    }

    /// Replace any current session with `user` and persist it.
    pub fn sign_in(&mut self, user: User) {
        if let Err(e) = save_json(&self.storage, &self.key, &user) {
            tracing::warn!("Failed to persist user: {}", e);
        }
        tracing::info!(user = %user.name, "Signed in");
        self.session = Session::SignedIn(user);
    }

    /// Drop the session and remove the persisted record.
    pub fn sign_out(&mut self) {
        self.storage.remove(&self.key);
        self.session = Session::SignedOut;
        tracing::info!("Signed out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    const KEY: &str = "storyswap-user";

    fn user(name: &str) -> User {
        User {
            id: 1,
            name: name.to_string(),
            email: format!("{name}@example.com"),
            avatar: "/placeholder.svg".to_string(),
            join_date: "January 2024".to_string(),
            trust_score: 4.8,
            items_sold: 12,
            stories_shared: 18,
        }
    }

    #[test]
    fn test_sign_in_persists_and_restores() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::load(storage.clone(), KEY);
        assert_eq!(store.session(), &Session::SignedOut);

        store.sign_in(user("emma"));
        assert!(store.is_signed_in());
        assert!(storage.get(KEY).is_some());

        let restored = SessionStore::load(storage, KEY);
        assert_eq!(restored.user().map(|u| u.name.as_str()), Some("emma"));
    }

    #[test]
    fn test_sign_in_replaces_existing_session() {
        let mut store = SessionStore::load(MemoryStorage::new(), KEY);
        store.sign_in(user("emma"));
        store.sign_in(user("david"));
        assert_eq!(store.user().map(|u| u.name.as_str()), Some("david"));
    }

    #[test]
    fn test_sign_out_removes_record() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::load(storage.clone(), KEY);
        store.sign_in(user("emma"));

        store.sign_out();
        assert_eq!(store.session(), &Session::SignedOut);
        assert!(storage.get(KEY).is_none());
    }

    #[test]
    fn test_malformed_user_loads_signed_out() {
        let storage = MemoryStorage::new();
        storage.set(KEY, "{\"name\": 5}");
        let store = SessionStore::load(storage, KEY);
        assert!(!store.is_signed_in());
    }
}
