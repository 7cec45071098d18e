//! # Session store
//!
//! [`SessionStore`] is the single source of truth for "who is logged in". It is
//! an explicit context object: the UI creates one per running page and hands
//! it to views through context, instead of sharing a module-level cell.
//!
//! Every mutation is written through to storage before the call returns.
//!
//! ## Reading persisted sessions
//!
//! [`read_persisted`] is the tolerant reader used both at startup and by the
//! navigation guard. It consults the primary key first and the legacy key only
//! when the primary is absent. A value that does not decode, or that has an
//! empty `username`, counts as absent.

use crate::codec::{load_json, store_json};
use crate::config::{AppConfig, StorageKeys};
use crate::error::StoreError;
use crate::models::Session;
use crate::storage::KeyValueStore;

/// Decode and validate the session under a single key.
fn read_key<S: KeyValueStore + ?Sized>(storage: &S, key: &str) -> Result<Option<Session>, StoreError> {
    let session: Option<Session> = load_json(storage, key)?;
    match session {
        Some(s) if s.username.trim().is_empty() => Err(StoreError::Invalid {
            key: key.to_string(),
            reason: "empty username",
        }),
        other => Ok(other),
    }
}

/// Read the session under `key`, treating any failure as "no session".
fn read_key_lenient<S: KeyValueStore + ?Sized>(storage: &S, key: &str) -> Option<Session> {
    match read_key(storage, key) {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!("Ignoring stored session: {e}");
            None
        }
    }
}

/// Read the persisted session, falling back to the legacy key when the
/// primary key is absent. Never fails.
pub fn read_persisted<S: KeyValueStore + ?Sized>(storage: &S, keys: &StorageKeys) -> Option<Session> {
    if storage.get_item(&keys.session_key).is_some() {
        return read_key_lenient(storage, &keys.session_key);
    }
    read_key_lenient(storage, &keys.legacy_session_key)
}

/// Move a valid session from the legacy key to the primary key.
///
/// Only runs when the primary key is absent. The legacy key is removed once
/// its value has been copied; an unusable legacy value is left alone.
/// Returns whether a session was migrated.
pub fn migrate_legacy<S: KeyValueStore + ?Sized>(storage: &S, keys: &StorageKeys) -> bool {
    if storage.get_item(&keys.session_key).is_some() {
        return false;
    }
    let Some(session) = read_key_lenient(storage, &keys.legacy_session_key) else {
        return false;
    };
    if let Err(e) = store_json(storage, &keys.session_key, &session) {
        tracing::warn!("Session migration failed: {e}");
        return false;
    }
    storage.remove_item(&keys.legacy_session_key);
    tracing::debug!(
        "Migrated session for {} from `{}` to `{}`",
        session.username,
        keys.legacy_session_key,
        keys.session_key
    );
    true
}

/// The current session, mirrored to persistent storage.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    keys: StorageKeys,
    current: Option<Session>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Load the session from storage, migrating a legacy entry first.
    pub fn load(storage: S, config: &AppConfig) -> Self {
        let keys = config.storage.clone();
        migrate_legacy(&storage, &keys);
        let current = read_key_lenient(&storage, &keys.session_key);
        Self {
            storage,
            keys,
            current,
        }
    }

    pub fn user(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }

    /// Replace the session wholesale and persist it.
    ///
    /// The value is stored as given; callers supply a well-formed session.
    /// A session with an empty `username` is still kept in memory, but
    /// [`read_persisted`] rejects it, so the guard and the next [`load`](Self::load)
    /// see no session.
    pub fn set_user(&mut self, info: Session) {
        if info.username.trim().is_empty() {
            tracing::warn!("Storing a session with an empty username; it will not survive a reload");
        }
        if let Err(e) = store_json(&self.storage, &self.keys.session_key, &info) {
            tracing::warn!("Failed to persist session: {e}");
        }
        tracing::info!("Logged in as {}", info.username);
        self.current = Some(info);
    }

    /// Clear the session in memory and in storage.
    ///
    /// The caller is expected to reload the page afterwards so that no other
    /// in-memory state outlives the session.
    pub fn logout(&mut self) {
        if let Some(previous) = self.current.take() {
            tracing::info!("Logged out {}", previous.username);
        }
        self.storage.remove_item(&self.keys.session_key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    fn keys() -> StorageKeys {
        StorageKeys::default()
    }

    #[test]
    fn test_load_empty_storage() {
        let store = SessionStore::load(MemoryStorage::new(), &AppConfig::default());
        assert!(store.user().is_none());
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_set_user_then_read() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::load(storage.clone(), &AppConfig::default());

        let session = Session::new("user001").with_role("USER");
        store.set_user(session.clone());

        assert_eq!(store.user(), Some(&session));
        assert_eq!(read_persisted(&storage, &keys()), Some(session.clone()));

        // A fresh store over the same storage sees the same session
        let reloaded = SessionStore::load(storage, &AppConfig::default());
        assert_eq!(reloaded.user(), Some(&session));
    }

    #[test]
    fn test_set_user_replaces_wholesale() {
        let mut store = SessionStore::load(MemoryStorage::new(), &AppConfig::default());
        store.set_user(Session::new("admin").with_role("ADMIN"));
        store.set_user(Session::new("user002"));

        assert_eq!(store.user(), Some(&Session::new("user002")));
        assert_eq!(
            store.storage().get_item("user_info").as_deref(),
            Some(r#"{"username":"user002"}"#)
        );
    }

    #[test]
    fn test_empty_username_is_memory_only() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::load(storage.clone(), &AppConfig::default());

        store.set_user(Session::new(""));

        assert_eq!(store.user(), Some(&Session::new("")));
        assert!(storage.get_item("user_info").is_some());
        assert!(read_persisted(&storage, &keys()).is_none());
        assert!(SessionStore::load(storage, &AppConfig::default()).user().is_none());
    }

    #[test]
    fn test_logout_removes_key() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::load(storage.clone(), &AppConfig::default());
        store.set_user(Session::new("user001"));

        store.logout();

        assert!(store.user().is_none());
        assert!(storage.get_item("user_info").is_none());
    }

    #[test]
    fn test_malformed_session_loads_as_none() {
        let storage = MemoryStorage::new();
        storage.set_item("user_info", "{\"username\":");
        let store = SessionStore::load(storage.clone(), &AppConfig::default());
        assert!(store.user().is_none());

        storage.set_item("user_info", r#"{"name":"no username field"}"#);
        assert!(read_persisted(&storage, &keys()).is_none());

        storage.set_item("user_info", r#"{"username":"  "}"#);
        assert!(read_persisted(&storage, &keys()).is_none());
    }

    #[test]
    fn test_read_persisted_legacy_fallback() {
        let storage = MemoryStorage::new();
        storage.set_item("user", r#"{"username":"legacy"}"#);
        assert_eq!(read_persisted(&storage, &keys()), Some(Session::new("legacy")));

        // The primary key wins whenever it is present
        storage.set_item("user_info", r#"{"username":"current"}"#);
        assert_eq!(read_persisted(&storage, &keys()), Some(Session::new("current")));

        // Even a broken primary value does not fall through to the legacy key
        storage.set_item("user_info", "garbage");
        assert!(read_persisted(&storage, &keys()).is_none());
    }

    #[test]
    fn test_load_migrates_legacy_key() {
        let storage = MemoryStorage::new();
        storage.set_item("user", r#"{"username":"admin","role":"ADMIN"}"#);

        let store = SessionStore::load(storage.clone(), &AppConfig::default());

        let expected = Session::new("admin").with_role("ADMIN");
        assert_eq!(store.user(), Some(&expected));
        assert!(storage.get_item("user").is_none());
        assert_eq!(read_persisted(&storage, &keys()), Some(expected));
    }

    #[test]
    fn test_migrate_skips_when_primary_present() {
        let storage = MemoryStorage::new();
        storage.set_item("user_info", r#"{"username":"current"}"#);
        storage.set_item("user", r#"{"username":"legacy"}"#);

        assert!(!migrate_legacy(&storage, &keys()));
        assert!(storage.get_item("user").is_some());
    }

    #[test]
    fn test_migrate_leaves_broken_legacy_value() {
        let storage = MemoryStorage::new();
        storage.set_item("user", "not json");

        assert!(!migrate_legacy(&storage, &keys()));
        assert!(storage.get_item("user_info").is_none());
        assert_eq!(storage.get_item("user").as_deref(), Some("not json"));
    }
}
