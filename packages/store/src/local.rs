//! # Browser `localStorage` backend
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the **web platform**. It
//! talks to `window.localStorage` through `web-sys`, so every tab of the same
//! browser profile sees the same keys (last writer wins, no locking).
//!
//! ## Error handling
//!
//! All methods swallow errors. A missing `window`, storage disabled by privacy
//! settings, or a quota error degrades to "no data" rather than breaking the
//! page. Writes that fail are logged at `warn`.

use crate::storage::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore.
///
/// Zero-size and `Clone`: the storage handle is looked up on every call,
/// which is cheap because the browser caches it.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, dropping write to `{key}`");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("localStorage rejected write to `{key}`");
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
