//! # Key/value storage abstraction
//!
//! Everything the application persists goes through [`KeyValueStore`]: a
//! string-keyed, string-valued, synchronous store modelled on the browser's
//! `localStorage`. Values are JSON text produced by [`crate::codec`].
//!
//! Implementations live in sibling modules:
//!
//! | Backend | Platform |
//! |---------|----------|
//! | [`crate::MemoryStorage`] | tests, non-browser hosts |
//! | [`crate::FileStorage`] | native hosts (one file per key) |
//! | `LocalStorage` | wasm32 with the `web` feature |
//!
//! Backends never fail loudly. A read that cannot be served is `None`, a write
//! that cannot be performed is dropped. Callers treat "absent" as the only
//! failure mode, which is what the seeding and session logic rely on.

/// Synchronous string key/value store.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) {
        (**self).remove_item(key)
    }
}
