use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::storage::KeyValueStore;

/// In-memory KeyValueStore for testing and non-browser hosts.
///
/// Clones share the same map, so a clone behaves like a second handle onto
/// the same browser profile.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
    }

    fn remove_item(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());
        assert!(storage.get_item("user_info").is_none());

        storage.set_item("user_info", "{}");
        assert_eq!(storage.get_item("user_info").as_deref(), Some("{}"));
        assert_eq!(storage.len(), 1);

        storage.set_item("user_info", "[]");
        assert_eq!(storage.get_item("user_info").as_deref(), Some("[]"));

        storage.remove_item("user_info");
        assert!(storage.get_item("user_info").is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_clones_share_items() {
        let tab_a = MemoryStorage::new();
        let tab_b = tab_a.clone();

        tab_a.set_item("site_orders", "[]");
        assert_eq!(tab_b.get_item("site_orders").as_deref(), Some("[]"));
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let storage = MemoryStorage::new();
        storage.remove_item("absent");
        assert!(storage.is_empty());
    }
}
