//! # Repository — attraction and order collections
//!
//! [`Repository`] owns the two JSON collections the application keeps in
//! storage. It is generic over [`KeyValueStore`], so the same logic runs
//! against `localStorage` in the browser, files on native hosts, and an
//! in-memory map in tests.
//!
//! ## Seeding
//!
//! The first read of a collection whose key is absent writes the built-in
//! seed from [`crate::seed`] and returns it. A stored value that no longer
//! decodes is treated exactly like an absent one: it is logged, replaced by
//! the seed, and the seed is returned. No accessor ever fails.
//!
//! ## Writes
//!
//! Every write re-serialises the whole collection. Orders are kept newest
//! first, so [`add_order`](Repository::add_order) prepends.
//!
//! | Method | Key |
//! |--------|-----|
//! | [`get_attractions`](Repository::get_attractions) / [`save_attractions`](Repository::save_attractions) | `attractions_data` |
//! | [`get_all_orders`](Repository::get_all_orders) / [`add_order`](Repository::add_order) / [`get_user_orders`](Repository::get_user_orders) | `site_orders` |

use chrono::Local;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::{load_json, store_json};
use crate::config::{AppConfig, StorageKeys};
use crate::models::{Attraction, Order};
use crate::seed::{default_attractions, default_orders};
use crate::storage::KeyValueStore;

/// Typed access to the persisted attraction and order collections.
#[derive(Clone, Debug)]
pub struct Repository<S> {
    storage: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> Repository<S> {
    pub fn new(storage: S, config: &AppConfig) -> Self {
        Self {
            storage,
            keys: config.storage.clone(),
        }
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }

    /// Read `key`, or write and return `seed()` if it is absent or unreadable.
    fn load_or_seed<T, F>(&self, key: &str, seed: F) -> T
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        match load_json(&self.storage, key) {
            Ok(Some(value)) => return value,
            Ok(None) => tracing::debug!("Seeding `{key}`"),
            Err(e) => tracing::warn!("Reseeding after unreadable data: {e}"),
        }
        let value = seed();
        self.save(key, &value);
        value
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = store_json(&self.storage, key, value) {
            tracing::warn!("{e}");
        }
    }

    // ── Attractions ──────────────────────────────────────────────────

    /// All attractions in stored order, seeding the defaults on first access.
    pub fn get_attractions(&self) -> Vec<Attraction> {
        self.load_or_seed(&self.keys.attractions_key, default_attractions)
    }

    /// Overwrite the stored attraction list.
    pub fn save_attractions(&self, attractions: &[Attraction]) {
        self.save(&self.keys.attractions_key, attractions);
    }

    /// Look up one attraction by id.
    pub fn attraction(&self, id: i64) -> Option<Attraction> {
        self.get_attractions().into_iter().find(|a| a.id == id)
    }

    /// Distinct categories in the order they first appear.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for attraction in self.get_attractions() {
            if !categories.contains(&attraction.category) {
                categories.push(attraction.category);
            }
        }
        categories
    }

    /// An id not used by any stored attraction.
    ///
    /// Normally one past the largest id. When that would overflow, the
    /// smallest unused positive id is returned instead.
    pub fn next_attraction_id(&self) -> i64 {
        let ids: Vec<i64> = self.get_attractions().iter().map(|a| a.id).collect();
        let Some(max) = ids.iter().copied().max() else {
            return 1;
        };
        max.checked_add(1)
            .or_else(|| (1..).find(|id| !ids.contains(id)))
            .unwrap_or(1)
    }

    // ── Orders ───────────────────────────────────────────────────────

    /// All orders, newest first, seeding two sample orders on first access.
    pub fn get_all_orders(&self) -> Vec<Order> {
        self.load_or_seed(&self.keys.orders_key, || default_orders(Local::now()))
    }

    /// Prepend `order`, persist the collection and return it.
    pub fn add_order(&self, order: Order) -> Vec<Order> {
        let mut orders = self.get_all_orders();
        tracing::debug!("Adding order {} for {}", order.id, order.user);
        orders.insert(0, order);
        self.save(&self.keys.orders_key, &orders);
        orders
    }

    /// Orders whose `user` is exactly `username`, newest first.
    pub fn get_user_orders(&self, username: &str) -> Vec<Order> {
        self.get_all_orders()
            .into_iter()
            .filter(|order| order.user == username)
            .collect()
    }
}
