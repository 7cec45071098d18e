//! # Filesystem-backed key/value store
//!
//! [`FileStorage`] is a [`KeyValueStore`] that keeps each key in its own file,
//! so native builds (desktop hosts, tests) retain sessions and orders across
//! restarts the same way `localStorage` does in the browser.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── user_info.json
//! ├── attractions_data.json
//! └── site_orders.json
//! ```
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base, e.g.
//! `~/.local/share/tourism/` on Linux.

use std::path::PathBuf;

use crate::storage::KeyValueStore;

/// Filesystem-backed KeyValueStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn item_path(&self, key: &str) -> PathBuf {
        // Keys are fixed identifiers, but keep them inside `base` regardless.
        let file: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.base.join(format!("{file}.json"))
    }

    /// Delete every stored item under the base directory.
    pub fn clear(&self) {
        let _ = std::fs::remove_dir_all(&self.base);
    }
}

impl KeyValueStore for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.item_path(key)).ok()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create storage dir {}: {e}", self.base.display());
            return;
        }
        if let Err(e) = std::fs::write(self.item_path(key), value) {
            tracing::warn!("Failed to write `{key}`: {e}");
        }
    }

    fn remove_item(&self, key: &str) {
        let _ = std::fs::remove_file(self.item_path(key));
    }
}
