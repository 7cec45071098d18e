//! Shared storage constructor for all platforms.
//!
//! Returns the [`store::KeyValueStore`] appropriate for the build:
//! - **Web** (WASM + `web` feature): `window.localStorage` via `store::LocalStorage`
//! - **WASM without `web`**: in-memory, nothing survives a reload
//! - **Native**: one JSON file per key under `<data_dir>/tourism/`

use store::{AppConfig, Repository};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppStorage = store::LocalStorage;

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type AppStorage = store::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub type AppStorage = store::FileStorage;

/// Create the platform-appropriate storage handle.
pub fn make_storage() -> AppStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStorage::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("tourism");
        store::FileStorage::new(base)
    }
}

/// Create a repository over the platform storage.
pub fn make_repo(config: &AppConfig) -> Repository<AppStorage> {
    Repository::new(make_storage(), config)
}
