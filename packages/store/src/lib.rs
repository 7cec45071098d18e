pub mod codec;
pub mod config;
pub mod error;
pub mod guard;
pub mod models;
pub mod repo;
pub mod seed;
pub mod session;
pub mod storage;

mod memory;
pub use memory::MemoryStorage;

mod file_store;
pub use file_store::FileStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::AppConfig;
pub use error::StoreError;
pub use guard::{authorize, Decision, Notice, NoticeLevel, RedirectTarget, RouteAccess};
pub use models::{Attraction, Order, OrderStatus, Session};
pub use repo::Repository;
pub use session::SessionStore;
pub use storage::KeyValueStore;
