pub mod config;
pub mod models;
pub mod session;
pub mod tokens;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::ClientConfig;
pub use models::{Session, SessionUser};
pub use session::{SessionHandle, SessionStore, SubscriptionId};
pub use tokens::TokenStore;
