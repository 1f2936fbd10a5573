//! # Browser localStorage token store
//!
//! [`LocalStorageStore`] is the [`TokenStore`] used on the **web platform**. It
//! keeps the bearer token in `window.localStorage` under a fixed key (default
//! `"token"`), so it survives page reloads but is not otherwise protected.
//!
//! `web_sys::Storage` is not `Clone`, so every call looks the storage object up
//! again from the window. When storage is unavailable (private mode, disabled
//! cookies) reads return `None` and writes are logged and dropped.

use web_sys::Storage;

use crate::tokens::TokenStore;

/// localStorage-backed TokenStore for the web platform.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TOKEN_KEY)
    }
}

impl TokenStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        self.storage()?.get_item(&self.key).ok().flatten()
    }

    fn save(&self, token: &str) {
        let Some(storage) = self.storage() else {
            tracing::warn!("localStorage unavailable, token not persisted");
            return;
        };
        if let Err(e) = storage.set_item(&self.key, token) {
            tracing::warn!("Failed to persist session token: {:?}", e);
        }
    }

    fn clear(&self) {
        let Some(storage) = self.storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(&self.key) {
            tracing::warn!("Failed to remove session token: {:?}", e);
        }
    }
}
