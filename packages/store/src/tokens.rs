//! # Token persistence
//!
//! A [`TokenStore`] keeps exactly one value: the bearer token issued at login.
//! It outlives the page (or process), so a reload can pick the token back up.
//!
//! | Backend | Platform | Where the token lives |
//! |---------|----------|-----------------------|
//! | [`crate::MemoryStore`] | any | process memory (tests, fallback) |
//! | `FileStore` | native | a single file under the app data dir |
//! | `LocalStorageStore` | wasm + `web` | browser `localStorage` under a fixed key |
//!
//! Backends never fail loudly. A storage that cannot be read behaves like an
//! empty one, and failed writes are logged and dropped: the in-memory session
//! stays authoritative for the lifetime of the page.

/// Persistent slot for the session bearer token.
pub trait TokenStore {
    /// Read the persisted token, if any.
    fn load(&self) -> Option<String>;

    /// Persist `token`, replacing any previous value.
    fn save(&self, token: &str);

    /// Remove the persisted token.
    fn clear(&self);
}

impl<T: TokenStore + ?Sized> TokenStore for Box<T> {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, token: &str) {
        (**self).save(token)
    }

    fn clear(&self) {
        (**self).clear()
    }
}
