//! # Filesystem-backed token store
//!
//! [`FileStore`] persists the bearer token to a single file so a desktop
//! session survives app restarts.
//!
//! ```text
//! <base_dir>/
//! └── token        # the raw bearer token, no trailing newline
//! ```
//!
//! Use `dirs::data_dir()` joined with `"maxhome"` for a platform-appropriate
//! base (`~/.local/share/maxhome/` on Linux,
//! `~/Library/Application Support/maxhome/` on macOS).

use std::path::PathBuf;

use crate::tokens::TokenStore;

const TOKEN_FILE: &str = "token";

/// Filesystem-backed TokenStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(TOKEN_FILE)
    }
}

impl TokenStore for FileStore {
    fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(self.token_path()).ok()?;
        let token = content.trim();
        (!token.is_empty()).then(|| token.to_string())
    }

    fn save(&self, token: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create token directory {}: {}", self.base.display(), e);
            return;
        }
        if let Err(e) = std::fs::write(self.token_path(), token) {
            tracing::warn!("Failed to persist session token: {}", e);
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(self.token_path()) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove session token: {}", e),
        }
    }
}
