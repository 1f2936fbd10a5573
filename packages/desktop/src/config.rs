//! Desktop paths and the `maxhome.toml` loader.
//!
//! | What | Where |
//! |------|-------|
//! | config | `<config_dir>/maxhome/maxhome.toml` |
//! | session token | `<data_dir>/maxhome/token` |
//!
//! A missing config file means defaults. A file that cannot be read or parsed
//! is logged and also falls back to defaults, so the app always starts.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use store::ClientConfig;

const APP_DIR: &str = "maxhome";

/// Directory holding the persisted session token.
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Load the desktop configuration from the platform config directory.
pub fn load() -> ClientConfig {
    match dirs::config_dir() {
        Some(dir) => load_from(&dir.join(APP_DIR).join(ClientConfig::filename())),
        None => ClientConfig::default(),
    }
}

pub fn load_from(path: &Path) -> ClientConfig {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return ClientConfig::default(),
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            return ClientConfig::default();
        }
    };
    match ClientConfig::from_toml(&text) {
        Ok(config) => {
            tracing::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
            ClientConfig::default()
        }
    }
}
