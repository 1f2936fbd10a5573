//! # Client configuration — `maxhome.toml`
//!
//! Defines the TOML file that configures a MAX@Home client
//! (filename: [`ClientConfig::filename`] = `"maxhome.toml"`). Desktop builds
//! read it from the platform config directory; web builds use the defaults
//! with an optional compile-time API base override.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000"
//! health_check_interval_secs = 30   # 0 to disable the online indicator poll
//!
//! [storage]
//! token_key = "token"               # localStorage key on the web
//!
//! [booking]
//! patient_id = 1
//! ```
//!
//! All sections derive `Default`, so a missing or empty file is equivalent to
//! the default configuration.

use serde::{Deserialize, Serialize};

/// Default API base URL.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Default key the bearer token is stored under.
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// Top-level configuration stored in `maxhome.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub booking: BookingConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Seconds between connectivity checks. 0 disables them.
    #[serde(default = "default_health_check_interval")]
    pub health_check_interval_secs: u32,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_health_check_interval() -> u32 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            health_check_interval_secs: default_health_check_interval(),
        }
    }
}

/// Client-side persistence settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

/// Booking form settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Patient the booking form books for.
    #[serde(default = "default_patient_id")]
    pub patient_id: i64,
}

fn default_patient_id() -> i64 {
    1
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            patient_id: default_patient_id(),
        }
    }
}

impl ClientConfig {
    /// Builder method to point the client at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "maxhome.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
