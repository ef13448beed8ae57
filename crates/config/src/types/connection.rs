//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (backend URL, request timeout).
//! - Define the main `Config` structure shared by the front ends.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Duration fields are serialized as whole seconds.
//! - `Config::default()` points at the development backend.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::types::ColorTheme;

mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Where the portal backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the backend, without a trailing slash (e.g. `http://localhost:8000`)
    pub base_url: String,
    /// Per-request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub connection: ConnectionConfig,
    #[serde(default)]
    pub theme: ColorTheme,
}
