//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Unparseable values return `ConfigError::InvalidValue`.

use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_BASE_URL, ENV_THEME, ENV_TIMEOUT};
use crate::types::ColorTheme;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_BASE_URL) {
        loader.set_base_url(Some(url));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number of seconds".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(theme) = env_var_or_none(ENV_THEME) {
        let parsed = ColorTheme::parse(&theme).ok_or_else(|| ConfigError::InvalidValue {
            var: ENV_THEME.to_string(),
            message: "must be one of default, light, high_contrast".to_string(),
        })?;
        loader.set_theme(Some(parsed));
    }
    Ok(())
}
