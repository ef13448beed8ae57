//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader`.
//! - Validate and normalize the backend base URL.
//! - Build the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables when called after `from_env()`.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - A missing base URL falls back to `DEFAULT_BASE_URL`; a blank explicit one is an error.

use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, ENV_DOTENV_DISABLED, MAX_TIMEOUT_SECS,
};
use crate::types::{ColorTheme, Config, ConnectionConfig};

/// Configuration loader that builds config from defaults, environment and overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    timeout: Option<Duration>,
    theme: Option<ColorTheme>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// Missing `.env` files are silently ignored. When `DOTENV_DISABLED` is
    /// `1` or `true` the file is not read at all.
    ///
    /// # Errors
    ///
    /// - `ConfigError::DotenvParse` if the file has invalid syntax
    /// - `ConfigError::DotenvIo` if the file exists but cannot be read
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if e.not_found() => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Apply `AKYLJER_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the backend base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the color theme.
    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = match self.base_url.as_deref() {
            Some(raw) => validate_and_normalize_base_url(raw)?,
            None => DEFAULT_BASE_URL.to_string(),
        };

        let connection = ConnectionConfig {
            base_url,
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        };
        validate_timeout(connection.timeout)?;

        Ok(Config {
            connection,
            theme: self.theme.unwrap_or_default(),
        })
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_theme(&mut self, theme: Option<ColorTheme>) {
        self.theme = theme;
    }
}

fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let secs = timeout.as_secs();
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            message: "timeout must be greater than 0 seconds".to_string(),
        });
    }
    if secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!(
                "timeout exceeds maximum allowed value of {} seconds",
                MAX_TIMEOUT_SECS
            ),
        });
    }
    Ok(())
}

/// Validates and normalizes a base URL string.
///
/// Validation rules:
/// - Trim surrounding whitespace
/// - Treat blank as missing (`ConfigError::MissingBaseUrl`)
/// - Require an absolute http or https URL with a host
/// - Strip trailing slashes
pub(crate) fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "base_url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. http://localhost:8000): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: "host is required (e.g. http://localhost:8000)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
