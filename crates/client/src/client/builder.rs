//! Client builder for constructing [`PortalClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, default JSON headers)
//!
//! # Invariants
//! - `base_url` is required and must be provided before calling `build()`

use std::time::Duration;

use akyljer_config::Config;
use akyljer_config::constants::DEFAULT_TIMEOUT_SECS;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::client::PortalClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`PortalClient`].
///
/// ```rust,ignore
/// let client = PortalClient::builder()
///     .base_url("http://localhost:8000".to_string())
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct PortalClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
}

impl Default for PortalClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl PortalClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trailing slashes are removed on build.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Copy the connection settings out of a loaded [`Config`].
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.timeout = config.connection.timeout;
        self
    }

    fn normalize_base_url(url: &str) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    /// Build the [`PortalClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided or is blank.
    pub fn build(self) -> Result<PortalClient> {
        let base_url = self
            .base_url
            .as_deref()
            .map(Self::normalize_base_url)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(headers)
            .build()?;

        Ok(PortalClient { http, base_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_preserves_settings() {
        let mut config = Config::default();
        config.connection.base_url = "https://portal.example.kg".to_string();
        config.connection.timeout = Duration::from_secs(90);

        let builder = PortalClient::builder().from_config(&config);
        assert_eq!(builder.base_url.as_deref(), Some("https://portal.example.kg"));
        assert_eq!(builder.timeout, Duration::from_secs(90));
    }

    #[test]
    fn test_trailing_slashes_are_removed() {
        let client = PortalClient::builder()
            .base_url("http://localhost:8000//".to_string())
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_missing_base_url_is_rejected() {
        let err = PortalClient::builder().build().unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));

        let err = PortalClient::builder()
            .base_url("  ".to_string())
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }
}
