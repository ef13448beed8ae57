//! Portal REST client and its API methods.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `records`: farms, events and crop issues
//! - `reference`: districts, dashboard, health and API info
//!
//! # What this module does NOT handle:
//! - Request dispatch and decoding (delegated to [`crate::endpoints`])
//!
//! # Invariants
//! - `base_url` never ends with `/`.
//! - Every request carries JSON `Content-Type` and `Accept` headers.
//! - No call is retried.

pub mod builder;

mod records;
mod reference;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::endpoints;
use crate::error::Result;

/// Typed client for the portal backend. Cheap to clone.
#[derive(Debug, Clone)]
pub struct PortalClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
}

impl PortalClient {
    pub fn builder() -> builder::PortalClientBuilder {
        builder::PortalClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET path` with the non-empty `query` values attached.
    pub async fn get<T, K, V>(&self, path: &str, query: &[(K, V)]) -> Result<T>
    where
        T: DeserializeOwned,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        endpoints::get_json(&self.http, &self.base_url, path, query).await
    }

    pub async fn post<T, B>(&self, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        endpoints::send_json(&self.http, &self.base_url, Method::POST, path, body).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        endpoints::send_json(&self.http, &self.base_url, Method::PATCH, path, body).await
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        endpoints::delete(&self.http, &self.base_url, path).await
    }
}
