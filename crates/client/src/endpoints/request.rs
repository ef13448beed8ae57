//! Request dispatch and response decoding.
//!
//! Responsibilities:
//! - Send a prepared request and turn non-2xx statuses into [`ClientError::Api`].
//! - Decode JSON bodies, mapping decode failures to [`ClientError::InvalidResponse`].
//!
//! Does NOT handle:
//! - Retries. A failed request is surfaced to the caller as-is.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::endpoints::query::build_query;
use crate::error::{ClientError, Result};

/// Send a request, returning the response only for 2xx statuses.
pub async fn send_request(builder: RequestBuilder, method: &Method, path: &str) -> Result<Response> {
    debug!(%method, path, "sending request");

    let response = builder.send().await.map_err(|e| {
        warn!(%method, path, error = %e, "request failed before a response");
        ClientError::from(e)
    })?;

    let status = response.status();
    if status.is_success() {
        debug!(%method, path, status = status.as_u16(), "request succeeded");
        return Ok(response);
    }

    let err = ClientError::Api {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
        url: response.url().to_string(),
    };
    warn!(%method, path, status = status.as_u16(), "request returned error status");
    Err(err)
}

/// Decode a JSON body. An empty body decodes as `null`.
pub async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let text = response.text().await.map_err(ClientError::from)?;
    let body = if text.trim().is_empty() { "null" } else { text.as_str() };
    serde_json::from_str(body).map_err(ClientError::from)
}

/// `GET {base_url}{path}` with only the non-empty query parameters attached.
pub async fn get_json<T, K, V>(
    client: &Client,
    base_url: &str,
    path: &str,
    query: &[(K, V)],
) -> Result<T>
where
    T: DeserializeOwned,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let url = format!("{base_url}{path}");
    let query = build_query(query);
    let mut builder = client.get(&url);
    if !query.is_empty() {
        builder = builder.query(&query);
    }
    let response = send_request(builder, &Method::GET, path).await?;
    decode_json(response).await
}

/// Send `method {base_url}{path}` with an optional JSON body.
pub async fn send_json<T, B>(
    client: &Client,
    base_url: &str,
    method: Method,
    path: &str,
    body: Option<&B>,
) -> Result<T>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let url = format!("{base_url}{path}");
    let mut builder = client.request(method.clone(), &url);
    if let Some(body) = body {
        builder = builder.json(body);
    }
    let response = send_request(builder, &method, path).await?;
    decode_json(response).await
}

/// `DELETE {base_url}{path}`, discarding any body.
pub async fn delete(client: &Client, base_url: &str, path: &str) -> Result<()> {
    let url = format!("{base_url}{path}");
    send_request(client.delete(&url), &Method::DELETE, path).await?;
    Ok(())
}
