//! Error types for the portal client.
//!
//! Every failure carries a status: the HTTP status for non-2xx responses,
//! `0` for everything else (network failures, timeouts, undecodable bodies).

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during portal client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The backend answered with a non-2xx status.
    #[error("API Error: {status} {status_text}")]
    Api {
        status: u16,
        status_text: String,
        url: String,
    },

    /// The request never produced a response (connect, DNS, timeout, TLS).
    #[error("Network Error: {0}")]
    Transport(String),

    /// The response body could not be decoded into the expected shape.
    #[error("Network Error: invalid response: {0}")]
    InvalidResponse(String),

    /// The request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// HTTP status carried by this error, or `0` when no response was received.
    pub fn status(&self) -> u16 {
        match self {
            Self::Api { status, .. } => *status,
            Self::Transport(_) | Self::InvalidResponse(_) | Self::InvalidUrl(_) => 0,
        }
    }

    /// True when the failure happened before any HTTP status was available.
    pub fn is_transport(&self) -> bool {
        self.status() == 0
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else if err.is_builder() {
            Self::InvalidUrl(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}
