//! Error types for the provider clients.

use thiserror::Error;

/// Errors that can occur when calling an upstream provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Transport-level failure (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("API error: {status} - {}", message.as_deref().unwrap_or("no status message"))]
    Api { status: u16, message: Option<String> },

    /// Upstream answered 2xx but the body did not match the expected shape
    #[error("Failed to decode response at {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A request URL could not be built from the configured base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ProviderError {
    /// True when the request went out but no response came back.
    pub fn is_unreachable(&self) -> bool {
        match self {
            ProviderError::Request(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            _ => false,
        }
    }

    /// Upstream status code, when the upstream answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ProviderError>;
