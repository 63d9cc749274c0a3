//! Errors raised while talking to the content API

use thiserror::Error;

/// Failure of a single remote request
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure (connect, timeout, broken body)
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} not found")]
    NotFound { url: String },

    /// Any non-success status other than 404
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }

    /// URL or API path the failed request targeted
    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::NotFound { url }
            | FetchError::Status { url, .. }
            | FetchError::Decode { url, .. } => url,
        }
    }
}
