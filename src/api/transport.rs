//! HTTP transport for the content API

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use super::FetchError;
use crate::config::SiteConfig;

/// Issues GET requests against API paths relative to a base URL
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `path` (e.g. `posts?page=1&per_page=10`) and return its JSON body
    async fn get(&self, path: &str) -> Result<serde_json::Value, FetchError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn get(&self, path: &str) -> Result<serde_json::Value, FetchError> {
        (**self).get(path).await
    }
}

/// reqwest-backed transport
pub struct HttpTransport {
    client: Client,
    base: String,
}

impl HttpTransport {
    pub fn new(base: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pressline/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Transport {
                url: base.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base: format!("{}/", base.trim_end_matches('/')),
        })
    }

    pub fn from_config(config: &SiteConfig) -> Result<Self, FetchError> {
        Self::new(&config.api_base(), Duration::from_secs(config.timeout_secs))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<serde_json::Value, FetchError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let transport_error = |e: reqwest::Error| FetchError::Transport {
            url: url.clone(),
            message: e.to_string(),
        };

        let response = self.client.get(&url).send().await.map_err(transport_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound { url });
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport_error)?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { url, source })
    }
}
