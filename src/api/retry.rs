//! Opt-in retry wrapper for any transport

use async_trait::async_trait;

use super::{FetchError, Transport};

/// Re-issues failed requests up to `attempts` times in total.
///
/// Not-found responses are returned immediately; asking again will not make
/// the resource appear.
pub struct Retrying<T> {
    inner: T,
    attempts: u32,
}

impl<T: Transport> Retrying<T> {
    pub fn new(inner: T, attempts: u32) -> Self {
        Self {
            inner,
            attempts: attempts.max(1),
        }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }
}

#[async_trait]
impl<T: Transport> Transport for Retrying<T> {
    async fn get(&self, path: &str) -> Result<serde_json::Value, FetchError> {
        let mut attempt = 1;
        loop {
            match self.inner.get(path).await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_not_found() || attempt >= self.attempts => return Err(e),
                Err(e) => {
                    tracing::debug!(
                        "GET {} failed (attempt {}/{}): {}",
                        path,
                        attempt,
                        self.attempts,
                        e
                    );
                    attempt += 1;
                }
            }
        }
    }
}
