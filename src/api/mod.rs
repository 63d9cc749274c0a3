//! Content API module - WordPress REST fetching and post/author assembly

mod client;
mod error;
mod messages;
mod models;
mod retry;
mod transport;

pub use client::ContentClient;
pub use error::FetchError;
pub use messages::{Level, Message, Messages};
pub use models::{ContentPage, Post, Rendered, User};
pub use retry::Retrying;
pub use transport::{HttpTransport, Transport};

use crate::config::SiteConfig;

/// Build the transport described by the config, wrapping it for retries when
/// `retries` asks for more than one attempt
pub fn transport_from_config(config: &SiteConfig) -> Result<Box<dyn Transport>, FetchError> {
    let http = HttpTransport::from_config(config)?;
    if config.retries > 1 {
        Ok(Box::new(Retrying::new(http, config.retries)))
    } else {
        Ok(Box::new(http))
    }
}
