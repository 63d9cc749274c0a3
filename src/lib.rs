//! pressline: WordPress post fetching and static Markdown pages
//!
//! Two independent flows share this crate. [`api`] fetches posts, pages and
//! author names from a WordPress REST API and joins them into [`api::Post`]
//! values. [`content`] resolves slugs to Markdown files under the content
//! directory and [`commands::generate`] renders them to static HTML.

pub mod api;
pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// A site rooted at a base directory
#[derive(Clone)]
pub struct Pressline {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Markdown source directory
    pub content_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Pressline {
    /// Create a new site from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        })
    }

    /// API client over the configured HTTP transport
    pub fn client(&self) -> Result<api::ContentClient<Box<dyn api::Transport>>> {
        let transport = api::transport_from_config(&self.config)?;
        Ok(api::ContentClient::new(transport, &self.config))
    }

    /// Loader for the content directory
    pub fn loader(&self) -> content::ContentLoader {
        content::ContentLoader::for_site(self)
    }

    /// Generate the static pages
    pub fn generate(&self) -> Result<usize> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
