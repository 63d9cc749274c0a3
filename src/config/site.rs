//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,

    // Remote API
    /// WordPress REST root, e.g. `https://example.com/wp-json/wp/v2/`
    pub api_url: String,
    pub posts_per_page: u32,
    pub timeout_secs: u64,
    /// Total attempts per request; 0 or 1 disables the retry wrapper
    pub retries: u32,

    // Fallbacks
    pub author_placeholder: String,
    pub page_not_found: String,

    // Static pages
    pub content_dir: String,
    pub public_dir: String,
    pub route_prefix: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Pressline".to_string(),

            api_url: "http://localhost/wp-json/wp/v2/".to_string(),
            posts_per_page: 10,
            timeout_secs: 30,
            retries: 0,

            author_placeholder: "Unknown author".to_string(),
            page_not_found: "Page content not found".to_string(),

            content_dir: "content/posts".to_string(),
            public_dir: "public".to_string(),
            route_prefix: "/blog".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }

    /// API root with exactly one trailing slash
    pub fn api_base(&self) -> String {
        format!("{}/", self.api_url.trim_end_matches('/'))
    }
}
