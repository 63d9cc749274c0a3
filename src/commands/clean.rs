//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::Pressline;

/// Remove the generated output directory
pub fn run(site: &Pressline) -> Result<()> {
    if site.public_dir.exists() {
        fs::remove_dir_all(&site.public_dir)?;
        tracing::info!("Deleted: {:?}", site.public_dir);
    }

    Ok(())
}
