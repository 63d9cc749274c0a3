//! Generate static pages from the content directory

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::time::Instant;

use crate::content::ContentLoader;
use crate::helpers;
use crate::templates::TemplateRenderer;
use crate::Pressline;

/// Render every Markdown file to `{public_dir}{route_prefix}/{slug}/index.html`.
///
/// Stops at the first file that cannot be loaded or rendered. Returns the
/// number of pages written.
pub fn run(site: &Pressline) -> Result<usize> {
    let start = Instant::now();

    let loader = ContentLoader::for_site(site);
    let renderer = TemplateRenderer::new()?;
    let slugs = loader.list_slugs()?;

    tracing::info!("Found {} posts in {:?}", slugs.len(), loader.content_dir());

    let mut written = HashSet::new();
    for slug in &slugs {
        if !written.insert(slug.as_str()) {
            tracing::warn!("Duplicate slug '{}', keeping the first file", slug);
            continue;
        }

        let doc = loader
            .resolve_slug(slug)
            .with_context(|| format!("Failed to generate '{}'", slug))?;
        let html = renderer
            .render_post(&doc, &site.config.title)
            .with_context(|| format!("Failed to render '{}'", slug))?;

        let output = helpers::output_path_for(&site.public_dir, &site.config.route_prefix, slug);
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output, html).with_context(|| format!("Failed to write {:?}", output))?;
        tracing::debug!("Wrote {:?}", output);
    }

    tracing::info!(
        "Generated {} pages in {:.2}s",
        written.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(written.len())
}
