//! Content loader - resolves slugs to Markdown files and enumerates routes

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

use super::FrontMatter;
use crate::helpers;
use crate::Pressline;

/// A Markdown file split into front-matter and body
#[derive(Debug, Clone)]
pub struct MarkdownDoc {
    pub slug: String,
    /// Path of the file the document was read from
    pub source: PathBuf,
    pub front_matter: FrontMatter,
    /// Raw Markdown after the front-matter
    pub body: String,
}

impl MarkdownDoc {
    /// Front-matter title, falling back to the slug
    pub fn title(&self) -> &str {
        self.front_matter.title().unwrap_or(self.slug.as_str())
    }
}

/// Loads Markdown content from a content directory
pub struct ContentLoader {
    content_dir: PathBuf,
    route_prefix: String,
}

impl ContentLoader {
    pub fn new(content_dir: impl Into<PathBuf>, route_prefix: &str) -> Self {
        Self {
            content_dir: content_dir.into(),
            route_prefix: route_prefix.to_string(),
        }
    }

    /// Loader for a site's configured content directory
    pub fn for_site(site: &Pressline) -> Self {
        Self::new(&site.content_dir, &site.config.route_prefix)
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Every slug, one per Markdown file, in path order
    pub fn list_slugs(&self) -> Result<Vec<String>> {
        Ok(self
            .markdown_files()?
            .iter()
            .map(|path| slug_from_path(path))
            .collect())
    }

    /// Route of every page, e.g. `/blog/a-b`
    pub fn static_paths(&self) -> Result<Vec<String>> {
        Ok(self
            .list_slugs()?
            .iter()
            .map(|slug| helpers::route_for(&self.route_prefix, slug))
            .collect())
    }

    /// Load the file addressed by `slug`.
    ///
    /// The first file in path order whose derived slug matches wins, so the
    /// same file is picked as the one `list_slugs` reports first. `slug` must
    /// be a relative path made of plain names.
    pub fn resolve_slug(&self, slug: &str) -> Result<MarkdownDoc> {
        let plain = !slug.is_empty()
            && Path::new(slug)
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !plain || slug.contains('\\') {
            bail!("Invalid slug: {:?}", slug);
        }

        let path = match self
            .markdown_files()?
            .into_iter()
            .find(|path| slug_from_path(path) == slug)
        {
            Some(path) => path,
            None => bail!("No content file for slug '{}' in {:?}", slug, self.content_dir),
        };

        let mut doc = self.load(&path)?;
        doc.slug = slug.to_string();
        Ok(doc)
    }

    /// Read and split a single Markdown file
    pub fn load(&self, path: &Path) -> Result<MarkdownDoc> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let (front_matter, body) = FrontMatter::parse(&content)
            .with_context(|| format!("Failed to parse front-matter of {:?}", path))?;

        tracing::debug!("Loaded {:?}", path);

        Ok(MarkdownDoc {
            slug: slug_from_path(path),
            source: path.to_path_buf(),
            front_matter,
            body: body.to_string(),
        })
    }

    /// `{content_dir}/**/*.md`, sorted
    fn markdown_files(&self) -> Result<Vec<PathBuf>> {
        if !self.content_dir.exists() {
            return Ok(Vec::new());
        }

        let dir = glob::Pattern::escape(&self.content_dir.to_string_lossy());
        let pattern = format!("{}/**/*.md", dir);

        let mut files = Vec::new();
        for entry in glob::glob(&pattern).context("Invalid content glob")? {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => tracing::warn!("Skipping unreadable content entry: {}", e),
            }
        }

        files.sort();
        Ok(files)
    }
}

/// File name with spaces turned into `-` and the `.md` extension dropped
pub fn slug_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().replace(' ', "-"))
        .unwrap_or_default();
    name.strip_suffix(".md").unwrap_or(&name).trim().to_string()
}
