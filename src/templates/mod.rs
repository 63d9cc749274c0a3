//! Built-in page template using the Tera template engine

use anyhow::Result;
use tera::{Context, Tera};

use crate::content::{MarkdownDoc, MarkdownRenderer};

/// Renders Markdown documents into full HTML pages
pub struct TemplateRenderer {
    tera: Tera,
    markdown: MarkdownRenderer,
}

impl TemplateRenderer {
    /// Create a new renderer with the embedded post template
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        // `.html` templates autoescape; rendered Markdown is passed through `safe`
        tera.add_raw_template("post.html", include_str!("post.html"))?;

        Ok(Self {
            tera,
            markdown: MarkdownRenderer::new(),
        })
    }

    /// Render a document as an `<article>` page
    pub fn render_post(&self, doc: &MarkdownDoc, site_title: &str) -> Result<String> {
        let mut context = Context::new();
        context.insert("site_title", site_title);
        context.insert("title", doc.title());
        context.insert("content", &self.markdown.render(&doc.body));
        context.insert(
            "date",
            &doc.front_matter
                .date()
                .map(|d| d.format("%Y-%m-%d").to_string()),
        );
        context.insert("tags", &doc.front_matter.tags());
        context.insert("frontmatter", &doc.front_matter);

        Ok(self.tera.render("post.html", &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;
    use std::path::PathBuf;

    fn doc(source: &str) -> MarkdownDoc {
        let (front_matter, body) = FrontMatter::parse(source).unwrap();
        MarkdownDoc {
            slug: "sample".to_string(),
            source: PathBuf::from("sample.md"),
            front_matter,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_render_post() {
        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer
            .render_post(
                &doc("---\ntitle: Fish & Chips\ndate: 2021-05-06\ntags: [food]\n---\nSome **bold** text"),
                "My Blog",
            )
            .unwrap();

        assert!(html.contains("<h1>Fish &amp; Chips</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("2021-05-06"));
        assert!(html.contains("<li>food</li>"));
        assert!(html.contains("My Blog"));
    }

    #[test]
    fn test_render_without_frontmatter_uses_slug() {
        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer.render_post(&doc("Plain body"), "Site").unwrap();
        assert!(html.contains("<h1>sample</h1>"));
        assert!(!html.contains("<time"));
    }
}
