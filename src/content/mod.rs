//! Content module - Markdown files, front-matter and rendering

mod frontmatter;
pub mod loader;
mod markdown;

pub use frontmatter::FrontMatter;
pub use loader::{ContentLoader, MarkdownDoc};
pub use markdown::MarkdownRenderer;
