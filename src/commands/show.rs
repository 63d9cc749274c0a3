//! Print one Markdown file's front-matter and body

use anyhow::Result;

use crate::content::ContentLoader;
use crate::Pressline;

pub fn run(site: &Pressline, slug: &str) -> Result<()> {
    let doc = ContentLoader::for_site(site).resolve_slug(slug)?;

    println!("# {} [{}]", doc.title(), doc.source.display());
    if !doc.front_matter.is_empty() {
        print!("{}", serde_yaml::to_string(&doc.front_matter)?);
        println!("---");
    }
    println!("{}", doc.body);

    Ok(())
}
