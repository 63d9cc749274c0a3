//! List static content

use anyhow::Result;

use crate::content::ContentLoader;
use crate::Pressline;

/// List slugs or static routes
pub fn run(site: &Pressline, content_type: &str) -> Result<()> {
    let loader = ContentLoader::for_site(site);

    let (label, items) = match content_type {
        "slug" | "slugs" => ("Slugs", loader.list_slugs()?),
        "path" | "paths" | "route" | "routes" => ("Paths", loader.static_paths()?),
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: slugs, paths",
                content_type
            );
        }
    };

    println!("{} ({}):", label, items.len());
    for item in items {
        println!("  {}", item);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let site = Pressline::new(dir.path()).unwrap();
        assert!(run(&site, "slugs").is_ok());
        assert!(run(&site, "tags").is_err());
    }
}
