//! URL and output-path helpers for static routes

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::path::{Path, PathBuf};

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Route for a slug under a prefix
///
/// # Examples
/// ```ignore
/// route_for("/blog", "a-b") // -> "/blog/a-b"
/// ```
pub fn route_for(prefix: &str, slug: &str) -> String {
    let prefix = prefix.trim_matches('/');
    let segment = encode_segment(slug);

    if prefix.is_empty() {
        format!("/{}", segment)
    } else {
        format!("/{}/{}", prefix, segment)
    }
}

/// Percent-encode a single path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// `index.html` location for a route inside the output directory
///
/// # Examples
/// ```ignore
/// output_path_for("public", "/blog", "a-b") // -> "public/blog/a-b/index.html"
/// ```
pub fn output_path_for(public_dir: &Path, prefix: &str, slug: &str) -> PathBuf {
    let mut path = public_dir.to_path_buf();
    for part in prefix.split('/').filter(|p| !p.is_empty()) {
        path.push(part);
    }
    path.join(slug).join("index.html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_for() {
        assert_eq!(route_for("/blog", "a-b"), "/blog/a-b");
        assert_eq!(route_for("/blog/", "c"), "/blog/c");
        assert_eq!(route_for("", "c"), "/c");
        assert_eq!(route_for("posts", "c"), "/posts/c");
    }

    #[test]
    fn test_route_escapes_unsafe_characters() {
        assert_eq!(route_for("/blog", "why?#1"), "/blog/why%3F%231");
        assert_eq!(route_for("/blog", "café"), "/blog/caf%C3%A9");
    }

    #[test]
    fn test_output_path_for() {
        let path = output_path_for(Path::new("public"), "/blog", "a-b");
        assert_eq!(path, Path::new("public/blog/a-b/index.html"));

        let path = output_path_for(Path::new("out"), "/", "c");
        assert_eq!(path, Path::new("out/c/index.html"));
    }
}
