//! WordPress REST shapes and the assembled post view model

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// `{ "rendered": "..." }` wrapper WordPress uses for titles and bodies
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

/// A post or page object as returned by `/posts` and `/pages/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentPage {
    pub id: u64,
    /// Author user id
    pub author: u64,
    pub title: Rendered,
    pub content: Rendered,
    /// Site-local publish time, e.g. `2019-04-02T18:20:11`
    pub date: String,
}

/// A user object as returned by `/users/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: u64,
    /// Display name
    pub name: String,
}

impl User {
    /// Stand-in used when a lookup fails
    pub fn placeholder(id: u64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

/// A post joined with its author's display name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    /// Rendered HTML body
    pub body: String,
    pub title: String,
    /// `None` when the API date could not be parsed
    pub date: Option<NaiveDateTime>,
    pub author: String,
}

impl Post {
    pub fn new(page: &ContentPage, author: &str) -> Self {
        Self {
            body: page.content.rendered.clone(),
            title: page.title.rendered.clone(),
            date: parse_api_date(&page.date),
            author: author.to_string(),
        }
    }
}

/// Parse the date formats WordPress emits
fn parse_api_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_content_page() {
        let json = r#"{
            "id": 7,
            "author": 3,
            "date": "2019-04-02T18:20:11",
            "title": {"rendered": "Hello"},
            "content": {"rendered": "<p>Body</p>", "protected": false},
            "slug": "hello"
        }"#;

        let page: ContentPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.id, 7);
        assert_eq!(page.author, 3);
        assert_eq!(page.title.rendered, "Hello");

        let post = Post::new(&page, "Ada");
        assert_eq!(post.body, "<p>Body</p>");
        assert_eq!(post.author, "Ada");
        assert_eq!(
            post.date.unwrap().format("%Y-%m-%d %H:%M").to_string(),
            "2019-04-02 18:20"
        );
    }

    #[test]
    fn test_unparseable_date_is_none() {
        let page = ContentPage {
            date: "yesterday".to_string(),
            ..Default::default()
        };
        assert_eq!(Post::new(&page, "x").date, None);
    }

    #[test]
    fn test_rfc3339_date() {
        assert!(parse_api_date("2019-04-02T18:20:11+02:00").is_some());
    }

    #[test]
    fn test_user_missing_fields_default() {
        let user: User = serde_json::from_str(r#"{"id": 4}"#).unwrap();
        assert_eq!(user.id, 4);
        assert_eq!(user.name, "");
    }
}
