//! Content client - fetches posts, pages and authors and assembles posts

use futures::future::join_all;
use serde::de::DeserializeOwned;
use std::collections::{HashMap, HashSet};

use super::{ContentPage, FetchError, Messages, Post, Transport, User};
use crate::config::SiteConfig;

const COMPONENT: &str = "ContentClient";

/// Fetches content from the API.
///
/// Every public operation is total: failures are logged, recorded in
/// [`Messages`] and replaced by a fallback value.
pub struct ContentClient<T> {
    transport: T,
    posts_per_page: u32,
    author_placeholder: String,
    page_not_found: String,
    messages: Messages,
}

impl<T: Transport> ContentClient<T> {
    pub fn new(transport: T, config: &SiteConfig) -> Self {
        Self {
            transport,
            posts_per_page: config.posts_per_page.max(1),
            author_placeholder: config.author_placeholder.clone(),
            page_not_found: config.page_not_found.clone(),
            messages: Messages::new(),
        }
    }

    /// Record into an existing message log instead of a private one
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Rendered content of a static page, or the not-found text
    pub async fn fetch_page(&self, page_id: u64) -> String {
        let request = format!("pages/{}", page_id);
        match self.get_json::<ContentPage>(&request).await {
            Ok(page) => {
                self.log(format!("fetched page {}", page_id));
                page.content.rendered
            }
            Err(e) => self.handle_error(&request, e, self.page_not_found.clone()),
        }
    }

    /// Whether listing page `current_page + 1` has at least one post.
    ///
    /// Peeks at the first post of the next page by asking for a single-post
    /// page at that post's index.
    pub async fn has_next_page(&self, current_page: u32) -> bool {
        let peek = u64::from(current_page) * u64::from(self.posts_per_page) + 1;
        let request = format!("posts?page={}&per_page=1", peek);
        match self.get_json::<Vec<ContentPage>>(&request).await {
            Ok(posts) => {
                self.log(format!("peeked for post {}", peek));
                !posts.is_empty()
            }
            Err(e) => self.handle_error(&request, e, false),
        }
    }

    /// Posts on listing page `page`, each joined with its author's name,
    /// in the order the API returned them
    pub async fn fetch_posts(&self, page: u32) -> Vec<Post> {
        let request = format!("posts?page={}&per_page={}", page, self.posts_per_page);
        let pages = match self.get_json::<Vec<ContentPage>>(&request).await {
            Ok(pages) => {
                self.log(format!("fetched posts from page {}", page));
                pages
            }
            Err(e) => self.handle_error(&request, e, Vec::new()),
        };

        let lookups = distinct_authors(&pages)
            .into_iter()
            .map(|id| async move { (id, self.fetch_author(id).await.name) });
        let authors: HashMap<u64, String> = join_all(lookups).await.into_iter().collect();

        pages
            .iter()
            .map(|cp| {
                let author = authors
                    .get(&cp.author)
                    .map(String::as_str)
                    .unwrap_or(self.author_placeholder.as_str());
                Post::new(cp, author)
            })
            .collect()
    }

    /// Look up one user, substituting the placeholder user on failure
    pub async fn fetch_author(&self, author_id: u64) -> User {
        let request = format!("users/{}", author_id);
        match self.get_json::<User>(&request).await {
            Ok(user) => {
                self.log(format!("fetched username for user {}", author_id));
                user
            }
            Err(e) => self.handle_error(
                &request,
                e,
                User::placeholder(author_id, &self.author_placeholder),
            ),
        }
    }

    async fn get_json<D: DeserializeOwned>(&self, path: &str) -> Result<D, FetchError> {
        let value = self.transport.get(path).await?;
        serde_json::from_value(value).map_err(|source| FetchError::Decode {
            url: path.to_string(),
            source,
        })
    }

    fn handle_error<D>(&self, operation: &str, error: FetchError, fallback: D) -> D {
        tracing::warn!("{} failed: {}", operation, error);
        self.messages
            .error(format!("{}: {} failed: {}", COMPONENT, operation, error));
        fallback
    }

    fn log(&self, message: String) {
        tracing::debug!("{}", message);
        self.messages.add(format!("{}: {}", COMPONENT, message));
    }
}

/// Author ids in first-seen order, each once
fn distinct_authors(pages: &[ContentPage]) -> Vec<u64> {
    let mut seen = HashSet::new();
    pages
        .iter()
        .map(|p| p.author)
        .filter(|id| seen.insert(*id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeTransport;
    use crate::api::Level;
    use serde_json::{json, Value};

    fn post_json(id: u64, author: u64) -> Value {
        json!({
            "id": id,
            "author": author,
            "date": "2020-01-02T03:04:05",
            "title": { "rendered": format!("Post {}", id) },
            "content": { "rendered": format!("<p>body {}</p>", id) },
        })
    }

    fn user_json(id: u64, name: &str) -> Value {
        json!({ "id": id, "name": name })
    }

    fn client(transport: FakeTransport) -> ContentClient<FakeTransport> {
        ContentClient::new(transport, &SiteConfig::default())
    }

    #[tokio::test]
    async fn test_ten_posts_three_authors() {
        let authors = [1, 2, 3, 1, 1, 2, 3, 3, 2, 1];
        let posts: Vec<Value> = authors
            .iter()
            .enumerate()
            .map(|(i, a)| post_json(i as u64 + 1, *a))
            .collect();

        let transport = FakeTransport::new()
            .respond("posts?page=1&per_page=10", Value::Array(posts))
            .respond("users/1", user_json(1, "Ada"))
            .respond("users/2", user_json(2, "Grace"))
            .respond("users/3", user_json(3, "Linus"));
        let client = client(transport);

        let result = client.fetch_posts(1).await;

        assert_eq!(client.transport().calls_with_prefix("users/"), 3);
        assert_eq!(result.len(), 10);
        let titles: Vec<String> = (1..=10).map(|i| format!("Post {}", i)).collect();
        assert_eq!(
            result.iter().map(|p| p.title.clone()).collect::<Vec<_>>(),
            titles
        );
        let names = ["Ada", "Grace", "Linus"];
        for (post, author) in result.iter().zip(authors) {
            assert_eq!(post.author, names[author as usize - 1]);
        }
    }

    #[tokio::test]
    async fn test_pairing_ignores_completion_order() {
        // The first author answers last
        let transport = FakeTransport::new()
            .respond(
                "posts?page=2&per_page=10",
                json!([post_json(1, 10), post_json(2, 20), post_json(3, 10)]),
            )
            .respond("users/10", user_json(10, "Slow"))
            .respond("users/20", user_json(20, "Fast"))
            .delay("users/10", 50);
        let client = client(transport);

        let result = client.fetch_posts(2).await;

        let authors: Vec<&str> = result.iter().map(|p| p.author.as_str()).collect();
        assert_eq!(authors, vec!["Slow", "Fast", "Slow"]);
        assert_eq!(client.transport().calls_with_prefix("users/"), 2);
    }

    #[tokio::test]
    async fn test_failed_author_gets_placeholder() {
        let transport = FakeTransport::new()
            .respond(
                "posts?page=1&per_page=10",
                json!([post_json(1, 1), post_json(2, 2)]),
            )
            .respond("users/1", user_json(1, "Ada"))
            .fail("users/2");
        let client = client(transport);

        let result = client.fetch_posts(1).await;

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].author, "Ada");
        assert_eq!(result[1].author, "Unknown author");
        assert_eq!(result[1].title, "Post 2");

        let errors = client.messages().errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("users/2"));
    }

    #[tokio::test]
    async fn test_failed_listing_is_empty() {
        let transport = FakeTransport::new().fail("posts?page=4&per_page=10");
        let client = client(transport);

        assert!(client.fetch_posts(4).await.is_empty());
        assert_eq!(client.transport().calls_with_prefix("users/"), 0);
        assert_eq!(client.messages().errors().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_listing_is_empty() {
        let transport =
            FakeTransport::new().respond("posts?page=1&per_page=10", json!({ "code": "oops" }));
        let client = client(transport);

        assert!(client.fetch_posts(1).await.is_empty());
        assert!(client.messages().errors()[0].contains("decode"));
    }

    #[tokio::test]
    async fn test_per_page_comes_from_config() {
        let config = SiteConfig {
            posts_per_page: 3,
            ..Default::default()
        };
        let transport = FakeTransport::new().respond("posts?page=1&per_page=3", json!([]));
        let client = ContentClient::new(transport, &config);

        assert!(client.fetch_posts(1).await.is_empty());
        assert_eq!(client.transport().calls(), vec!["posts?page=1&per_page=3"]);
    }

    #[tokio::test]
    async fn test_has_next_page_peeks_next_post() {
        let transport =
            FakeTransport::new().respond("posts?page=21&per_page=1", json!([post_json(21, 1)]));
        let client = client(transport);

        assert!(client.has_next_page(2).await);
        assert_eq!(client.transport().calls(), vec!["posts?page=21&per_page=1"]);
    }

    #[tokio::test]
    async fn test_has_next_page_false_on_empty_or_failure() {
        let transport = FakeTransport::new()
            .respond("posts?page=11&per_page=1", json!([]))
            .fail("posts?page=21&per_page=1");
        let client = client(transport);

        assert!(!client.has_next_page(1).await);
        assert!(!client.has_next_page(2).await);
        // Unknown path is a not-found
        assert!(!client.has_next_page(3).await);
    }

    #[tokio::test]
    async fn test_fetch_page() {
        let transport = FakeTransport::new()
            .respond(
                "pages/12",
                json!({ "id": 12, "content": { "rendered": "<p>About</p>" } }),
            )
            .fail("pages/13");
        let client = client(transport);

        assert_eq!(client.fetch_page(12).await, "<p>About</p>");
        assert_eq!(client.fetch_page(13).await, "Page content not found");
        assert_eq!(client.fetch_page(14).await, "Page content not found");
    }

    #[tokio::test]
    async fn test_successes_are_logged_as_info() {
        let transport = FakeTransport::new().respond("users/5", user_json(5, "Ken"));
        let messages = Messages::new();
        let client = client(transport).with_messages(messages.clone());

        assert_eq!(client.fetch_author(5).await.name, "Ken");
        let entries = messages.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, Level::Info);
        assert_eq!(entries[0].text, "ContentClient: fetched username for user 5");
    }

    #[test]
    fn test_distinct_authors_first_seen_order() {
        let pages: Vec<ContentPage> = [3, 1, 3, 2, 1]
            .into_iter()
            .map(|author| ContentPage {
                author,
                ..Default::default()
            })
            .collect();
        assert_eq!(distinct_authors(&pages), vec![3, 1, 2]);
    }
}
