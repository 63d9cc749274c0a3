//! Print remote content fetched from the API

use anyhow::Result;

use crate::Pressline;

/// Print listing page `page` with author names, then whether more exist
pub async fn posts(site: &Pressline, page: u32) -> Result<()> {
    let client = site.client()?;

    let (posts, has_next) = tokio::join!(client.fetch_posts(page), client.has_next_page(page));

    println!("Posts on page {} ({}):", page, posts.len());
    for post in &posts {
        let date = post
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "----------".to_string());
        println!("  {} - {} by {}", date, post.title, post.author);
    }

    if has_next {
        println!("More posts on page {}", page + 1);
    }

    report_failures(client.messages().errors());
    Ok(())
}

/// Print a static page's rendered content
pub async fn page(site: &Pressline, page_id: u64) -> Result<()> {
    let client = site.client()?;
    println!("{}", client.fetch_page(page_id).await);
    report_failures(client.messages().errors());
    Ok(())
}

fn report_failures(errors: Vec<String>) {
    if !errors.is_empty() {
        eprintln!("{} request(s) failed:", errors.len());
        for error in errors {
            eprintln!("  {}", error);
        }
    }
}
