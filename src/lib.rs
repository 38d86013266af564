pub mod core;

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::core::feed::fetcher::{fetch_feed, FetchError};
use crate::core::feed::parser::{parse_feed_bytes, FeedParseError};
use crate::core::readme::clock::beijing_timestamp;
use crate::core::readme::digest::{project_entries, render_post_list, DigestError};
use crate::core::readme::{template, write_readme};

pub const FEED_URL: &str = "https://hengxin666.github.io/HXLoLi/blog/rss.xml";
pub const README_PATH: &str = "README.md";

#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    #[error("feed fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("feed parse failed: {0}")]
    Parse(#[from] FeedParseError),
    #[error("entry projection failed: {0}")]
    Digest(#[from] DigestError),
    #[error("readme write failed: {0}")]
    Write(#[from] std::io::Error),
}

pub async fn update_readme(
    client: &reqwest::Client,
    feed_url: &str,
    readme_path: &Path,
    now: DateTime<Utc>,
) -> Result<(), UpdateError> {
    let raw = fetch_feed(client, feed_url).await?;
    let feed = parse_feed_bytes(&raw)?;
    let posts = project_entries(&feed.entries)?;
    let document = template::render(&render_post_list(&posts), &beijing_timestamp(now));
    write_readme(readme_path, &document)?;

    info!(
        path = %readme_path.display(),
        posts = posts.len(),
        feed = %feed.title,
        "readme regenerated"
    );
    Ok(())
}
