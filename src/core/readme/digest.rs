use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::feed::types::ParsedEntry;

pub const MAX_POSTS: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error("entry \"{title}\" has no publication date")]
    MissingDate { title: String },
    #[error("entry \"{title}\" has an unparseable publication date: {source}")]
    InvalidDate {
        title: String,
        source: chrono::ParseError,
    },
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BlogPost {
    pub title: String,
    pub link: String,
    pub published_on: String,
}

pub fn project_entries(entries: &[ParsedEntry]) -> Result<Vec<BlogPost>, DigestError> {
    entries
        .iter()
        .take(MAX_POSTS)
        .map(post_from_entry)
        .collect()
}

pub fn render_post_list(posts: &[BlogPost]) -> String {
    posts
        .iter()
        .map(|post| {
            format!(
                "- [{}]({}) <sub><i>{}</i></sub>",
                post.title, post.link, post.published_on
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn post_from_entry(entry: &ParsedEntry) -> Result<BlogPost, DigestError> {
    let raw_date = entry
        .published_at
        .as_deref()
        .ok_or_else(|| DigestError::MissingDate {
            title: entry.title.clone(),
        })?;
    let published = DateTime::parse_from_rfc3339(raw_date).map_err(|source| {
        DigestError::InvalidDate {
            title: entry.title.clone(),
            source,
        }
    })?;
    let published_on = published
        .with_timezone(&Utc)
        .format("%Y-%m-%d")
        .to_string();

    Ok(BlogPost {
        title: entry.title.clone(),
        link: entry.link.clone(),
        published_on,
    })
}
