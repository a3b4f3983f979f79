//! Plain-text search over listed posts

use serde::{Deserialize, Serialize};

use crate::content::{markdown, Post};

/// Searchable summary of one post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub slug: String,
    pub title: String,
    /// Body with markdown markup removed
    pub content: String,
    pub tags: Vec<String>,
    pub category: Option<String>,
}

impl From<&Post> for SearchEntry {
    fn from(post: &Post) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.metadata.title.clone(),
            content: markdown::plain_text(&post.content),
            tags: post.metadata.tags.clone(),
            category: post.metadata.category.clone(),
        }
    }
}

/// Whether `post` mentions `needle` (already lowercased)
fn matches(post: &Post, needle: &str) -> bool {
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);

    contains(&post.metadata.title)
        || post.metadata.description.as_deref().is_some_and(contains)
        || post.metadata.tags.iter().any(|t| contains(t))
        || contains(&markdown::plain_text(&post.content))
}

/// Posts whose title, description, tags or body contain `query`,
/// ignoring case. Keeps the order of `posts`.
pub fn search<'a>(posts: &'a [Post], query: &str) -> Vec<&'a Post> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    posts.iter().filter(|p| matches(p, &needle)).collect()
}
