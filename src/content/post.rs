//! Post model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::error::FrontMatterError;
use super::markdown::{self, DEFAULT_WORDS_PER_MINUTE};
use super::FrontMatter;
use crate::helpers;

/// Settings applied while turning a source file into a [`Post`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Title for posts whose front-matter has none
    pub default_title: String,

    /// Reading speed behind [`Metadata::reading_time`]
    pub words_per_minute: u32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            default_title: "Untitled".to_string(),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

/// Post metadata, front-matter with defaults applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub title: String,

    /// Publication date as written in the front-matter
    pub date: String,

    pub description: Option<String>,

    pub tags: Vec<String>,

    pub category: Option<String>,

    pub draft: bool,

    /// Minutes to read the body, rounded up
    pub reading_time: u32,
}

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Filename without the `.md` extension
    pub slug: String,

    pub metadata: Metadata,

    /// Raw markdown body, front-matter removed
    pub content: String,
}

impl Post {
    /// Parse a post from the full text of its source file
    pub fn parse(
        slug: &str,
        source: &str,
        options: &ParseOptions,
    ) -> Result<Self, FrontMatterError> {
        let (fm, body) = FrontMatter::parse(source)?;

        let metadata = Metadata {
            title: fm.title.unwrap_or_else(|| options.default_title.clone()),
            date: fm.date.unwrap_or_else(helpers::today),
            description: fm.description,
            tags: fm.tags,
            category: fm.category,
            draft: fm.draft,
            reading_time: markdown::reading_time(body, options.words_per_minute),
        };

        Ok(Self {
            slug: slug.to_string(),
            metadata,
            content: body.to_string(),
        })
    }

    /// Publication date as a sortable timestamp, `None` if unparseable
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        helpers::parse_date(&self.metadata.date)
    }

    /// Whether the post carries `tag` exactly
    pub fn has_tag(&self, tag: &str) -> bool {
        self.metadata.tags.iter().any(|t| t == tag)
    }

    /// Whether the post belongs to `category` exactly
    pub fn in_category(&self, category: &str) -> bool {
        self.metadata.category.as_deref() == Some(category)
    }

    pub fn is_draft(&self) -> bool {
        self.metadata.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_post() {
        let body = vec!["word"; 400].join(" ");
        let source = format!(
            "---\ntitle: X\ndate: 2024-01-01\ntags: [a, b]\n---\n{}\n",
            body
        );

        let post = Post::parse("x", &source, &ParseOptions::default()).unwrap();
        assert_eq!(post.slug, "x");
        assert_eq!(post.metadata.title, "X");
        assert_eq!(post.metadata.date, "2024-01-01");
        assert_eq!(post.metadata.tags, vec!["a", "b"]);
        assert_eq!(post.metadata.category, None);
        assert_eq!(post.metadata.description, None);
        assert!(!post.metadata.draft);
        assert_eq!(post.metadata.reading_time, 2);
        assert_eq!(post.content.trim_end(), body);
    }

    #[test]
    fn test_defaults_applied() {
        let post = Post::parse("bare", "Only a body here.", &ParseOptions::default()).unwrap();
        assert_eq!(post.metadata.title, "Untitled");
        assert_eq!(post.metadata.date, helpers::today());
        assert!(post.metadata.tags.is_empty());
        assert!(!post.is_draft());
        assert_eq!(post.metadata.reading_time, 1);
    }

    #[test]
    fn test_custom_parse_options() {
        let options = ParseOptions {
            default_title: "No title".to_string(),
            words_per_minute: 2,
        };
        let post = Post::parse("p", "one two three", &options).unwrap();
        assert_eq!(post.metadata.title, "No title");
        assert_eq!(post.metadata.reading_time, 2);
    }

    #[test]
    fn test_empty_body_reads_in_zero_minutes() {
        let source = "---\ntitle: Empty\n---\n";
        let post = Post::parse("empty", source, &ParseOptions::default()).unwrap();
        assert_eq!(post.metadata.reading_time, 0);
    }

    #[test]
    fn test_tag_and_category_match_exactly() {
        let source = "---\ntags: [Rust]\ncategory: Tech\n---\n";
        let post = Post::parse("p", source, &ParseOptions::default()).unwrap();
        assert!(post.has_tag("Rust"));
        assert!(!post.has_tag("rust"));
        assert!(!post.has_tag("Rus"));
        assert!(post.in_category("Tech"));
        assert!(!post.in_category("tech"));
    }

    #[test]
    fn test_serialized_field_names() {
        let source = "---\ntitle: T\ndate: 2024-01-01\n---\nhi\n";
        let post = Post::parse("p", source, &ParseOptions::default()).unwrap();
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["slug"], "p");
        assert_eq!(json["metadata"]["readingTime"], 1);
        assert_eq!(json["content"], "hi\n");
    }
}
