//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::markdown::DEFAULT_WORDS_PER_MINUTE;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Site title, shown in CLI listings
    pub title: String,

    /// Directory holding `<slug>.md` files, relative to the base directory
    pub posts_dir: String,

    /// Title used when a post has none in its front-matter
    pub default_title: String,

    /// Reading speed used for `reading_time`
    pub words_per_minute: u32,

    /// Default size of the recent posts list
    pub recent_limit: usize,

    /// Default number of related posts
    pub related_limit: usize,

    /// Default number of tags shown by `list tags`
    pub top_tags: usize,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            posts_dir: "posts".to_string(),
            default_title: "Untitled".to_string(),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            recent_limit: 5,
            related_limit: 3,
            top_tags: 10,
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;

        // An empty file deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: BlogConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {:?}", path))?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BlogConfig::default();
        assert_eq!(config.posts_dir, "posts");
        assert_eq!(config.default_title, "Untitled");
        assert_eq!(config.words_per_minute, 200);
        assert_eq!(config.recent_limit, 5);
        assert_eq!(config.related_limit, 3);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
posts_dir: content/posts
words_per_minute: 250
"#;
        let config: BlogConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.posts_dir, "content/posts");
        assert_eq!(config.words_per_minute, 250);
        // Unset keys keep their defaults
        assert_eq!(config.related_limit, 3);
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "").unwrap();

        let config = BlogConfig::load(&path).unwrap();
        assert_eq!(config.title, "Blog");
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "words_per_minute: [not, a, number]\n").unwrap();

        assert!(BlogConfig::load(&path).is_err());
    }
}
