//! blog-index: content index for a markdown blog
//!
//! Posts live as `<slug>.md` files with YAML (or TOML) front-matter. The
//! [`index::ContentIndex`] lists them by recency, tag and category, counts
//! tags and categories, and suggests related posts. Rendering is left to
//! the caller.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod index;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::ParseOptions;
use index::ContentIndex;

/// Name of the site configuration file in the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// A blog rooted at a base directory
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the post sources
    pub posts_dir: PathBuf,
}

impl Blog {
    /// Open a blog from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::BlogConfig::load(&config_path)?
        } else {
            config::BlogConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Open a blog with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::BlogConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let posts_dir = base_dir.join(&config.posts_dir);

        Self {
            config,
            base_dir,
            posts_dir,
        }
    }

    /// Content index over this blog's posts
    pub fn index(&self) -> ContentIndex {
        let options = ParseOptions {
            default_title: self.config.default_title.clone(),
            words_per_minute: self.config.words_per_minute,
        };
        ContentIndex::with_options(&self.posts_dir, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_new_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.posts_dir, dir.path().join("posts"));
        assert_eq!(blog.index().posts_dir(), dir.path().join("posts"));
    }

    #[test]
    fn test_new_with_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "posts_dir: content\ndefault_title: Sans titre\n",
        )
        .unwrap();
        fs::create_dir(dir.path().join("content")).unwrap();
        fs::write(dir.path().join("content").join("a.md"), "No front-matter.\n").unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.posts_dir, dir.path().join("content"));

        let post = blog.index().get_post("a").unwrap();
        assert_eq!(post.metadata.title, "Sans titre");
    }

    #[test]
    fn test_new_with_broken_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "related_limit: lots\n").unwrap();
        assert!(Blog::new(dir.path()).is_err());
    }
}
