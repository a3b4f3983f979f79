//! Content index - query operations over a directory of posts
//!
//! Every query re-reads the content directory. Nothing is cached between
//! calls, so results always reflect what is on disk and concurrent callers
//! share no state. At blog scale this is cheaper than keeping a cache
//! coherent.

mod related;
mod search;
mod taxonomy;

use std::cmp::Reverse;
use std::path::{Path, PathBuf};

pub use related::{score as related_score, CATEGORY_WEIGHT, TAG_WEIGHT};
pub use search::SearchEntry;
pub use taxonomy::TermCount;

use crate::content::{loader, ContentError, ParseOptions, Post};

/// Read-only index over the `<slug>.md` files of one directory
#[derive(Debug, Clone)]
pub struct ContentIndex {
    posts_dir: PathBuf,
    options: ParseOptions,
}

impl ContentIndex {
    /// Create an index over `posts_dir` with default parse options
    pub fn new<P: AsRef<Path>>(posts_dir: P) -> Self {
        Self::with_options(posts_dir, ParseOptions::default())
    }

    /// Create an index with custom parse options
    pub fn with_options<P: AsRef<Path>>(posts_dir: P, options: ParseOptions) -> Self {
        Self {
            posts_dir: posts_dir.as_ref().to_path_buf(),
            options,
        }
    }

    /// Directory this index reads from
    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    /// Slugs of every source file, drafts and unparseable files included
    pub fn list_slugs(&self) -> Vec<String> {
        loader::list_slugs(&self.posts_dir)
    }

    /// Load one post, reporting why it could not be loaded
    pub fn load_post(&self, slug: &str) -> Result<Post, ContentError> {
        loader::read_post(&self.posts_dir, slug, &self.options)
    }

    /// Load one post; drafts are returned too
    ///
    /// Failures are logged and reported as `None`.
    pub fn get_post(&self, slug: &str) -> Option<Post> {
        match self.load_post(slug) {
            Ok(post) => Some(post),
            Err(e) => {
                tracing::warn!("Failed to load post {:?}: {}", slug, e);
                None
            }
        }
    }

    /// All published posts, newest first
    ///
    /// Posts with equal dates are ordered by slug; posts whose date does
    /// not parse come last.
    pub fn list_posts(&self) -> Vec<Post> {
        let slugs = self.list_slugs();
        let mut posts: Vec<Post> = slugs
            .iter()
            .filter_map(|slug| self.get_post(slug))
            .filter(|post| !post.is_draft())
            .collect();

        posts.sort_by_cached_key(|p| (Reverse(p.published_at()), p.slug.clone()));

        tracing::debug!(
            "Listed {} of {} posts in {:?}",
            posts.len(),
            slugs.len(),
            self.posts_dir
        );
        posts
    }

    /// The `limit` newest posts
    pub fn list_recent(&self, limit: usize) -> Vec<Post> {
        let mut posts = self.list_posts();
        posts.truncate(limit);
        posts
    }

    /// Published posts tagged exactly `tag`
    pub fn list_by_tag(&self, tag: &str) -> Vec<Post> {
        self.list_posts()
            .into_iter()
            .filter(|p| p.has_tag(tag))
            .collect()
    }

    /// Published posts in exactly `category`
    pub fn list_by_category(&self, category: &str) -> Vec<Post> {
        self.list_posts()
            .into_iter()
            .filter(|p| p.in_category(category))
            .collect()
    }

    /// Tag usage over published posts, most used first
    pub fn aggregate_tags(&self) -> Vec<TermCount> {
        taxonomy::count_tags(&self.list_posts())
    }

    /// Category usage over published posts, most used first
    pub fn aggregate_categories(&self) -> Vec<TermCount> {
        taxonomy::count_categories(&self.list_posts())
    }

    /// Up to `limit` published posts related to `slug`, best match first
    ///
    /// Empty when `slug` is missing or a draft.
    pub fn related_posts(&self, slug: &str, limit: usize) -> Vec<Post> {
        let posts = self.list_posts();
        related::related(&posts, slug, limit)
            .into_iter()
            .cloned()
            .collect()
    }

    /// One search entry per published post, newest first
    pub fn search_index(&self) -> Vec<SearchEntry> {
        self.list_posts().iter().map(SearchEntry::from).collect()
    }

    /// Published posts matching `query`, newest first
    pub fn search(&self, query: &str) -> Vec<Post> {
        let posts = self.list_posts();
        search::search(&posts, query).into_iter().cloned().collect()
    }
}
