//! Content loader - reads post sources from the content directory

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{ContentError, ParseOptions, Post};
use crate::helpers::is_valid_slug;

/// Extension of post source files
const POST_EXTENSION: &str = "md";

/// List slugs of the `*.md` files directly inside `dir`, sorted
///
/// A missing directory holds no posts.
pub fn list_slugs(dir: &Path) -> Vec<String> {
    if !dir.is_dir() {
        tracing::debug!("Content directory {:?} not found", dir);
        return Vec::new();
    }

    let mut slugs: Vec<String> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Failed to read entry in {:?}: {}", dir, e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_markdown_file(entry.path()))
        .filter_map(|entry| {
            entry
                .path()
                .file_stem()
                .and_then(|s| s.to_str())
                .map(str::to_string)
        })
        .collect();

    // Directory order is filesystem-dependent
    slugs.sort();
    slugs
}

/// Path of the source file for `slug`
pub fn post_path(dir: &Path, slug: &str) -> PathBuf {
    dir.join(format!("{}.{}", slug, POST_EXTENSION))
}

/// Read and parse the post stored as `<dir>/<slug>.md`
pub fn read_post(dir: &Path, slug: &str, options: &ParseOptions) -> Result<Post, ContentError> {
    if !is_valid_slug(slug) {
        return Err(ContentError::InvalidSlug(slug.to_string()));
    }

    let path = post_path(dir, slug);
    let source = fs::read_to_string(&path).map_err(|source| ContentError::Io {
        path: path.clone(),
        source,
    })?;

    Post::parse(slug, &source, options)
        .map_err(|source| ContentError::FrontMatter { path, source })
}

/// Check if a file is a post source file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == POST_EXTENSION)
        .unwrap_or(false)
}
