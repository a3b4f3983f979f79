//! Search published posts

use anyhow::Result;

use super::{print_json, print_posts};
use crate::Blog;

/// Print posts matching `query`
pub fn run(blog: &Blog, query: &str, json: bool) -> Result<()> {
    let posts = blog.index().search(query);
    print_posts(&format!("Matches for {:?}", query), &posts, json)
}

/// Print the search index as JSON
pub fn dump_index(blog: &Blog) -> Result<()> {
    print_json(&blog.index().search_index())
}
