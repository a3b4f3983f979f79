//! Show posts related to a post

use anyhow::Result;
use serde::Serialize;

use super::{post_line, print_json};
use crate::content::Post;
use crate::index::related_score;
use crate::Blog;

#[derive(Serialize)]
struct Scored<'a> {
    score: usize,
    #[serde(flatten)]
    post: &'a Post,
}

/// Print up to `limit` posts related to `slug` with their scores
pub fn run(blog: &Blog, slug: &str, limit: Option<usize>, json: bool) -> Result<()> {
    let index = blog.index();
    let current = index
        .load_post(slug)
        .map_err(|e| anyhow::anyhow!("Post {:?} not found: {}", slug, e))?;

    // Empty for drafts
    let related = index.related_posts(slug, limit.unwrap_or(blog.config.related_limit));

    let scored: Vec<Scored> = related
        .iter()
        .map(|post| Scored {
            score: related_score(&current, post),
            post,
        })
        .collect();

    if json {
        return print_json(&scored);
    }

    println!("Related to {} ({}):", current.metadata.title, scored.len());
    for entry in &scored {
        println!("{} (score {})", post_line(entry.post), entry.score);
    }
    Ok(())
}
