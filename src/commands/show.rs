//! Show a single post

use anyhow::Result;

use super::print_json;
use crate::content::{markdown, Post};
use crate::Blog;

/// Print one post, drafts included
pub fn run(blog: &Blog, slug: &str, html: bool, json: bool) -> Result<()> {
    let post = blog
        .index()
        .load_post(slug)
        .map_err(|e| anyhow::anyhow!("Post {:?} not found: {}", slug, e))?;

    if json {
        return print_json(&post);
    }

    print!("{}", describe(&post));
    println!();
    if html {
        print!("{}", markdown::render_html(&post.content));
    } else {
        print!("{}", post.content);
    }

    Ok(())
}

/// Metadata header printed above the body
fn describe(post: &Post) -> String {
    let meta = &post.metadata;
    let mut out = format!("{}\n", meta.title);
    out.push_str(&format!("{} · {} min read\n", meta.date, meta.reading_time));
    if meta.draft {
        out.push_str("(draft)\n");
    }
    if let Some(category) = &meta.category {
        out.push_str(&format!("Category: {}\n", category));
    }
    if !meta.tags.is_empty() {
        out.push_str(&format!("Tags: {}\n", meta.tags.join(", ")));
    }
    if let Some(description) = &meta.description {
        out.push_str(&format!("\n{}\n", description));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ParseOptions;

    #[test]
    fn test_describe() {
        let source = "---\ntitle: Hello\ndate: 2024-01-15\ncategory: tech\n\
                      tags: [a, b]\ndraft: true\ndescription: Short.\n---\nbody\n";
        let post = Post::parse("p", source, &ParseOptions::default()).unwrap();

        assert_eq!(
            describe(&post),
            "Hello\n2024-01-15 · 1 min read\n(draft)\nCategory: tech\nTags: a, b\n\nShort.\n"
        );
    }

    #[test]
    fn test_show_missing_post() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        let err = run(&blog, "missing", false, false).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
