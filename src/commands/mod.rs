//! CLI commands over a [`Blog`](crate::Blog)

pub mod list;
pub mod new;
pub mod related;
pub mod search;
pub mod show;

use anyhow::Result;
use serde::Serialize;

use crate::content::Post;

/// Print `value` as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One-line summary of a post for listings
pub(crate) fn post_line(post: &Post) -> String {
    let mut line = format!(
        "  {} - {} [{}]",
        post.metadata.date, post.metadata.title, post.slug
    );
    if !post.metadata.tags.is_empty() {
        line.push_str(&format!(" #{}", post.metadata.tags.join(" #")));
    }
    line
}

/// Print a titled list of posts, or the posts as JSON
pub(crate) fn print_posts(heading: &str, posts: &[Post], json: bool) -> Result<()> {
    if json {
        return print_json(posts);
    }

    println!("{} ({}):", heading, posts.len());
    for post in posts {
        println!("{}", post_line(post));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ParseOptions;

    #[test]
    fn test_post_line() {
        let post = Post::parse(
            "hello",
            "---\ntitle: Hello\ndate: 2024-01-15\ntags: [rust, blog]\n---\n",
            &ParseOptions::default(),
        )
        .unwrap();
        assert_eq!(post_line(&post), "  2024-01-15 - Hello [hello] #rust #blog");
    }

    #[test]
    fn test_post_line_without_tags() {
        let post = Post::parse(
            "plain",
            "---\ntitle: Plain\ndate: 2024-01-15\n---\n",
            &ParseOptions::default(),
        )
        .unwrap();
        assert_eq!(post_line(&post), "  2024-01-15 - Plain [plain]");
    }
}
