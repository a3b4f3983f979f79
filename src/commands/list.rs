//! List site content

use anyhow::Result;

use super::{print_json, print_posts};
use crate::index::TermCount;
use crate::Blog;

/// List site content by type
pub fn run(blog: &Blog, content_type: &str, limit: Option<usize>, json: bool) -> Result<()> {
    let index = blog.index();

    match content_type {
        "post" | "posts" => {
            let mut posts = index.list_posts();
            if let Some(limit) = limit {
                posts.truncate(limit);
            }
            print_posts("Posts", &posts, json)?;
        }
        "recent" => {
            let posts = index.list_recent(limit.unwrap_or(blog.config.recent_limit));
            print_posts("Recent posts", &posts, json)?;
        }
        "tag" | "tags" => {
            let mut tags = index.aggregate_tags();
            tags.truncate(limit.unwrap_or(blog.config.top_tags));
            print_terms("Tags", &tags, json)?;
        }
        "category" | "categories" => {
            let mut categories = index.aggregate_categories();
            if let Some(limit) = limit {
                categories.truncate(limit);
            }
            print_terms("Categories", &categories, json)?;
        }
        "slug" | "slugs" => {
            let slugs = index.list_slugs();
            if json {
                print_json(&slugs)?;
            } else {
                println!("Slugs ({}):", slugs.len());
                for slug in slugs {
                    println!("  {}", slug);
                }
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: posts, recent, tags, categories, slugs",
                content_type
            );
        }
    }

    Ok(())
}

/// List published posts with a tag
pub fn by_tag(blog: &Blog, tag: &str, json: bool) -> Result<()> {
    let posts = blog.index().list_by_tag(tag);
    if posts.is_empty() && !json {
        println!("No posts tagged {:?}", tag);
        return Ok(());
    }
    print_posts(&format!("Tag {}", tag), &posts, json)
}

/// List published posts in a category
pub fn by_category(blog: &Blog, category: &str, json: bool) -> Result<()> {
    let posts = blog.index().list_by_category(category);
    if posts.is_empty() && !json {
        println!("No posts in category {:?}", category);
        return Ok(());
    }
    print_posts(&format!("Category {}", category), &posts, json)
}

fn print_terms(heading: &str, terms: &[TermCount], json: bool) -> Result<()> {
    if json {
        return print_json(terms);
    }

    println!("{} ({}):", heading, terms.len());
    for term in terms {
        println!("  {} ({})", term.name, term.count);
    }
    Ok(())
}
