//! Tag and category counts

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use crate::content::Post;

/// A tag or category with the number of posts carrying it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCount {
    pub name: String,
    pub count: usize,
}

/// Count tags over `posts`, most used first, ties by name
///
/// A tag repeated inside one post counts once for that post.
pub fn count_tags(posts: &[Post]) -> Vec<TermCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for post in posts {
        let unique: HashSet<&str> = post.metadata.tags.iter().map(String::as_str).collect();
        for tag in unique {
            *counts.entry(tag).or_insert(0) += 1;
        }
    }

    into_sorted(counts)
}

/// Count categories over `posts`, most used first, ties by name
pub fn count_categories(posts: &[Post]) -> Vec<TermCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for post in posts {
        if let Some(category) = post.metadata.category.as_deref() {
            *counts.entry(category).or_insert(0) += 1;
        }
    }

    into_sorted(counts)
}

fn into_sorted(counts: HashMap<&str, usize>) -> Vec<TermCount> {
    let mut terms: Vec<TermCount> = counts
        .into_iter()
        .map(|(name, count)| TermCount {
            name: name.to_string(),
            count,
        })
        .collect();
    terms.sort_by(|a, b| (Reverse(a.count), &a.name).cmp(&(Reverse(b.count), &b.name)));
    terms
}
