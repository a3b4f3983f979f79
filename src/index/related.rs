//! Related post scoring

use std::collections::HashSet;

use crate::content::Post;

/// Score for sharing a category
pub const CATEGORY_WEIGHT: usize = 3;

/// Score for each shared tag
pub const TAG_WEIGHT: usize = 2;

/// Relevance of `candidate` to `current`
///
/// Categories count only when both posts have one and they are equal.
/// Tags are compared as sets.
pub fn score(current: &Post, candidate: &Post) -> usize {
    let mut score = 0;

    if let (Some(a), Some(b)) = (&current.metadata.category, &candidate.metadata.category) {
        if !a.is_empty() && a == b {
            score += CATEGORY_WEIGHT;
        }
    }

    let current_tags: HashSet<&str> = current.metadata.tags.iter().map(String::as_str).collect();
    let shared = candidate
        .metadata
        .tags
        .iter()
        .map(String::as_str)
        .collect::<HashSet<_>>()
        .intersection(&current_tags)
        .count();
    score += shared * TAG_WEIGHT;

    score
}

/// Posts from `posts` related to the one with `slug`, best first
///
/// `posts` must already be in listing order; equal scores keep it.
/// Returns nothing when `slug` is not among `posts`.
pub fn related<'a>(posts: &'a [Post], slug: &str, limit: usize) -> Vec<&'a Post> {
    let Some(current) = posts.iter().find(|p| p.slug == slug) else {
        return Vec::new();
    };

    let mut scored: Vec<(usize, &Post)> = posts
        .iter()
        .filter(|p| p.slug != slug)
        .map(|p| (score(current, p), p))
        .filter(|(score, _)| *score > 0)
        .collect();

    // Stable sort keeps listing order among equal scores
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored.into_iter().take(limit).map(|(_, p)| p).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ParseOptions;

    fn post(slug: &str, category: Option<&str>, tags: &[&str]) -> Post {
        let mut source = String::from("---\ntitle: t\ndate: 2024-01-01\n");
        if let Some(category) = category {
            source.push_str(&format!("category: \"{}\"\n", category));
        }
        source.push_str(&format!("tags: [{}]\n---\nbody\n", tags.join(", ")));
        Post::parse(slug, &source, &ParseOptions::default()).unwrap()
    }

    fn slugs(posts: &[&Post]) -> Vec<String> {
        posts.iter().map(|p| p.slug.clone()).collect()
    }

    #[test]
    fn test_score_category_and_tags() {
        let p1 = post("p1", Some("tech"), &["go", "rust"]);
        let p2 = post("p2", Some("tech"), &["go"]);
        assert_eq!(score(&p1, &p2), 5);
        assert_eq!(score(&p2, &p1), 5);
    }

    #[test]
    fn test_score_requires_both_categories() {
        let a = post("a", None, &[]);
        let b = post("b", None, &[]);
        assert_eq!(score(&a, &b), 0);

        let c = post("c", Some(""), &[]);
        let d = post("d", Some(""), &[]);
        assert_eq!(score(&c, &d), 0);
    }

    #[test]
    fn test_score_duplicate_tags_count_once() {
        let a = post("a", None, &["go", "go"]);
        let b = post("b", None, &["go", "go", "go"]);
        assert_eq!(score(&a, &b), TAG_WEIGHT);
    }

    #[test]
    fn test_related_orders_by_score() {
        let posts = vec![
            post("p1", Some("tech"), &["go", "rust"]),
            post("tags-only", Some("life"), &["go", "rust"]),
            post("unrelated", Some("life"), &["cooking"]),
            post("p2", Some("tech"), &["go"]),
        ];

        let result = related(&posts, "p1", 5);
        assert_eq!(slugs(&result), vec!["p2", "tags-only"]);
    }

    #[test]
    fn test_related_excludes_self_and_respects_limit() {
        let posts = vec![
            post("a", Some("tech"), &[]),
            post("b", Some("tech"), &[]),
            post("c", Some("tech"), &[]),
            post("d", Some("tech"), &[]),
        ];

        let result = related(&posts, "b", 2);
        assert_eq!(slugs(&result), vec!["a", "c"]);

        assert!(related(&posts, "b", 0).is_empty());
    }

    #[test]
    fn test_related_unknown_slug() {
        let posts = vec![post("a", Some("tech"), &[])];
        assert!(related(&posts, "missing", 3).is_empty());
    }
}
