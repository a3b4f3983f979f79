//! Slug helpers

/// Turn a post title into a URL-safe slug
///
/// # Examples
/// ```ignore
/// generate_slug("Hello, World!") // -> "hello-world"
/// ```
pub fn generate_slug(title: &str) -> String {
    ::slug::slugify(title.trim())
}

/// Whether `slug` names a file directly inside the content directory
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slug != "." && slug != ".." && !slug.contains(['/', '\\', '\0'])
}
