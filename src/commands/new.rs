//! Create a new post

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::content::{loader, FrontMatter};
use crate::helpers;
use crate::Blog;

/// Scaffold `<posts_dir>/<slug>.md` for a new post and return its path
pub fn create_post(blog: &Blog, title: &str, draft: bool) -> Result<PathBuf> {
    let slug = helpers::generate_slug(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from title {:?}", title);
    }

    fs::create_dir_all(&blog.posts_dir)
        .with_context(|| format!("Failed to create {:?}", blog.posts_dir))?;

    let file_path = loader::post_path(&blog.posts_dir, &slug);

    let fm = FrontMatter {
        title: Some(title.to_string()),
        date: Some(helpers::now_datetime()),
        draft,
        ..Default::default()
    };
    let content = format!("---\n{}---\n\n", serde_yaml::to_string(&fm)?);

    // Never overwrite an existing post
    let mut file = match fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&file_path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            anyhow::bail!("File already exists: {:?}", file_path);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to create {:?}", file_path));
        }
    };
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write {:?}", file_path))?;
    tracing::info!("Created post {:?}", file_path);

    Ok(file_path)
}

/// Run the new command
pub fn run(blog: &Blog, title: &str, draft: bool) -> Result<()> {
    let path = create_post(blog, title, draft)?;
    println!("Created: {:?}", path);
    Ok(())
}
