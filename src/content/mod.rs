//! Content module - post sources, front-matter and markdown processing

mod error;
mod frontmatter;
pub mod loader;
pub mod markdown;
mod post;

pub use error::{ContentError, FrontMatterError};
pub use frontmatter::FrontMatter;
pub use post::{Metadata, ParseOptions, Post};
