//! Errors raised while loading a single post

use std::path::PathBuf;
use thiserror::Error;

/// Why a post could not be loaded
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid slug {0:?}")]
    InvalidSlug(String),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed front-matter in {path:?}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },
}

/// Front-matter header that could not be deserialized
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}
