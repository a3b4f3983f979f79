//! CLI entry point for blog-index

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blog_index::commands;

#[derive(Parser)]
#[command(name = "blog-index")]
#[command(version)]
#[command(about = "Query the posts of a markdown blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List site content
    #[command(alias = "ls")]
    List {
        /// Type of content to list (posts, recent, tags, categories, slugs)
        #[arg(default_value = "posts")]
        r#type: String,

        /// Maximum number of entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// List posts with a tag
    Tag {
        /// Tag name, matched exactly
        name: String,
    },

    /// List posts in a category
    Category {
        /// Category name, matched exactly
        name: String,
    },

    /// Show a single post (drafts included)
    Show {
        slug: String,

        /// Render the body to HTML
        #[arg(long)]
        html: bool,
    },

    /// Show posts related to a post
    Related {
        slug: String,

        /// Maximum number of related posts
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Search published posts
    Search {
        /// Text to look for, case-insensitive
        #[arg(required_unless_present = "index")]
        query: Option<String>,

        /// Dump the whole search index as JSON instead
        #[arg(long, conflicts_with = "query")]
        index: bool,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Mark the post as a draft
        #[arg(long)]
        draft: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blog_index=debug,info"
    } else {
        "blog_index=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let json = cli.json;
    let open = || -> Result<blog_index::Blog> {
        let blog = blog_index::Blog::new(&base_dir)?;
        tracing::debug!("Reading posts from {:?}", blog.posts_dir);
        Ok(blog)
    };

    match cli.command {
        Commands::List { r#type, limit } => {
            commands::list::run(&open()?, &r#type, limit, json)?;
        }

        Commands::Tag { name } => {
            commands::list::by_tag(&open()?, &name, json)?;
        }

        Commands::Category { name } => {
            commands::list::by_category(&open()?, &name, json)?;
        }

        Commands::Show { slug, html } => {
            commands::show::run(&open()?, &slug, html, json)?;
        }

        Commands::Related { slug, limit } => {
            commands::related::run(&open()?, &slug, limit, json)?;
        }

        Commands::Search { query, index } => match query {
            Some(query) if !index => commands::search::run(&open()?, &query, json)?,
            _ => commands::search::dump_index(&open()?)?,
        },

        Commands::New { title, draft } => {
            tracing::info!("Creating new post with title: {}", title);
            commands::new::run(&open()?, &title, draft)?;
        }

        Commands::Version => {
            println!("blog-index version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
