//! Small helpers shared by the content index and the CLI

mod date;
mod slugs;

pub use date::*;
pub use slugs::*;
