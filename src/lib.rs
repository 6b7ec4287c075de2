//! Stump - a tree command that dumps file contents alongside the structure

pub mod content;
pub mod exclude;
pub mod output;
pub mod walker;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use content::{ContentSummary, summarize_file};
pub use exclude::{DEFAULT_EXCLUDES, ExcludeSet};
pub use output::{create_output_file, default_output_path};
pub use walker::{SortOrder, TreeWalker, WalkSummary, WalkerConfig};
