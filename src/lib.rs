//! Canopy - a directory tree viewer with filters, sizes, and themes

pub mod output;
pub mod size;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use output::{OutputConfig, Theme, TreeFormatter};
pub use size::{dir_size, file_size, format_size};
pub use tree::{PathFilter, TreeOutput, TreeWalker, WalkerConfig};
