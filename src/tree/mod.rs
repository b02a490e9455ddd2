//! Directory tree walking logic
//!
//! This module decides which filesystem entries are visible and in what
//! order. `TreeWalker` performs one synchronous depth-first pass over the
//! root, applying `PathFilter` at each level and handing surviving entries
//! to a `TreeOutput` sink, so rendering stays separate from traversal.

mod config;
mod filter;
mod utils;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use filter::PathFilter;
pub use utils::relative_path;
pub use walker::{TreeOutput, TreeWalker};
