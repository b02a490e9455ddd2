//! Configuration types for tree walking

/// Configuration for a single tree run.
///
/// Built once from the command line and never mutated afterwards; the
/// walker reads it for the whole pass.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Patterns rejected from the output. Bare names match any entry with
    /// that basename; patterns containing `/` match one relative path and
    /// its subtree. The literal `.` hides dot-entries.
    pub exclude_patterns: Vec<String>,
    /// When non-empty, restricts output to matching paths, their subtrees,
    /// and the ancestor directories leading down to them.
    pub include_patterns: Vec<String>,
    /// Levels below the root to descend; `None` = unlimited, `Some(0)`
    /// prints only the root line.
    pub max_depth: Option<usize>,
    /// Annotate entries with file / recursive directory sizes.
    pub show_sizes: bool,
}
