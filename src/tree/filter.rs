//! Include/exclude filtering for tree entries

use super::config::WalkerConfig;

/// Pattern-based visibility filter.
///
/// Patterns come in two shapes: a bare name (no `/`) matches any entry with
/// that basename, at any depth; a pattern containing `/` matches exactly one
/// relative path and everything below it. Exclude patterns always win over
/// include patterns. Matching is case-sensitive and exact, with no globbing.
#[derive(Debug, Default)]
pub struct PathFilter {
    exclude: Vec<String>,
    include: Vec<String>,
    skip_hidden: bool,
}

impl PathFilter {
    /// Build a filter from the run configuration.
    ///
    /// The literal exclude pattern `.` is the hidden-entry switch, not an
    /// ordinary token, so it is lifted out here.
    pub fn new(config: &WalkerConfig) -> Self {
        let skip_hidden = config.exclude_patterns.iter().any(|p| p == ".");
        Self {
            exclude: config
                .exclude_patterns
                .iter()
                .filter(|p| p.as_str() != ".")
                .cloned()
                .collect(),
            include: config.include_patterns.clone(),
            skip_hidden,
        }
    }

    /// Decide whether an entry is visible.
    ///
    /// `name` is the entry's basename; `rel_path` its forward-slash path
    /// relative to the traversal root.
    pub fn is_included(&self, name: &str, rel_path: &str) -> bool {
        if self.skip_hidden && name.starts_with('.') {
            return false;
        }

        for pattern in &self.exclude {
            let rejected = if pattern.contains('/') {
                in_subtree(rel_path, pattern)
            } else {
                name == pattern
            };
            if rejected {
                return false;
            }
        }

        if self.include.is_empty() {
            return true;
        }

        // Visible when the entry is an included target, lies inside one, or
        // is an ancestor directory on the way down to a deeper match.
        self.include
            .iter()
            .any(|pattern| in_subtree(rel_path, pattern) || is_ancestor_of(rel_path, pattern))
    }
}

/// True when `rel_path` is `pattern` itself or lies under it.
fn in_subtree(rel_path: &str, pattern: &str) -> bool {
    rel_path == pattern
        || rel_path
            .strip_prefix(pattern)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// True when `rel_path` names a strict ancestor directory of `pattern`.
fn is_ancestor_of(rel_path: &str, pattern: &str) -> bool {
    pattern
        .strip_prefix(rel_path)
        .is_some_and(|rest| rest.starts_with('/'))
}
