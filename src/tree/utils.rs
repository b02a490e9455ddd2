//! Shared helpers for tree walking

use std::fs;
use std::path::Path;

/// Canonicalize `path` and express it relative to the already-canonical
/// `root`, joined with forward slashes.
///
/// Returns `None` when the entry cannot be resolved (dangling symlink,
/// race-deleted file) or when its canonical form is the root or escapes it,
/// e.g. a symlink pointing back up the tree. Callers skip such entries.
pub fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let canonical = fs::canonicalize(path).ok()?;
    let rel = canonical.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}
