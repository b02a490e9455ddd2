//! TreeWalker - depth-first traversal driving a TreeOutput sink

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::size::{dir_size, file_size};

use super::config::WalkerConfig;
use super::filter::PathFilter;
use super::utils::relative_path;

/// Callback for walk output - receives one call per rendered line.
///
/// Separating the sink from the walker keeps traversal testable without
/// capturing stdout.
pub trait TreeOutput {
    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
        is_root: bool,
        size: Option<u64>,
    ) -> io::Result<()>;
}

/// One directory entry that survived listing, canonicalization, and
/// filtering. Lives only until its tree level has been rendered.
#[derive(Debug)]
struct Visited {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// Single-pass depth-first tree walker.
///
/// Walks synchronously, applying the filter at each level and emitting
/// entries in sorted order. Uses O(depth) memory: one level of entries is
/// held at a time, no full tree is built.
pub struct TreeWalker {
    config: WalkerConfig,
    filter: PathFilter,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        let filter = PathFilter::new(&config);
        Self { config, filter }
    }

    /// Walk `root`, emitting the root line (never filtered) and every
    /// visible entry below it through `output`.
    pub fn walk_streaming<O: TreeOutput>(&self, root: &Path, output: &mut O) -> io::Result<()> {
        let root = fs::canonicalize(root)?;
        let name = root
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());
        let size = self.entry_size(&root, root.is_dir());
        output.output_node(&name, root.is_dir(), false, "", true, size)?;
        self.walk_dir(&root, &root, "", 0, output)
    }

    fn walk_dir<O: TreeOutput>(
        &self,
        root: &Path,
        current: &Path,
        prefix: &str,
        depth: usize,
        output: &mut O,
    ) -> io::Result<()> {
        // Depth ceiling prunes the whole subtree: nothing below is visited
        if self.config.max_depth.is_some_and(|max| depth >= max) {
            return Ok(());
        }

        let entries = self.list_entries(root, current);
        for (i, entry) in entries.iter().enumerate() {
            let is_last = i + 1 == entries.len();
            let size = self.entry_size(&entry.path, entry.is_dir);
            output.output_node(&entry.name, entry.is_dir, is_last, prefix, false, size)?;

            if entry.is_dir {
                let child_prefix = if is_last {
                    format!("{}    ", prefix)
                } else {
                    format!("{}│   ", prefix)
                };
                self.walk_dir(root, &entry.path, &child_prefix, depth + 1, output)?;
            }
        }
        Ok(())
    }

    /// List, filter, and sort the immediate children of `current`.
    ///
    /// A failed listing (permissions, concurrent removal) yields an empty
    /// level; the run continues.
    fn list_entries(&self, root: &Path, current: &Path) -> Vec<Visited> {
        let Ok(reader) = fs::read_dir(current) else {
            return Vec::new();
        };

        let mut entries: Vec<Visited> = reader
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| self.visit(root, &entry))
            .collect();
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        entries
    }

    /// Resolve one directory entry; `None` means skipped, never an abort.
    fn visit(&self, root: &Path, entry: &fs::DirEntry) -> Option<Visited> {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        let rel_path = relative_path(root, &path)?;
        if !self.filter.is_included(&name, &rel_path) {
            return None;
        }
        Some(Visited {
            is_dir: path.is_dir(),
            name,
            path,
        })
    }

    fn entry_size(&self, path: &Path, is_dir: bool) -> Option<u64> {
        if !self.config.show_sizes {
            return None;
        }
        if is_dir {
            Some(dir_size(path))
        } else {
            file_size(path)
        }
    }
}
