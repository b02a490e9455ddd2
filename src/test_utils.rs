//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// Files and directories are created on demand; the tree is removed when
/// dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file with the given content, creating parent directories
    /// as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create an empty directory, including parents.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
