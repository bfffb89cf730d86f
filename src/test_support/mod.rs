//! Test utilities for pomless unit tests.
//!
//! [`ProjectTree`] writes descriptor trees into a temporary directory;
//! [`MockLocator`] answers parent lookups from a fixed table and records
//! every directory it was asked about.
//!
//! # Example
//!
//! ```rust,ignore
//! use pomless::test_support::{ProjectTree, ROOT_POM};
//!
//! #[test]
//! fn test_example() {
//!     let tree = ProjectTree::new();
//!     tree.write("pom.xml", ROOT_POM);
//!     let bundle = tree.manifest("b", "Bundle-SymbolicName: b\nBundle-Version: 1\n");
//!     // Synthesize `bundle`...
//! }
//! ```

pub mod fixtures;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use crate::core::descriptor::MANIFEST_PATH;
use crate::core::locator::DescriptorLocator;
use crate::util::fs::normalize_path;

// Re-export fixtures for convenience
pub use fixtures::*;

/// Root build project declaring `org.example:root:1.0.0-SNAPSHOT`.
pub const ROOT_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>org.example</groupId>
  <artifactId>root</artifactId>
  <version>1.0.0-SNAPSHOT</version>
  <packaging>pom</packaging>
</project>
"#;

/// A project tree in a temporary directory, removed on drop.
///
/// Paths handed out are canonical, matching what the synthesizer reports.
pub struct ProjectTree {
    _dir: TempDir,
    root: PathBuf,
}

impl ProjectTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let root = normalize_path(dir.path());
        ProjectTree { _dir: dir, root }
    }

    /// Root directory of the tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of `relative` inside the tree.
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Write a file, creating parent directories.
    pub fn write(&self, relative: impl AsRef<Path>, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create dirs");
        }
        fs::write(&path, content).expect("failed to write file");
        path
    }

    /// Write a bundle manifest for the project at `project`; returns the
    /// project directory.
    pub fn manifest(&self, project: impl AsRef<Path>, content: &str) -> PathBuf {
        let project = self.path(project);
        self.write(project.join(MANIFEST_PATH), content);
        project
    }
}

impl Default for ProjectTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Locator backed by a fixed directory-to-descriptor table.
#[derive(Debug, Clone, Default)]
pub struct MockLocator {
    descriptors: HashMap<PathBuf, PathBuf>,
    calls: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockLocator {
    /// Create a locator that finds nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `descriptor` when asked about `dir`.
    pub fn with(mut self, dir: impl Into<PathBuf>, descriptor: impl Into<PathBuf>) -> Self {
        self.descriptors.insert(dir.into(), descriptor.into());
        self
    }

    /// Handle to the directories this locator has been asked about.
    pub fn calls(&self) -> Arc<Mutex<Vec<PathBuf>>> {
        Arc::clone(&self.calls)
    }
}

impl DescriptorLocator for MockLocator {
    fn locate(&self, dir: &Path) -> Option<PathBuf> {
        self.calls.lock().expect("poisoned").push(dir.to_path_buf());
        self.descriptors.get(dir).cloned()
    }
}
