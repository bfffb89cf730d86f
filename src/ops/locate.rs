//! Report which descriptor a directory resolves to, and its parent's.

use std::path::{Path, PathBuf};

use crate::core::descriptor::DescriptorKind;
use crate::core::locator::{is_build_project_file, DescriptorLocator, FsLocator};
use crate::util::fs::normalize_path;

/// Descriptors found for one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    /// The directory that was probed
    pub dir: PathBuf,
    /// The descriptor model synthesis would use, if any
    pub descriptor: Option<DescriptorKind>,
    /// A build project file in the directory, which takes precedence when
    /// the directory is read as a parent
    pub build_project: Option<PathBuf>,
    /// The descriptor found one directory up
    pub parent: Option<PathBuf>,
}

impl Located {
    /// Human-readable summary, one item per line.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        match &self.descriptor {
            Some(kind) => out.push_str(&format!("descriptor: {}\n", kind)),
            None => out.push_str("descriptor: none\n"),
        }
        if let Some(pom) = &self.build_project {
            out.push_str(&format!("build project: {}\n", pom.display()));
        }
        match &self.parent {
            Some(parent) => out.push_str(&format!("parent: {}\n", parent.display())),
            None => out.push_str("parent: none\n"),
        }
        out
    }
}

/// Probe `dir` and its parent directory.
pub fn locate(dir: &Path) -> Located {
    let dir = normalize_path(dir);
    let locator = FsLocator::new();
    let build_project = locator.locate(&dir).filter(|p| is_build_project_file(p));

    Located {
        descriptor: DescriptorKind::probe(&dir),
        build_project,
        parent: locator.locate_parent_descriptor(&dir),
        dir,
    }
}
