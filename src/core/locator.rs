//! Descriptor location.
//!
//! The engine never looks for files on its own when walking up to a parent:
//! it asks a [`DescriptorLocator`], which is supplied when the synthesizer is
//! built. [`FsLocator`] is the filesystem implementation; any
//! `Fn(&Path) -> Option<PathBuf>` closure is a locator too.

use std::path::{Path, PathBuf};

use crate::core::descriptor::DescriptorKind;

/// Build project file name.
pub const BUILD_PROJECT_FILE: &str = "pom.xml";

/// Finds the descriptor of a directory.
pub trait DescriptorLocator {
    /// The descriptor physically located in `dir`, if any.
    fn locate(&self, dir: &Path) -> Option<PathBuf>;

    /// The descriptor of the directory directly above `dir`, if any.
    fn locate_parent_descriptor(&self, dir: &Path) -> Option<PathBuf> {
        dir.parent().and_then(|parent| self.locate(parent))
    }
}

impl<F> DescriptorLocator for F
where
    F: Fn(&Path) -> Option<PathBuf>,
{
    fn locate(&self, dir: &Path) -> Option<PathBuf> {
        self(dir)
    }
}

/// Locates descriptors on the local filesystem.
///
/// A `pom.xml` takes precedence; otherwise the bundle, feature, product or
/// category descriptor of the directory is returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLocator;

impl FsLocator {
    pub fn new() -> Self {
        FsLocator
    }
}

impl DescriptorLocator for FsLocator {
    fn locate(&self, dir: &Path) -> Option<PathBuf> {
        let build_project = dir.join(BUILD_PROJECT_FILE);
        if build_project.is_file() {
            return Some(build_project);
        }
        DescriptorKind::probe(dir).map(|kind| kind.path().to_path_buf())
    }
}

/// Whether a path names a build project file.
pub fn is_build_project_file(path: &Path) -> bool {
    path.file_name()
        .map(|n| n == BUILD_PROJECT_FILE)
        .unwrap_or(false)
}
