//! Project model reading.
//!
//! A [`Synthesizer`] turns a project directory into a [`ProjectModel`]:
//!
//! 1. The descriptor of the directory is picked by
//!    [`DescriptorKind::probe`](crate::core::DescriptorKind::probe).
//! 2. The matching extraction path builds identity, version, packaging and
//!    display metadata ([`tycho`]).
//! 3. The parent reference is resolved by asking the locator for the
//!    descriptor one directory up and reading it with whichever reader
//!    handles that file ([`parent`]). Plain build project files are read by
//!    [`PomReader`]; descriptors recurse into the synthesizer again.
//!
//! The recursion depth is bounded and every directory may appear only once
//! per chain.

pub mod errors;
pub mod localization;
pub mod parent;
pub mod pom;
pub mod tycho;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::core::descriptor::project_root_of;
use crate::core::locator::{is_build_project_file, DescriptorLocator, FsLocator};
use crate::core::{ParentReference, ProjectModel};
use crate::util::fs::normalize_path;

pub use errors::{ModelError, ModelResult};
pub use pom::PomReader;

/// Default limit on the number of ancestors walked for one project.
pub const DEFAULT_MAX_PARENT_DEPTH: usize = 32;

/// Reads the project model of a descriptor file.
pub trait ModelReader {
    /// Read the model of the project described by `descriptor`.
    ///
    /// `chain` tracks the directories already visited above the project
    /// that started the read.
    fn read(&self, descriptor: &Path, chain: &mut ParentChain) -> ModelResult<ProjectModel>;
}

/// Directories visited while walking up a parent chain.
#[derive(Debug, Clone, Default)]
pub struct ParentChain {
    visited: Vec<PathBuf>,
}

impl ParentChain {
    /// Start a chain at the project being read.
    pub fn starting_at(project_root: &Path) -> Self {
        ParentChain {
            visited: vec![normalize_path(project_root)],
        }
    }

    /// Number of ancestors entered so far.
    pub fn depth(&self) -> usize {
        self.visited.len().saturating_sub(1)
    }

    /// Enter an ancestor directory.
    pub fn enter(&mut self, dir: &Path, limit: usize) -> ModelResult<()> {
        let dir = normalize_path(dir);
        if self.visited.contains(&dir) {
            return Err(ModelError::CyclicParentChain { dir });
        }
        if self.depth() >= limit {
            return Err(ModelError::ParentChainTooDeep { dir, limit });
        }
        self.visited.push(dir);
        Ok(())
    }

    /// Leave the most recently entered ancestor.
    pub fn leave(&mut self) {
        if self.visited.len() > 1 {
            self.visited.pop();
        }
    }
}

/// Synthesizes project models from descriptors.
pub struct Synthesizer {
    locator: Box<dyn DescriptorLocator + Send + Sync>,
    pom_reader: PomReader,
    max_parent_depth: usize,
    parent_cache: Option<Mutex<HashMap<PathBuf, ParentReference>>>,
}

impl Synthesizer {
    /// Create a synthesizer that locates parents with `locator`.
    pub fn new(locator: impl DescriptorLocator + Send + Sync + 'static) -> Self {
        Synthesizer {
            locator: Box::new(locator),
            pom_reader: PomReader::new(),
            max_parent_depth: DEFAULT_MAX_PARENT_DEPTH,
            parent_cache: None,
        }
    }

    /// Limit the number of ancestors walked.
    pub fn with_max_parent_depth(mut self, depth: usize) -> Self {
        self.max_parent_depth = depth;
        self
    }

    /// Remember resolved parent references for the lifetime of this synthesizer.
    ///
    /// Useful when reading many sibling projects that share ancestors.
    pub fn with_parent_cache(mut self) -> Self {
        self.parent_cache = Some(Mutex::new(HashMap::new()));
        self
    }

    pub fn max_parent_depth(&self) -> usize {
        self.max_parent_depth
    }

    pub fn locator(&self) -> &dyn DescriptorLocator {
        self.locator.as_ref()
    }

    /// Synthesize the model of a project directory.
    ///
    /// The directory is canonicalized first so that parents are looked up
    /// above the real directory, not above a `..` component.
    pub fn synthesize(&self, project_root: &Path) -> ModelResult<ProjectModel> {
        let project_root = normalize_path(project_root);
        let mut chain = ParentChain::starting_at(&project_root);
        self.synthesize_in(&project_root, &mut chain)
    }

    /// Read any descriptor file, picking the reader by file name.
    pub fn read_descriptor(&self, descriptor: &Path) -> ModelResult<ProjectModel> {
        let descriptor = normalize_path(descriptor);
        let mut chain = ParentChain::starting_at(project_root_of(&descriptor));
        self.reader_for(&descriptor).read(&descriptor, &mut chain)
    }

    /// The reader able to parse `descriptor`.
    pub fn reader_for(&self, descriptor: &Path) -> &dyn ModelReader {
        if is_build_project_file(descriptor) {
            &self.pom_reader
        } else {
            self
        }
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Synthesizer::new(FsLocator)
    }
}

impl std::fmt::Debug for Synthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Synthesizer")
            .field("max_parent_depth", &self.max_parent_depth)
            .field("parent_cache", &self.parent_cache.is_some())
            .finish()
    }
}
