//! Parent project resolution.
//!
//! The parent of a project must live in the directory directly above it.
//! Its model is read with the reader that handles its descriptor, and the
//! group id and version are taken from it, or from its own parent reference
//! when it inherits them.

use std::path::{Path, PathBuf};
use std::sync::PoisonError;

use crate::core::{ParentReference, ProjectModel};
use crate::reader::errors::{ModelError, ModelResult};
use crate::reader::{ParentChain, Synthesizer};
use crate::util::fs::normalize_path;

impl Synthesizer {
    /// Resolve the parent reference of the project at `project_root`.
    pub fn find_parent(
        &self,
        project_root: &Path,
        chain: &mut ParentChain,
    ) -> ModelResult<ParentReference> {
        let parent_dir = project_root.parent().ok_or_else(|| ModelError::ParentNotFound {
            dir: project_root.to_path_buf(),
        })?;
        let key = normalize_path(parent_dir);

        if let Some(cached) = self.cached_parent(&key) {
            tracing::debug!("using cached parent {} for {}", cached, project_root.display());
            return Ok(cached);
        }

        let descriptor = self
            .locator
            .locate_parent_descriptor(project_root)
            .ok_or_else(|| ModelError::ParentNotFound {
                dir: parent_dir.to_path_buf(),
            })?;
        tracing::debug!(
            "reading parent of {} from {}",
            project_root.display(),
            descriptor.display()
        );

        chain.enter(parent_dir, self.max_parent_depth)?;
        let parent_model = self.reader_for(&descriptor).read(&descriptor, chain);
        chain.leave();

        let reference = parent_reference(&parent_model?, &descriptor)?;
        self.remember_parent(key, &reference);
        Ok(reference)
    }

    fn cached_parent(&self, dir: &Path) -> Option<ParentReference> {
        let cache = self.parent_cache.as_ref()?;
        let cache = cache.lock().unwrap_or_else(PoisonError::into_inner);
        cache.get(dir).cloned()
    }

    fn remember_parent(&self, dir: PathBuf, reference: &ParentReference) {
        if let Some(cache) = self.parent_cache.as_ref() {
            cache
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(dir, reference.clone());
        }
    }
}

/// Build the reference to a parent model.
///
/// Group id and version fall back to the parent's own parent reference.
fn parent_reference(parent: &ProjectModel, descriptor: &Path) -> ModelResult<ParentReference> {
    let group_id = parent
        .effective_group_id()
        .filter(|g| !g.is_empty())
        .ok_or_else(|| ModelError::missing_field("groupId", descriptor))?;
    let version = parent
        .effective_version()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ModelError::missing_field("version", descriptor))?;

    Ok(ParentReference {
        group_id: group_id.to_string(),
        artifact_id: parent.artifact_id.clone(),
        version: version.to_string(),
    })
}
