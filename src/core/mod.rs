//! Core data structures.
//!
//! This module contains the foundational types used throughout pomless:
//! - The normalized project model and its build section
//! - Shared plugin configuration trees
//! - Descriptor kinds and the locator seam used to walk up to parents
//! - Version normalization

pub mod configuration;
pub mod descriptor;
pub mod locator;
pub mod model;
pub mod version;

pub use configuration::{ConfigNode, SharedConfiguration};
pub use descriptor::DescriptorKind;
pub use locator::{DescriptorLocator, FsLocator};
pub use model::{
    Build, InputLocation, Organization, Packaging, ParentReference, Plugin, PluginExecution,
    ProjectModel,
};
pub use version::normalize_version;
