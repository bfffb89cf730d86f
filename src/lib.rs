//! pomless - project models for Eclipse PDE projects without a `pom.xml`
//!
//! This crate reads bundle manifests, feature, product and category
//! descriptors and synthesizes the project model a build would otherwise
//! declare by hand, including the parent reference found by walking up the
//! directory tree.

pub mod core;
pub mod format;
pub mod ops;
pub mod reader;
pub mod util;

/// Test fixtures for pomless unit tests.
///
/// This module is only available when compiling with `--cfg test`.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{DescriptorKind, DescriptorLocator, FsLocator, Packaging, ProjectModel};

pub use reader::{ModelError, ModelReader, ModelResult, Synthesizer};
pub use util::config::Config;
