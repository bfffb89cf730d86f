//! The normalized build project model.
//!
//! Every reader produces a [`ProjectModel`], regardless of whether the source
//! was an OSGi manifest, a feature/product/category XML file, or a plain
//! build project file. Downstream consumers only ever see this shape.

use std::fmt;
use std::path::PathBuf;

use serde::{Serialize, Serializer};

use crate::core::configuration::SharedConfiguration;

/// Model version written into every synthesized model.
pub const MODEL_VERSION: &str = "4.0.0";

/// Packaging tag of a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Packaging {
    Pom,
    Jar,
    /// OSGi bundle
    EclipsePlugin,
    /// OSGi bundle whose symbolic name ends with `.tests`
    EclipseTestPlugin,
    EclipseFeature,
    /// Products and categories (p2 repositories)
    EclipseRepository,
    /// Any other tag declared by a build project file
    Other(String),
}

impl Packaging {
    /// Packaging for an OSGi bundle, inferred from its symbolic name.
    pub fn for_bundle(symbolic_name: &str) -> Self {
        if symbolic_name.ends_with(".tests") {
            Packaging::EclipseTestPlugin
        } else {
            Packaging::EclipsePlugin
        }
    }

    /// Get the tag as it appears in a build project file.
    pub fn as_str(&self) -> &str {
        match self {
            Packaging::Pom => "pom",
            Packaging::Jar => "jar",
            Packaging::EclipsePlugin => "eclipse-plugin",
            Packaging::EclipseTestPlugin => "eclipse-test-plugin",
            Packaging::EclipseFeature => "eclipse-feature",
            Packaging::EclipseRepository => "eclipse-repository",
            Packaging::Other(s) => s,
        }
    }
}

impl From<&str> for Packaging {
    fn from(s: &str) -> Self {
        match s {
            "pom" => Packaging::Pom,
            "jar" => Packaging::Jar,
            "eclipse-plugin" => Packaging::EclipsePlugin,
            "eclipse-test-plugin" => Packaging::EclipseTestPlugin,
            "eclipse-feature" => Packaging::EclipseFeature,
            "eclipse-repository" => Packaging::EclipseRepository,
            other => Packaging::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Packaging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Packaging {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Reference to the project a model inherits from.
///
/// All three coordinates are always resolved; a reference with a missing
/// group id or version is never constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentReference {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl fmt::Display for ParentReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// Organization (vendor) metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organization {
    pub name: String,
}

/// A single execution of a build plugin.
#[derive(Debug, Clone, Serialize)]
pub struct PluginExecution {
    pub id: String,
    pub goals: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<SharedConfiguration>,
}

/// A build plugin with its executions.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    pub group_id: String,
    pub artifact_id: String,
    pub executions: Vec<PluginExecution>,
}

impl Plugin {
    /// Get an execution by id.
    pub fn execution(&self, id: &str) -> Option<&PluginExecution> {
        self.executions.iter().find(|e| e.id == id)
    }
}

/// Build section of a model.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Build {
    pub plugins: Vec<Plugin>,
}

impl Build {
    /// Get a plugin by artifact id.
    pub fn plugin(&self, artifact_id: &str) -> Option<&Plugin> {
        self.plugins.iter().find(|p| p.artifact_id == artifact_id)
    }
}

/// Where a model came from, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputLocation {
    /// The descriptor file the model was read from
    pub source: PathBuf,
    /// `groupId:artifactId:version`
    pub model_id: String,
}

/// A normalized build project model.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectModel {
    pub model_version: String,

    /// Only set when the source declares it; descriptor-based models
    /// inherit it through [`ProjectModel::parent`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    pub artifact_id: String,

    /// Always set for synthesized descriptors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    pub packaging: Packaging,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<Build>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<InputLocation>,
}

impl ProjectModel {
    /// Create a model with the given identity and packaging.
    pub fn new(artifact_id: impl Into<String>, packaging: Packaging) -> Self {
        ProjectModel {
            model_version: MODEL_VERSION.to_string(),
            group_id: None,
            artifact_id: artifact_id.into(),
            version: None,
            packaging,
            name: None,
            organization: None,
            parent: None,
            build: None,
            location: None,
        }
    }

    /// Display name, falling back to the artifact id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.artifact_id)
    }

    /// Group id, inherited from the parent reference when not declared.
    pub fn effective_group_id(&self) -> Option<&str> {
        self.group_id
            .as_deref()
            .or_else(|| self.parent.as_ref().map(|p| p.group_id.as_str()))
    }

    /// Version, inherited from the parent reference when not declared.
    pub fn effective_version(&self) -> Option<&str> {
        self.version
            .as_deref()
            .or_else(|| self.parent.as_ref().map(|p| p.version.as_str()))
    }

    /// Record the source file and derive the model id from the parent's group.
    pub fn set_location(&mut self, source: impl Into<PathBuf>) {
        let group_id = self
            .parent
            .as_ref()
            .map(|p| p.group_id.as_str())
            .or(self.group_id.as_deref())
            .unwrap_or_default();
        let model_id = format!(
            "{}:{}:{}",
            group_id,
            self.artifact_id,
            self.version.as_deref().unwrap_or_default()
        );
        self.location = Some(InputLocation {
            source: source.into(),
            model_id,
        });
    }

    /// Source file this model was read from, if recorded.
    pub fn source(&self) -> Option<&std::path::Path> {
        self.location.as_ref().map(|l| l.source.as_path())
    }
}
