//! Build project file (`pom.xml`) reader.
//!
//! Only identity and display metadata are read, straight from the direct
//! children of `<project>`. Nothing is inherited or interpolated here: a
//! missing group id or version stays unset and is picked up from the
//! declared `<parent>` by whoever needs it.

use std::path::Path;

use crate::core::{Organization, Packaging, ParentReference, ProjectModel};
use crate::format::xml::{child_element, child_text, XmlDescriptor};
use crate::reader::errors::{ModelError, ModelResult};
use crate::reader::{ModelReader, ParentChain};

/// Reads `pom.xml` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct PomReader;

impl PomReader {
    pub fn new() -> Self {
        PomReader
    }

    /// Parse build project content. `file` is used for errors and the location.
    pub fn parse(&self, descriptor: &XmlDescriptor) -> ModelResult<ProjectModel> {
        let file = descriptor.file();
        let doc = descriptor.parse()?;
        let project = doc.root_element();

        let artifact_id = child_text(project, "artifactId")
            .ok_or_else(|| ModelError::missing_field("artifactId", file))?;
        let packaging = child_text(project, "packaging")
            .map(Packaging::from)
            .unwrap_or(Packaging::Jar);

        let mut model = ProjectModel::new(artifact_id, packaging);
        model.group_id = child_text(project, "groupId").map(str::to_string);
        model.version = child_text(project, "version").map(str::to_string);
        model.name = child_text(project, "name").map(str::to_string);
        model.organization = child_element(project, "organization")
            .and_then(|org| child_text(org, "name"))
            .map(|name| Organization {
                name: name.to_string(),
            });

        if let Some(parent) = child_element(project, "parent") {
            let required = |name: &str| {
                child_text(parent, name)
                    .map(str::to_string)
                    .ok_or_else(|| ModelError::missing_field(format!("parent/{}", name), file))
            };
            model.parent = Some(ParentReference {
                group_id: required("groupId")?,
                artifact_id: required("artifactId")?,
                version: required("version")?,
            });
        }

        model.set_location(file);
        Ok(model)
    }
}

impl ModelReader for PomReader {
    fn read(&self, descriptor: &Path, _chain: &mut ParentChain) -> ModelResult<ProjectModel> {
        tracing::debug!("reading build project {}", descriptor.display());
        self.parse(&XmlDescriptor::load(descriptor)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> ModelResult<ProjectModel> {
        PomReader.parse(&XmlDescriptor::from_string("/w/pom.xml", content))
    }

    #[test]
    fn test_parse_root_pom() {
        let model = parse(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>org.example</groupId>
  <artifactId>root</artifactId>
  <version>1.0.0-SNAPSHOT</version>
  <packaging>pom</packaging>
  <name>Example Root</name>
  <organization><name>Example Corp</name></organization>
  <dependencies>
    <dependency><artifactId>nested</artifactId></dependency>
  </dependencies>
</project>"#,
        )
        .unwrap();

        assert_eq!(model.group_id.as_deref(), Some("org.example"));
        assert_eq!(model.artifact_id, "root");
        assert_eq!(model.version.as_deref(), Some("1.0.0-SNAPSHOT"));
        assert_eq!(model.packaging, Packaging::Pom);
        assert_eq!(model.display_name(), "Example Root");
        assert_eq!(model.organization.unwrap().name, "Example Corp");
        assert!(model.parent.is_none());
    }

    #[test]
    fn test_parse_inheriting_pom() {
        let model = parse(
            r#"<project>
  <parent>
    <groupId>org.example</groupId>
    <artifactId>root</artifactId>
    <version>1.0.0</version>
  </parent>
  <artifactId>bundles</artifactId>
</project>"#,
        )
        .unwrap();

        assert!(model.group_id.is_none());
        assert!(model.version.is_none());
        assert_eq!(model.packaging, Packaging::Jar);
        assert_eq!(model.effective_group_id(), Some("org.example"));
        assert_eq!(model.effective_version(), Some("1.0.0"));
        assert_eq!(
            model.location.unwrap().model_id,
            "org.example:bundles:"
        );
    }

    #[test]
    fn test_incomplete_parent() {
        let err = parse(
            "<project><parent><artifactId>root</artifactId></parent><artifactId>x</artifactId></project>",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ModelError::MissingRequiredField { ref field, .. } if field == "parent/groupId"
        ));
    }

    #[test]
    fn test_missing_artifact_id() {
        let err = parse("<project><groupId>g</groupId></project>").unwrap_err();
        assert!(matches!(
            err,
            ModelError::MissingRequiredField { ref field, .. } if field == "artifactId"
        ));
    }
}
