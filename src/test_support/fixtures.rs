//! Descriptor content for common test scenarios.

/// Minimal bundle manifest headers.
pub fn bundle_manifest(symbolic_name: &str, version: &str) -> String {
    format!(
        "Manifest-Version: 1.0\n\
         Bundle-ManifestVersion: 2\n\
         Bundle-SymbolicName: {symbolic_name};singleton:=true\n\
         Bundle-Version: {version}\n"
    )
}

/// Feature descriptor with a label and provider.
pub fn feature_xml(id: &str, version: &str, label: &str, provider: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feature id="{id}" label="{label}" version="{version}" provider-name="{provider}">
</feature>
"#
    )
}

/// Product descriptor.
pub fn product_xml(uid: &str, version: &str, name: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<?pde version="3.5"?>
<product name="{name}" uid="{uid}" version="{version}" useFeatures="true">
</product>
"#
    )
}

/// Eclipse `.project` file naming the project.
pub fn project_file(name: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<projectDescription>
  <name>{name}</name>
  <comment></comment>
  <projects></projects>
</projectDescription>
"#
    )
}

/// Build project that inherits everything from `parent`.
pub fn child_pom(parent_group: &str, parent_artifact: &str, parent_version: &str, artifact: &str) -> String {
    format!(
        r#"<project>
  <modelVersion>4.0.0</modelVersion>
  <parent>
    <groupId>{parent_group}</groupId>
    <artifactId>{parent_artifact}</artifactId>
    <version>{parent_version}</version>
  </parent>
  <artifactId>{artifact}</artifactId>
  <packaging>pom</packaging>
</project>
"#
    )
}
