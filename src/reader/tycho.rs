//! Models synthesized from Eclipse PDE descriptors.
//!
//! Bundles, features, products and categories carry no build project file.
//! Their identity comes from the descriptor itself, the group id always
//! comes from the parent project.

use std::path::Path;

use crate::core::configuration::{ConfigNode, SharedConfiguration};
use crate::core::descriptor::{project_root_of, DescriptorKind, PROJECT_FILE};
use crate::core::version::normalize_version;
use crate::core::{Build, Organization, Packaging, Plugin, PluginExecution, ProjectModel};
use crate::format::manifest::bare_symbolic_name;
use crate::format::xml::{attribute, required_attribute, text_content};
use crate::format::{ManifestHeaders, XmlDescriptor};
use crate::reader::errors::{ModelError, ModelResult};
use crate::reader::localization::localized_header;
use crate::reader::{ModelReader, ParentChain, Synthesizer};

pub const BUNDLE_SYMBOLIC_NAME: &str = "Bundle-SymbolicName";
pub const BUNDLE_VERSION: &str = "Bundle-Version";
pub const BUNDLE_NAME: &str = "Bundle-Name";
pub const BUNDLE_VENDOR: &str = "Bundle-Vendor";

/// Group id of the plugin that materializes and archives products.
pub const DIRECTOR_PLUGIN_GROUP_ID: &str = "org.eclipse.tycho";
/// Artifact id of the plugin that materializes and archives products.
pub const DIRECTOR_PLUGIN_ARTIFACT_ID: &str = "tycho-p2-director-plugin";
/// Execution id and goal of the materialize step.
pub const MATERIALIZE_PRODUCTS: &str = "materialize-products";
/// Execution id and goal of the archive step.
pub const ARCHIVE_PRODUCTS: &str = "archive-products";

/// Attribute names of an XML descriptor's root element.
struct XmlAttributes {
    id: &'static str,
    version: &'static str,
    name: Option<&'static str>,
    vendor: Option<&'static str>,
}

const FEATURE_ATTRIBUTES: XmlAttributes = XmlAttributes {
    id: "id",
    version: "version",
    name: Some("label"),
    vendor: Some("provider-name"),
};

const PRODUCT_ATTRIBUTES: XmlAttributes = XmlAttributes {
    id: "uid",
    version: "version",
    name: Some("name"),
    vendor: None,
};

impl Synthesizer {
    /// Synthesize the model of `project_root` as part of a parent chain.
    pub(crate) fn synthesize_in(
        &self,
        project_root: &Path,
        chain: &mut ParentChain,
    ) -> ModelResult<ProjectModel> {
        let kind = DescriptorKind::probe(project_root).ok_or_else(|| {
            ModelError::NoDescriptorFound {
                dir: project_root.to_path_buf(),
            }
        })?;
        tracing::debug!("synthesizing model from {}", kind);

        match kind {
            DescriptorKind::Module(manifest) => self.from_manifest(&manifest, chain),
            DescriptorKind::Feature(feature) => self.from_feature(&feature, chain),
            DescriptorKind::Product(product) => self.from_product(&product, chain),
            DescriptorKind::Category(category) => self.from_category(&category, chain),
        }
    }

    fn from_manifest(&self, manifest: &Path, chain: &mut ParentChain) -> ModelResult<ProjectModel> {
        let headers = ManifestHeaders::load(manifest)?;
        let project_root = project_root_of(manifest);

        let symbolic_name = bare_symbolic_name(headers.required(BUNDLE_SYMBOLIC_NAME, manifest)?);
        if symbolic_name.is_empty() {
            return Err(ModelError::missing_field(BUNDLE_SYMBOLIC_NAME, manifest));
        }
        let bundle_version = headers.required(BUNDLE_VERSION, manifest)?.trim();
        if bundle_version.is_empty() {
            return Err(ModelError::missing_field(BUNDLE_VERSION, manifest));
        }

        let mut model = ProjectModel::new(symbolic_name, Packaging::for_bundle(symbolic_name));
        model.parent = Some(self.find_parent(project_root, chain)?);
        model.version = Some(normalize_version(bundle_version));
        model.name = Some(
            localized_header(&headers, BUNDLE_NAME, project_root)
                .unwrap_or_else(|| symbolic_name.to_string()),
        );
        model.organization = localized_header(&headers, BUNDLE_VENDOR, project_root)
            .map(|name| Organization { name });
        model.set_location(manifest);

        Ok(model)
    }

    fn from_feature(&self, feature: &Path, chain: &mut ParentChain) -> ModelResult<ProjectModel> {
        self.from_xml(feature, &FEATURE_ATTRIBUTES, Packaging::EclipseFeature, chain)
    }

    fn from_product(&self, product: &Path, chain: &mut ParentChain) -> ModelResult<ProjectModel> {
        let mut model =
            self.from_xml(product, &PRODUCT_ATTRIBUTES, Packaging::EclipseRepository, chain)?;
        model.build = Some(product_build(&model.artifact_id));
        Ok(model)
    }

    fn from_xml(
        &self,
        file: &Path,
        attributes: &XmlAttributes,
        packaging: Packaging,
        chain: &mut ParentChain,
    ) -> ModelResult<ProjectModel> {
        let descriptor = XmlDescriptor::load(file)?;
        let doc = descriptor.parse()?;
        let root = doc.root_element();
        let project_root = project_root_of(file);

        let parent = self.find_parent(project_root, chain)?;

        let id = required_attribute(root, attributes.id, file)?;
        let version = required_attribute(root, attributes.version, file)?;

        let mut model = ProjectModel::new(id, packaging);
        model.parent = Some(parent);
        model.version = Some(normalize_version(version));
        model.name = Some(
            attributes
                .name
                .and_then(|name| attribute(root, name))
                .unwrap_or(id)
                .to_string(),
        );
        model.organization = attributes
            .vendor
            .and_then(|vendor| attribute(root, vendor))
            .map(|name| Organization {
                name: name.to_string(),
            });
        model.set_location(file);

        Ok(model)
    }

    fn from_category(&self, category: &Path, chain: &mut ParentChain) -> ModelResult<ProjectModel> {
        let project_root = project_root_of(category);
        let parent = self.find_parent(project_root, chain)?;
        let artifact_id = read_project_name(project_root)?;

        let mut model = ProjectModel::new(artifact_id, Packaging::EclipseRepository);
        model.version = Some(parent.version.clone());
        model.parent = Some(parent);
        model.set_location(category);

        Ok(model)
    }
}

impl ModelReader for Synthesizer {
    fn read(&self, descriptor: &Path, chain: &mut ParentChain) -> ModelResult<ProjectModel> {
        self.synthesize_in(project_root_of(descriptor), chain)
    }
}

/// Read the project name from the `.project` file of a directory.
pub fn read_project_name(project_root: &Path) -> ModelResult<String> {
    let project_file = project_root.join(PROJECT_FILE);
    if !project_file.is_file() {
        return Err(ModelError::io(
            &project_file,
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!(
                    "no {} file could be found in project directory {}",
                    PROJECT_FILE,
                    project_root.display()
                ),
            ),
        ));
    }

    let descriptor = XmlDescriptor::load(&project_file)?;
    let doc = descriptor.parse()?;
    let name = doc
        .descendants()
        .find(|n| n.is_element() && n.has_tag_name("name"))
        .map(text_content)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ModelError::MissingElement {
            element: "name".to_string(),
            file: project_file.clone(),
        })?;

    Ok(name)
}

/// Build section materializing and archiving the product `product_id`.
///
/// Both executions hold the same configuration handle; editing it through
/// one execution changes what the other sees.
pub fn product_build(product_id: &str) -> Build {
    let configuration = SharedConfiguration::new(
        ConfigNode::new("configuration").with_child(
            ConfigNode::new("products").with_child(
                ConfigNode::new("product")
                    .with_child(ConfigNode::new("id").with_value(product_id)),
            ),
        ),
    );

    let materialize = PluginExecution {
        id: MATERIALIZE_PRODUCTS.to_string(),
        goals: vec![MATERIALIZE_PRODUCTS.to_string()],
        configuration: Some(configuration.clone()),
    };
    let archive = PluginExecution {
        id: ARCHIVE_PRODUCTS.to_string(),
        goals: vec![ARCHIVE_PRODUCTS.to_string()],
        configuration: Some(configuration),
    };

    Build {
        plugins: vec![Plugin {
            group_id: DIRECTOR_PLUGIN_GROUP_ID.to_string(),
            artifact_id: DIRECTOR_PLUGIN_ARTIFACT_ID.to_string(),
            executions: vec![materialize, archive],
        }],
    }
}
