//! Native descriptor formats.
//!
//! - [`manifest`]: OSGi manifest headers
//! - [`xml`]: feature/product/category/build project XML
//! - [`properties`]: localization bundles

pub mod manifest;
pub mod properties;
pub mod xml;

pub use manifest::ManifestHeaders;
pub use properties::Properties;
pub use xml::XmlDescriptor;
