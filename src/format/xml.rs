//! XML descriptor access.
//!
//! Feature, product, category and build project files are small XML
//! documents. Descriptors keep their text so that the parsed
//! [`roxmltree::Document`] can borrow from it.

use std::path::{Path, PathBuf};

use roxmltree::{Document, Node, ParsingOptions};

use crate::reader::errors::{ModelError, ModelResult};
use crate::util::fs::read_xml_descriptor;

/// An XML file loaded into memory.
#[derive(Debug, Clone)]
pub struct XmlDescriptor {
    file: PathBuf,
    content: String,
}

impl XmlDescriptor {
    /// Read an XML file.
    pub fn load(path: &Path) -> ModelResult<Self> {
        Ok(XmlDescriptor {
            file: path.to_path_buf(),
            content: read_xml_descriptor(path)?,
        })
    }

    /// Wrap already-read content.
    pub fn from_string(file: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        XmlDescriptor {
            file: file.into(),
            content: content.into(),
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Parse the document. Document type declarations are tolerated.
    pub fn parse(&self) -> ModelResult<Document<'_>> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        Document::parse_with_options(&self.content, options)
            .map_err(|e| ModelError::from_xml(&self.file, e))
    }
}

/// Attribute value, treating an empty string as absent.
pub fn attribute<'a>(element: Node<'a, '_>, name: &str) -> Option<&'a str> {
    element.attribute(name).filter(|v| !v.is_empty())
}

/// Attribute value that must be present and non-empty.
pub fn required_attribute<'a>(
    element: Node<'a, '_>,
    name: &str,
    file: &Path,
) -> ModelResult<&'a str> {
    attribute(element, name).ok_or_else(|| ModelError::missing_field(name, file))
}

/// First direct child element with the given tag name.
pub fn child_element<'a, 'input>(
    element: Node<'a, 'input>,
    name: &str,
) -> Option<Node<'a, 'input>> {
    element
        .children()
        .find(|n| n.is_element() && n.has_tag_name(name))
}

/// Trimmed, non-empty text of a direct child element.
pub fn child_text<'a>(element: Node<'a, '_>, name: &str) -> Option<&'a str> {
    child_element(element, name)
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Concatenated text of an element and all its descendants.
pub fn text_content(element: Node<'_, '_>) -> String {
    element
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
