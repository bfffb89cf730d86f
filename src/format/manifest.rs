//! OSGi `META-INF/MANIFEST.MF` header parsing.
//!
//! Only the main section is read: it ends at the first blank line. A line
//! starting with a single space continues the value of the previous header.
//! Header names compare case-insensitively.

use std::path::Path;

use crate::reader::errors::{ModelError, ModelResult, TextPosition};
use crate::util::fs::read_descriptor;

/// Main-section headers of a manifest, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestHeaders {
    entries: Vec<(String, String)>,
}

impl ManifestHeaders {
    /// Load and parse a manifest file.
    pub fn load(path: &Path) -> ModelResult<Self> {
        let content = read_descriptor(path)?;
        Self::parse(&content, path)
    }

    /// Parse manifest content. `file` is only used for error messages.
    pub fn parse(content: &str, file: &Path) -> ModelResult<Self> {
        let mut entries: Vec<(String, String)> = Vec::new();

        for (index, line) in content.lines().enumerate() {
            if line.is_empty() {
                break;
            }

            if let Some(continuation) = line.strip_prefix(' ') {
                match entries.last_mut() {
                    Some((_, value)) => {
                        value.push_str(continuation);
                        continue;
                    }
                    None => return Err(malformed(file, index, "continuation before first header")),
                }
            }

            let Some((name, value)) = line.split_once(": ") else {
                return Err(malformed(file, index, "invalid header field"));
            };
            if !is_valid_name(name) {
                return Err(malformed(file, index, "invalid header field name"));
            }

            entries.push((name.to_string(), value.to_string()));
        }

        Ok(ManifestHeaders { entries })
    }

    /// Value of a header, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Value of a header that must be present.
    pub fn required(&self, name: &str, file: &Path) -> ModelResult<&str> {
        self.get(name).ok_or_else(|| ModelError::missing_field(name, file))
    }

    /// Value of a header, treating an empty value as absent.
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn malformed(file: &Path, index: usize, message: &str) -> ModelError {
    ModelError::MalformedDescriptor {
        file: file.to_path_buf(),
        message: message.to_string(),
        position: Some(TextPosition {
            line: index as u32 + 1,
            column: 1,
        }),
    }
}

/// Strip directives and attributes from a `Bundle-SymbolicName` value.
///
/// `org.example.core; singleton:=true` becomes `org.example.core`.
pub fn bare_symbolic_name(value: &str) -> &str {
    match value.find(';') {
        Some(index) if index > 0 => value[..index].trim(),
        _ => value.trim(),
    }
}
