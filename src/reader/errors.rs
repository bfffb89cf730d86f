//! Model reading error types and diagnostics.

use std::io;
use std::path::{Path, PathBuf};

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::{suggestions, Diagnostic};

/// Line and column of a parse failure (both 1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPosition {
    pub line: u32,
    pub column: u32,
}

impl std::fmt::Display for TextPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Error while reading a project model.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum ModelError {
    #[error(
        "neither META-INF/MANIFEST.MF, feature.xml, .product nor category.xml file found in {}",
        dir.display()
    )]
    #[diagnostic(code(pomless::read::no_descriptor))]
    NoDescriptorFound { dir: PathBuf },

    #[error("missing or empty required field `{field}` in {}", file.display())]
    #[diagnostic(code(pomless::read::missing_field))]
    MissingRequiredField { field: String, file: PathBuf },

    #[error("no `{element}` element found in {}", file.display())]
    #[diagnostic(code(pomless::read::missing_element))]
    MissingElement { element: String, file: PathBuf },

    #[error("no parent project descriptor found in {}", dir.display())]
    #[diagnostic(
        code(pomless::parent::not_found),
        help("The parent project must live in the directory directly above this one")
    )]
    ParentNotFound { dir: PathBuf },

    #[error("parent chain above {} is deeper than {limit} levels", dir.display())]
    #[diagnostic(code(pomless::parent::too_deep))]
    ParentChainTooDeep { dir: PathBuf, limit: usize },

    #[error("parent chain loops back to {}", dir.display())]
    #[diagnostic(code(pomless::parent::cycle))]
    CyclicParentChain { dir: PathBuf },

    #[error("malformed descriptor {}: {message}", file.display())]
    #[diagnostic(code(pomless::read::malformed))]
    MalformedDescriptor {
        file: PathBuf,
        message: String,
        position: Option<TextPosition>,
    },

    #[error("failed to read {}", path.display())]
    #[diagnostic(code(pomless::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ModelError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ModelError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn missing_field(field: impl Into<String>, file: &Path) -> Self {
        ModelError::MissingRequiredField {
            field: field.into(),
            file: file.to_path_buf(),
        }
    }

    /// Wrap an XML parse failure, keeping its position.
    pub fn from_xml(file: &Path, err: roxmltree::Error) -> Self {
        let pos = err.pos();
        ModelError::MalformedDescriptor {
            file: file.to_path_buf(),
            message: err.to_string(),
            position: Some(TextPosition {
                line: pos.row,
                column: pos.col,
            }),
        }
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ModelError::NoDescriptorFound { dir } => Diagnostic::error(self.to_string())
                .with_location(dir)
                .with_suggestion(suggestions::NO_DESCRIPTOR),

            ModelError::MissingRequiredField { field, file } => {
                Diagnostic::error(format!("required field `{}` is missing or empty", field))
                    .with_location(file)
                    .with_suggestion(format!("Add `{}` to the descriptor", field))
            }

            ModelError::MissingElement { element, file } => {
                Diagnostic::error(format!("no `<{}>` element found", element))
                    .with_location(file)
            }

            ModelError::ParentNotFound { dir } => {
                Diagnostic::error("no parent project descriptor found")
                    .with_location(dir)
                    .with_context("the parent is looked up in the directory directly above the project")
                    .with_suggestion(suggestions::NO_PARENT)
            }

            ModelError::ParentChainTooDeep { dir, limit } => {
                Diagnostic::error(format!("parent chain is deeper than {} levels", limit))
                    .with_location(dir)
                    .with_suggestion(suggestions::MAX_DEPTH)
            }

            ModelError::CyclicParentChain { dir } => Diagnostic::error("parent chain loops")
                .with_location(dir)
                .with_context("a directory was reached twice while walking up, check for symlinks"),

            ModelError::MalformedDescriptor {
                file,
                message,
                position,
            } => {
                let mut diag = Diagnostic::error("malformed descriptor").with_location(file);
                diag = match position {
                    Some(pos) => diag.with_context(format!("at {}: {}", pos, message)),
                    None => diag.with_context(message.clone()),
                };
                diag
            }

            ModelError::Io { path, source } => Diagnostic::error("failed to read file")
                .with_location(path)
                .with_context(source.to_string()),
        }
    }

    /// Whether this error came from a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ModelError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Result alias for model reading.
pub type ModelResult<T> = Result<T, ModelError>;
