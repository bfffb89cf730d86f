//! Terminal rendering of model errors.
//!
//! A diagnostic is a one-line message plus the offending path, optional
//! context lines and fix suggestions.

use std::fmt::Write as _;
use std::path::PathBuf;

/// Common suggestion messages for consistent error handling.
pub mod suggestions {
    /// Suggestion when a directory holds no recognized descriptor.
    pub const NO_DESCRIPTOR: &str =
        "Add META-INF/MANIFEST.MF, feature.xml, a .product file or category.xml";

    /// Suggestion when no parent project can be found.
    pub const NO_PARENT: &str =
        "Add a pom.xml to the parent directory that declares the groupId";

    /// Suggestion when the parent chain exceeds the configured depth.
    pub const MAX_DEPTH: &str =
        "Raise `reader.max_parent_depth` in .pomless/config.toml";

    /// Suggestion when a scan finds no projects.
    pub const NO_PROJECTS: &str = "Run `pomless locate` on a project directory";
}

const RED: &str = "\x1b[1;31m";
const GREEN: &str = "\x1b[1;32m";
const RESET: &str = "\x1b[0m";

/// An error report for the terminal.
#[derive(Debug, Clone, Default)]
pub struct Diagnostic {
    message: String,
    location: Option<PathBuf>,
    context: Vec<String>,
    suggestions: Vec<String>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Render for the terminal, with ANSI colors when `color` is set.
    pub fn format(&self, color: bool) -> String {
        let paint = |label: &str, code: &str| {
            if color {
                format!("{code}{label}{RESET}")
            } else {
                label.to_string()
            }
        };

        let mut out = format!("{}: {}\n", paint("error", RED), self.message);
        if let Some(path) = &self.location {
            let _ = writeln!(out, "  --> {}", path.display());
        }
        for line in &self.context {
            let _ = writeln!(out, "   = {}", line);
        }
        for suggestion in &self.suggestions {
            let _ = writeln!(out, "{}: {}", paint("help", GREEN), suggestion);
        }
        out
    }
}

/// Print a diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic, color: bool) {
    eprint!("{}", diagnostic.format(color));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_formatting() {
        let diag = Diagnostic::error("required field `Bundle-Version` is missing or empty")
            .with_location("/work/bundle/META-INF/MANIFEST.MF")
            .with_context("manifest headers end at the first blank line")
            .with_suggestion("Add `Bundle-Version` to the descriptor");

        let output = diag.format(false);
        assert_eq!(
            output,
            "error: required field `Bundle-Version` is missing or empty\n  \
             --> /work/bundle/META-INF/MANIFEST.MF\n   \
             = manifest headers end at the first blank line\n\
             help: Add `Bundle-Version` to the descriptor\n"
        );
    }

    #[test]
    fn test_color_codes() {
        let diag = Diagnostic::error("boom").with_suggestion("fix it");
        assert!(diag.format(true).starts_with("\x1b[1;31merror\x1b[0m: boom"));
        assert!(!diag.format(false).contains("\x1b["));
    }
}
