//! Configuration file support for pomless.
//!
//! pomless supports two configuration file locations:
//! - Global: `~/.pomless/config.toml` - User-wide defaults
//! - Project: `.pomless/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::ops::OutputFormat;
use crate::reader::DEFAULT_MAX_PARENT_DEPTH;

/// Directory holding pomless configuration, both globally and per project.
pub const CONFIG_DIR: &str = ".pomless";

/// Configuration file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// pomless configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Model reading settings
    pub reader: ReaderConfig,

    /// Project scan settings
    pub scan: ScanConfig,

    /// Output settings
    pub output: OutputConfig,
}

/// Model reading configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Maximum number of ancestors walked per project (None = built-in default)
    pub max_parent_depth: Option<usize>,
}

/// Scan configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory names never descended into, on top of hidden directories
    pub skip_dirs: Vec<String>,
}

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default model output format (toml, json)
    pub format: Option<String>,
}

/// Directory names skipped by every scan.
pub const DEFAULT_SKIP_DIRS: &[&str] = &["target", "bin", "node_modules"];

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Load the configuration that applies to `project_root`.
    pub fn for_project(project_root: &Path) -> Self {
        let project_path = project_config_path(project_root);
        match global_config_path() {
            Some(global_path) => load_config(&global_path, &project_path),
            None => Self::load_or_default(&project_path),
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.reader.max_parent_depth.is_some() {
            self.reader.max_parent_depth = other.reader.max_parent_depth;
        }

        // Lists are replaced, not merged
        if !other.scan.skip_dirs.is_empty() {
            self.scan.skip_dirs = other.scan.skip_dirs;
        }

        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
    }

    /// Effective parent depth limit.
    pub fn max_parent_depth(&self) -> usize {
        self.reader.max_parent_depth.unwrap_or(DEFAULT_MAX_PARENT_DEPTH)
    }

    /// Parse the output format from config string.
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.format.as_ref().and_then(|s| s.parse().ok())
    }

    /// Whether a directory name is excluded from scans.
    pub fn skips_dir(&self, name: &str) -> bool {
        DEFAULT_SKIP_DIRS.contains(&name) || self.scan.skip_dirs.iter().any(|d| d == name)
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.pomless/config.toml)
/// 2. Global config (~/.pomless/config.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    if global_path.exists() {
        let global = Config::load_or_default(global_path);
        config.merge(global);
    }

    // Project config overrides global
    if project_path.exists() {
        let project = Config::load_or_default(project_path);
        config.merge(project);
    }

    config
}

/// Get the global pomless config directory (~/.pomless).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(CONFIG_DIR))
}

/// Get the global config path (~/.pomless/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Get the project config path (.pomless/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.reader.max_parent_depth.is_none());
        assert_eq!(config.max_parent_depth(), DEFAULT_MAX_PARENT_DEPTH);
        assert!(config.scan.skip_dirs.is_empty());
        assert!(config.output_format().is_none());
    }

    #[test]
    fn test_config_load() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");

        std::fs::write(
            &config_path,
            r#"
[reader]
max_parent_depth = 4

[scan]
skip_dirs = ["releng"]

[output]
format = "json"
"#,
        )
        .unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.max_parent_depth(), 4);
        assert_eq!(config.scan.skip_dirs, vec!["releng"]);
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
        assert!(config.skips_dir("releng"));
        assert!(config.skips_dir("target"));
        assert!(!config.skips_dir("bundles"));
    }

    #[test]
    fn test_broken_config_falls_back() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        std::fs::write(&config_path, "[reader\nmax_parent_depth = ").unwrap();

        assert!(Config::load(&config_path).is_err());
        let config = Config::load_or_default(&config_path);
        assert_eq!(config.max_parent_depth(), DEFAULT_MAX_PARENT_DEPTH);
    }

    #[test]
    fn test_unknown_format_is_ignored() {
        let mut config = Config::default();
        config.output.format = Some("yaml".to_string());
        assert!(config.output_format().is_none());
    }

    #[test]
    fn test_load_config_precedence() {
        let tmp = TempDir::new().unwrap();
        let global_path = tmp.path().join("global.toml");
        let project_path = tmp.path().join("project.toml");

        std::fs::write(
            &global_path,
            r#"
[reader]
max_parent_depth = 8

[output]
format = "json"
"#,
        )
        .unwrap();

        std::fs::write(
            &project_path,
            r#"
[output]
format = "toml"
"#,
        )
        .unwrap();

        let config = load_config(&global_path, &project_path);

        // Global depth is preserved
        assert_eq!(config.max_parent_depth(), 8);
        // Project format overrides global
        assert_eq!(config.output_format(), Some(OutputFormat::Toml));
    }

    #[test]
    fn test_project_config_path() {
        assert_eq!(
            project_config_path(Path::new("/w")),
            Path::new("/w/.pomless/config.toml")
        );
    }
}
