//! Synthesize and render the model of a single project.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::core::{FsLocator, ProjectModel};
use crate::reader::{ModelResult, Synthesizer};
use crate::util::config::Config;

/// Serialization format for rendered models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Toml,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "toml" => Ok(OutputFormat::Toml),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown output format `{}` (expected toml or json)", other),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Toml => write!(f, "toml"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Options for `show`.
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    /// Project directory
    pub path: PathBuf,

    /// Output format (None = config, then TOML)
    pub format: Option<OutputFormat>,
}

/// Build a synthesizer honoring the configured parent depth.
pub fn synthesizer_for(config: &Config) -> Synthesizer {
    Synthesizer::new(FsLocator::new()).with_max_parent_depth(config.max_parent_depth())
}

/// Synthesize the model of `opts.path` and render it.
///
/// Model errors are returned as-is inside the `anyhow` chain so callers can
/// downcast them for diagnostics.
pub fn show(opts: &ShowOptions, config: &Config) -> Result<String> {
    let model = synthesize(opts, config)?;
    let format = opts
        .format
        .or_else(|| config.output_format())
        .unwrap_or_default();
    render_model(&model, format)
}

fn synthesize(opts: &ShowOptions, config: &Config) -> ModelResult<ProjectModel> {
    tracing::debug!("showing model of {}", opts.path.display());
    synthesizer_for(config).synthesize(&opts.path)
}

/// Render a model in the requested format.
pub fn render_model(model: &ProjectModel, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Toml => {
            toml::to_string_pretty(model).context("failed to serialize model as TOML")
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(model).context("failed to serialize model as JSON")
        }
    }
}
