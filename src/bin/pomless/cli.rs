//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use pomless::ops::OutputFormat;

/// pomless - synthesize project models from Eclipse PDE descriptors
#[derive(Parser)]
#[command(name = "pomless")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the synthesized model of a project
    Show(ShowArgs),

    /// Show which descriptor a directory and its parent resolve to
    Locate(LocateArgs),

    /// Synthesize every project below a directory
    Scan(ScanArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    /// Project directory (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Output format (defaults to `output.format` from config, then toml)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

#[derive(Args)]
pub struct LocateArgs {
    /// Directory to probe (defaults to the current directory)
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct ScanArgs {
    /// Directory to walk (defaults to the current directory)
    pub path: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Toml,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Toml => OutputFormat::Toml,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
