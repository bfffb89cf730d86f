//! pomless CLI - project models for Eclipse PDE projects

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use pomless::util::diagnostic::emit;
use pomless::ModelError;

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color;

    if let Err(e) = run(cli) {
        match e.downcast_ref::<ModelError>() {
            Some(model_error) => emit(&model_error.to_diagnostic(), color),
            None => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("pomless=debug")
    } else {
        EnvFilter::new("pomless=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Show(args) => commands::show::execute(args),
        Commands::Locate(args) => commands::locate::execute(args),
        Commands::Scan(args) => commands::scan::execute(args),
    }
}
