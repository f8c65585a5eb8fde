//! tabkit CLI - Tab widget renderer.
//!
//! Provides commands for:
//! - `render`: Render a tab description file to HTML
//! - `check`: Validate a tab description file without printing markup

mod commands;
mod document;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, RenderArgs};
use output::Output;

/// tabkit - Tab widget renderer.
#[derive(Parser)]
#[command(name = "tabkit", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a tab description file to HTML on stdout.
    Render(RenderArgs),
    /// Validate a tab description file.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Render(args) => args.verbose,
        Commands::Check(args) => args.verbose,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
