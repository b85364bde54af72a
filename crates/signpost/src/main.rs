//! Signpost CLI - documentation site configuration.
//!
//! Provides commands for:
//! - `check`: Validate `signpost.toml` and report sidebar lint warnings
//! - `tree`: Print the validated sidebar as an outline
//! - `export`: Write the site builder's configuration object as JSON

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ExportArgs, TreeArgs};
use output::Output;

/// Signpost - documentation site configuration.
#[derive(Parser)]
#[command(name = "signpost", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the site configuration and sidebar.
    Check(CheckArgs),
    /// Print the sidebar navigation tree.
    Tree(TreeArgs),
    /// Export the site options as JSON for the site builder.
    Export(ExportArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Check(args) => args.verbose,
            Self::Tree(args) => args.verbose,
            Self::Export(args) => args.verbose,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG (errors only when unset)
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Tree(args) => args.execute(),
        Commands::Export(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
