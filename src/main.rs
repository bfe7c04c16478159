//! Layermaze CLI
//!
//! Command-line interface for the layered maze generator.

use anyhow::Context;
use clap::Parser;
use log::info;
use tracing_subscriber::EnvFilter;

use layermaze::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Layermaze v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("Layermaze v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands) -> anyhow::Result<()> {
    match cmd {
        Commands::Generate(args) => commands::generate(&args).context("generate failed"),
        Commands::Show { path, side_by_side } => commands::show(&path, side_by_side)
            .with_context(|| format!("cannot show {}", path.display())),
        Commands::Reach { path, column, row } => commands::reach(&path, column, row)
            .with_context(|| format!("reachability check on {} failed", path.display())),
        Commands::Collapse { path, axis, json } => commands::collapse(&path, axis, json)
            .with_context(|| format!("cannot collapse {}", path.display())),
        Commands::Points { path } => commands::points(&path)
            .with_context(|| format!("cannot list points in {}", path.display())),
    }
}
