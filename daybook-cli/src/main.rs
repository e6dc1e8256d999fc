mod commands;
mod form;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use daybook_core::DaybookConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "daybook")]
#[command(about = "Plan your day in half-hour blocks without double-booking")]
struct Cli {
    /// Read configuration from this file instead of ~/.config/daybook/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open an interactive session (the default)
    Session,
    /// Print the bookable time slots
    Slots,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => commands::session::run(&config),
        Commands::Slots => commands::slots::run(&config),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "daybook=debug,daybook_core=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&std::path::Path>) -> Result<DaybookConfig> {
    match path {
        Some(path) => DaybookConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => DaybookConfig::load().context("Failed to load config"),
    }
}
