//! # pagestack CLI
//!
//! Command-line driver for pagestack page navigation.
//!
//! ## Usage
//!
//! - `pagestack` - Run the built-in login demo
//! - `pagestack pages` - List the pages declared in the manifest
//! - `pagestack replay steps.json` - Replay a navigation script on a simulated host

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod pages;
mod session;

use commands::{demo_command, pages_command, replay_command};
use config::CliConfigLoader;

/// pagestack - page-stack navigation for mini-program style hosts
#[derive(Parser)]
#[command(name = "pagestack")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Drive a page-stack router against a simulated host")]
#[command(long_about = None)]
struct Cli {
    /// Manifest file or directory path
    #[arg(short, long, env = "PAGESTACK_CONFIG")]
    config: Option<PathBuf>,

    /// Parameter storage file
    #[arg(long, env = "PAGESTACK_STORAGE")]
    storage: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered pages
    Pages,

    /// Replay a JSON navigation script
    Replay {
        /// Script file: a JSON array of steps
        script: PathBuf,
    },

    /// Run the built-in login demo
    Demo,
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(storage_path) = &cli.storage {
        loader = loader.with_storage_override(storage_path.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    pagestack_core::init_tracing_with_debug(cli.verbose);

    let config_loader = build_config_loader(&cli);

    match cli.command {
        Some(Commands::Pages) => pages_command(config_loader).await,
        Some(Commands::Replay { script }) => replay_command(config_loader, script).await,
        Some(Commands::Demo) | None => demo_command().await,
    }
}
