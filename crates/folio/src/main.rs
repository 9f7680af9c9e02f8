//! Folio CLI - builds a personal academic website from templates and YAML data.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Builds a personal academic website from templates and YAML data")]
#[command(version)]
pub struct Cli {
    /// Command to run (defaults to build)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Project root containing src/ and docs/
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the whole site
    Build,

    /// Scaffold a starter project
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command.unwrap_or(Commands::Build) {
        Commands::Build => commands::build::run(&cli.root)?,
        Commands::Init { yes } => commands::init::run(&cli.root, yes)?,
    }

    Ok(())
}
