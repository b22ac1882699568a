//! # Kimsufi CLI
//!
//! Command-line interface for Kimsufi order option selection.
//! This crate provides the CLI structure, argument parsing, and command routing.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod display;
pub mod logging;

// Re-export common types
pub use config::Config;

use clap::{Parser, Subcommand};
use thiserror::Error;

/// Application-level errors for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Core(#[from] kimsufi_core::CoreError),

    #[error("{0}")]
    Utils(#[from] kimsufi_utils::UtilsError),

    #[error("Config error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, CliError>;

/// Main CLI struct
#[derive(Parser)]
#[command(name = "kimsufi-order")]
#[command(about = "Select and combine Kimsufi server order options")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG still wins when set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List the mandatory options of a catalog
    Mandatory(commands::mandatory::MandatoryArgs),
    /// Pick the cheapest mandatory option of every family
    Cheapest(commands::cheapest::CheapestArgs),
    /// Enumerate option combinations across families
    #[command(
        about = "Enumerate option combinations across families",
        long_about = "Enumerate option combinations across families.\n\n\
        Every family listed more than once is an alternative; each output row \
        picks one plan code per family. With --catalog, rows are completed \
        with the cheapest mandatory options of the missing families.\n\n\
        Examples:\n  \
        kimsufi-order combinations --options memory=ram-32g,memory=ram-64g\n  \
        kimsufi-order combinations -o memory=ram-32g -o storage=ssd-1,storage=ssd-2 --cartesian\n  \
        kimsufi-order combinations --catalog 24ska01.json -o memory=ram-32g,memory=ram-64g"
    )]
    Combinations(commands::combinations::CombinationsArgs),
    /// Split options by plan code
    Split(commands::split::SplitArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Show configuration file path
    Path,
    /// Get configuration value
    Get {
        /// Configuration key (price.duration, price.pricing_mode, display.format)
        key: String,
    },
    /// Set configuration value
    Set {
        /// Configuration key (price.duration, price.pricing_mode, display.format)
        key: String,
        /// Configuration value
        value: String,
    },
    /// Reset configuration to defaults
    Reset,
}

/// Main CLI runner
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let config = Config::new()?;
    log::debug!("Using configuration at {}", config.config_path.display());

    match cli.command {
        Commands::Mandatory(args) => commands::mandatory::handle(args, &config).await,
        Commands::Cheapest(args) => commands::cheapest::handle(args, &config).await,
        Commands::Combinations(args) => commands::combinations::handle(args, &config).await,
        Commands::Split(args) => commands::split::handle(args, &config).await,
        Commands::Config { action } => commands::config::handle(action, &config).await,
    }
}
