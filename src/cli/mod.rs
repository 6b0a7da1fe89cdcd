//! Command-line interface for codex2json.
//!
//! # Available Commands
//!
//! - `generate` - Build `codex.json` from the `entry.md` files under a directory
//! - `inspect` - Show what the extractor reads from a single document
//! - `config` - Show, create, or locate the configuration file
//!
//! # Usage
//!
//! ```bash
//! # Writes notes/codex.json
//! codex2json generate notes/codex
//!
//! # Print the JSON instead of writing it
//! codex2json generate notes/codex --stdout --pretty
//!
//! # Check a single document
//! codex2json inspect notes/codex/aster/entry.md
//! ```
//!
//! # Global Options
//!
//! - `--verbose` / `-v` - Debug logging
//! - `--quiet` / `-q` - Only log errors
//! - `--config` / `-c` - Config file path (also `CODEX2JSON_CONFIG`)

mod config;
mod generate;
mod inspect;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Settings derived from the global flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,

    /// Explicit config file path.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Install the global `tracing` subscriber, writing to stderr.
    ///
    /// `RUST_LOG` takes precedence over the level chosen by the flags.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Top-level argument parser.
#[derive(Parser)]
#[command(
    name = "codex2json",
    about = "Collect entry.md frontmatter and content into codex.json",
    version,
    long_about = "codex2json walks a directory for entry.md documents, extracts their \
                  frontmatter fields and body text, and writes the result as a JSON array \
                  to codex.json in the parent directory."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build codex.json from a directory of entry.md files
    Generate(generate::GenerateCommand),

    /// Show the metadata and content extracted from one document
    Inspect(inspect::InspectCommand),

    /// Manage the configuration file
    Config(config::ConfigCommand),
}

impl Cli {
    /// Derive [`CliConfig`] from the global flags.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: log_level.to_string(),
            config_path: self.config.clone(),
        }
    }

    /// Run the selected command with an explicit [`CliConfig`].
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        match self.command {
            Commands::Generate(cmd) => cmd.execute(config.config_path).await,
            Commands::Inspect(cmd) => cmd.execute(config.config_path).await,
            Commands::Config(cmd) => cmd.execute(config.config_path).await,
        }
    }
}
