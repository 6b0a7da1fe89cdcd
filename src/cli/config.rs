//! Manage the codex2json configuration file.
//!
//! ```bash
//! codex2json config            # same as `config show`
//! codex2json config init       # write a config with the defaults
//! codex2json config path       # print where the config is read from
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::GlobalConfig;

/// Command to manage the configuration file.
#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: Option<ConfigSubcommands>,
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Write a config file with the default settings
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show the active configuration
    Show,

    /// Print the config file path
    Path,
}

impl ConfigCommand {
    /// Execute the command with an optional config file path.
    pub async fn execute(self, config_path: Option<PathBuf>) -> Result<()> {
        match self.command {
            Some(ConfigSubcommands::Init {
                force,
            }) => Self::init(force, config_path).await,
            Some(ConfigSubcommands::Show) | None => Self::show(config_path).await,
            Some(ConfigSubcommands::Path) => Self::show_path(config_path),
        }
    }

    async fn init(force: bool, config_path: Option<PathBuf>) -> Result<()> {
        let config_path = GlobalConfig::resolve_path(config_path)?;

        if config_path.exists() && !force {
            println!("{} Config already exists at: {}", "✗".red(), config_path.display());
            println!("   Use --force to overwrite");
            return Ok(());
        }

        let config = GlobalConfig::default();
        config.save_to(&config_path).await?;

        println!("{} Created config at: {}", "✓".green(), config_path.display());
        println!("\n{}", toml::to_string_pretty(&config)?);
        Ok(())
    }

    async fn show(config_path: Option<PathBuf>) -> Result<()> {
        let path = GlobalConfig::resolve_path(config_path)?;
        let config = GlobalConfig::load_with_optional(Some(path.clone())).await?;

        println!("{}", "Configuration".bold());
        if path.exists() {
            println!("Location: {}\n", path.display());
        } else {
            println!("Location: {} {}\n", path.display(), "(not found, using defaults)".dimmed());
        }
        println!("{}", toml::to_string_pretty(&config)?);
        Ok(())
    }

    fn show_path(config_path: Option<PathBuf>) -> Result<()> {
        let path = GlobalConfig::resolve_path(config_path)?;
        println!("{}", path.display());
        Ok(())
    }
}
