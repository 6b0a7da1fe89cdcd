//! Show what the extractor reads from a single document.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::config::GlobalConfig;
use crate::markdown::extract_entry;

/// Command to extract and print one document.
#[derive(Args)]
pub struct InspectCommand {
    /// Document to extract
    file: PathBuf,
}

impl InspectCommand {
    /// Execute the command with an optional config file path.
    pub async fn execute(self, config_path: Option<PathBuf>) -> Result<()> {
        let config = GlobalConfig::load_with_optional(config_path).await?;

        let entry = extract_entry(&self.file)?;
        let json = serde_json::to_string_pretty(&entry).context("Failed to serialize entry")?;
        println!("{json}");

        let named_as_entry =
            self.file.file_name().is_some_and(|name| name == config.entry_file_name.as_str());
        if !named_as_entry {
            eprintln!(
                "{}: '{}' is not named {} and is not picked up by generate",
                "note".yellow(),
                self.file.display(),
                config.entry_file_name
            );
        }

        if !entry.has_metadata() {
            eprintln!(
                "{}: no metadata found; this document is left out of the codex",
                "note".yellow()
            );
        }

        Ok(())
    }
}
