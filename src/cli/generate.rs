//! Build `codex.json` from a directory tree of entry documents.
//!
//! # Examples
//!
//! ```bash
//! # Writes notes/codex.json
//! codex2json generate notes/codex
//!
//! # Pretty JSON on stdout, no file written
//! codex2json generate notes/codex --stdout --pretty
//! ```

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::codex::{CodexGenerator, GeneratorOptions};
use crate::config::GlobalConfig;

/// Command to generate the codex for a source directory.
#[derive(Args)]
pub struct GenerateCommand {
    /// Directory searched recursively for entry.md files
    source_dir: String,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,

    /// Print the JSON to stdout instead of writing codex.json
    #[arg(long)]
    stdout: bool,
}

impl GenerateCommand {
    /// Execute the command with an optional config file path.
    pub async fn execute(self, config_path: Option<PathBuf>) -> Result<()> {
        let config = GlobalConfig::load_with_optional(config_path).await?;

        let mut options = GeneratorOptions::from(&config);
        options.pretty |= self.pretty;
        let generator = CodexGenerator::with_options(options);

        let source_dir = self.source_dir;

        // The generator is blocking file I/O; keep it off the async workers.
        if self.stdout {
            let json = tokio::task::spawn_blocking(move || generator.generate_json(&source_dir))
                .await
                .context("Codex generation task failed")??;
            println!("{json}");
            return Ok(());
        }

        let output = tokio::task::spawn_blocking(move || generator.process(&source_dir))
            .await
            .context("Codex generation task failed")??;

        println!("JSON generated at: {}", output.display());
        Ok(())
    }
}
