//! codex2json CLI entry point
//!
//! Parses arguments, sets up logging, runs the selected command and reports
//! failures as user-friendly errors.

use anyhow::Result;
use clap::Parser;
use codex2json::cli;
use codex2json::core::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let config = cli.build_config();
    config.init_logging();

    match cli.execute_with_config(config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
