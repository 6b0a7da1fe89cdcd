//! Common helpers for codex2json integration tests

// Not every test file uses every helper
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

/// `codex2json` binary isolated from the user's config file.
///
/// The config path points inside `config_dir`, where no file exists unless a
/// test writes one, so every run starts from the defaults.
pub fn codex2json_command(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("codex2json").unwrap();
    cmd.env("CODEX2JSON_CONFIG", config_dir.join("config.toml")).env_remove("RUST_LOG");
    cmd
}
