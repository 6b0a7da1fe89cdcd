//! Global configuration for codex2json.
//!
//! The configuration is an optional TOML file. When it does not exist every
//! setting takes its default, which reproduces the fixed behavior: collect
//! `entry.md` files and write compact `codex.json` next to the source
//! directory.
//!
//! # Location
//!
//! In order of precedence:
//! 1. The `--config <PATH>` command-line flag
//! 2. The `CODEX2JSON_CONFIG` environment variable
//! 3. `~/.codex2json/config.toml` (`%LOCALAPPDATA%\codex2json\config.toml` on Windows)
//!
//! # Format
//!
//! ```toml
//! entry_file_name = "entry.md"
//! output_file_name = "codex.json"
//! sorted_walk = true
//! pretty = false
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::constants::{CONFIG_PATH_ENV, ENTRY_FILE_NAME, OUTPUT_FILE_NAME};
use crate::core::CodexError;

fn default_entry_file_name() -> String {
    ENTRY_FILE_NAME.to_string()
}

fn default_output_file_name() -> String {
    OUTPUT_FILE_NAME.to_string()
}

const fn default_sorted_walk() -> bool {
    true
}

/// Settings read from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfig {
    /// Exact file name of the documents to collect.
    #[serde(default = "default_entry_file_name")]
    pub entry_file_name: String,

    /// File name of the codex written into the parent of the source directory.
    #[serde(default = "default_output_file_name")]
    pub output_file_name: String,

    /// Walk directories in file-name order so repeated runs produce identical output.
    #[serde(default = "default_sorted_walk")]
    pub sorted_walk: bool,

    /// Pretty-print the JSON output.
    #[serde(default)]
    pub pretty: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            entry_file_name: default_entry_file_name(),
            output_file_name: default_output_file_name(),
            sorted_walk: default_sorted_walk(),
            pretty: false,
        }
    }
}

impl GlobalConfig {
    /// Load from an explicit path, falling back to [`GlobalConfig::resolve_path`].
    ///
    /// A missing file yields the defaults.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if path.exists() {
            Self::load_from(&path).await
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load and validate a config file.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate()?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write the config as pretty TOML, creating parent directories.
    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        Ok(())
    }

    /// Check that the configured file names are usable.
    ///
    /// Names must be non-empty and must not contain path separators, since
    /// they are matched against and joined onto single directory entries.
    pub fn validate(&self) -> std::result::Result<(), CodexError> {
        for (field, value) in [
            ("entry_file_name", &self.entry_file_name),
            ("output_file_name", &self.output_file_name),
        ] {
            if value.trim().is_empty() {
                return Err(CodexError::ConfigError {
                    message: format!("{field} must not be empty"),
                });
            }
            if value.contains(['/', '\\']) {
                return Err(CodexError::ConfigError {
                    message: format!("{field} must be a file name, got '{value}'"),
                });
            }
        }
        Ok(())
    }

    /// Pick the config path: explicit, then `CODEX2JSON_CONFIG`, then the default.
    pub fn resolve_path(path: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = path {
            return Ok(path);
        }
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV)
            && !path.is_empty()
        {
            return Ok(PathBuf::from(path));
        }
        Self::default_path()
    }

    /// Default location of the config file.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join("codex2json")
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(".codex2json")
        };

        Ok(config_dir.join("config.toml"))
    }
}
