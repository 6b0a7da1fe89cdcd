//! Temporary codex trees for tests.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fixtures::EntryFixture;
use crate::constants::{ENTRY_FILE_NAME, OUTPUT_FILE_NAME};

/// A temporary directory holding a `codex/` source tree.
///
/// The generated `codex.json` lands in [`TestEnvironment::root`], the parent of
/// the source directory. Everything is removed when the environment is dropped.
pub struct TestEnvironment {
    temp_dir: TempDir,
    source_dir: PathBuf,
}

impl TestEnvironment {
    /// Create an environment with an empty `codex/` source directory.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temp directory")?;
        // Canonical so paths compare equal to generator output on every platform
        let root = temp_dir.path().canonicalize().context("Failed to resolve temp directory")?;
        let source_dir = root.join("codex");
        fs::create_dir_all(&source_dir).context("Failed to create source directory")?;

        Ok(Self {
            temp_dir,
            source_dir,
        })
    }

    /// Parent of the source directory, where `codex.json` is written.
    pub fn root(&self) -> &Path {
        self.source_dir.parent().unwrap_or_else(|| self.temp_dir.path())
    }

    /// The `codex/` source directory.
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Expected location of `codex.json`.
    pub fn output_path(&self) -> PathBuf {
        self.root().join(OUTPUT_FILE_NAME)
    }

    /// Write `fixture` as `codex/<relative_dir>/entry.md`.
    pub fn write_entry(&self, relative_dir: &str, fixture: &EntryFixture) -> Result<PathBuf> {
        self.write_file(&format!("{relative_dir}/{ENTRY_FILE_NAME}"), &fixture.text)
    }

    /// Write arbitrary text below the source directory, creating parents.
    pub fn write_file(&self, relative_path: &str, content: &str) -> Result<PathBuf> {
        let path = self.source_dir.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Read and parse the generated `codex.json`.
    pub fn read_output(&self) -> Result<serde_json::Value> {
        let path = self.output_path();
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&json).context("codex.json is not valid JSON")
    }
}
