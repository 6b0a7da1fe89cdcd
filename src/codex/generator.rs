//! Corpus generation: walk, extract, filter, serialize, write.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};

use crate::constants::{ENTRY_FILE_NAME, OUTPUT_FILE_NAME};
use crate::core::{CodexError, Result};
use crate::markdown::extract_entry;
use crate::models::Corpus;
use crate::utils::fs::{find_files_named, safe_write};

/// Tunables for [`CodexGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Exact file name of the documents to collect.
    pub entry_file_name: String,
    /// File name of the codex written into the parent of the source directory.
    pub output_file_name: String,
    /// Visit directory entries in file-name order.
    pub sorted_walk: bool,
    /// Pretty-print the JSON output.
    pub pretty: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            entry_file_name: ENTRY_FILE_NAME.to_string(),
            output_file_name: OUTPUT_FILE_NAME.to_string(),
            sorted_walk: true,
            pretty: false,
        }
    }
}

/// Builds `codex.json` from a tree of entry documents.
///
/// All work is synchronous and sequential. A failure on any document aborts
/// the run before the output file is touched.
///
/// # Examples
///
/// ```rust,no_run
/// use codex2json::codex::CodexGenerator;
///
/// # fn example() -> codex2json::core::Result<()> {
/// let output = CodexGenerator::new().process("notes/codex")?;
/// println!("JSON generated at: {}", output.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodexGenerator {
    options: GeneratorOptions,
}

impl CodexGenerator {
    /// Generator with the default file names, sorted walk and compact JSON.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator with explicit options.
    #[must_use]
    pub const fn with_options(options: GeneratorOptions) -> Self {
        Self {
            options,
        }
    }

    /// Options in effect.
    #[must_use]
    pub const fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generate the codex and write it next to `source_dir`.
    ///
    /// The output goes to `<parent of source_dir>/codex.json`, replacing any
    /// existing file. Returns the absolute path of the written file.
    ///
    /// # Errors
    ///
    /// - [`CodexError::InvalidArgument`] if `source_dir` is empty, missing, not a
    ///   directory, or has no parent. Nothing is read in that case.
    /// - An I/O failure if any document cannot be read, the tree cannot be
    ///   walked, or the output cannot be written. No output is written.
    pub fn process(&self, source_dir: impl AsRef<Path>) -> Result<PathBuf> {
        let source_dir = source_dir.as_ref();
        let output_path = self.output_path_for(source_dir)?;

        let json = self.generate_json(source_dir)?;
        safe_write(&output_path, &json)?;

        info!(path = %output_path.display(), "codex written");
        Ok(output_path)
    }

    /// Serialize the corpus found under `source_dir` without writing it.
    pub fn generate_json(&self, source_dir: impl AsRef<Path>) -> Result<String> {
        let corpus = self.collect(source_dir)?;
        let json = if self.options.pretty {
            serde_json::to_string_pretty(&corpus)?
        } else {
            serde_json::to_string(&corpus)?
        };
        Ok(json)
    }

    /// Extract every entry document under `source_dir`, keeping those with metadata.
    ///
    /// Entries keep the order of the directory walk.
    pub fn collect(&self, source_dir: impl AsRef<Path>) -> Result<Corpus> {
        let source_dir = validate_source_dir(source_dir.as_ref())?;

        let paths =
            find_files_named(&source_dir, &self.options.entry_file_name, self.options.sorted_walk)?;

        let mut corpus = Corpus::with_capacity(paths.len());
        for path in &paths {
            let entry = extract_entry(path)?;
            if entry.has_metadata() {
                corpus.push(entry);
            } else {
                debug!(path = %path.display(), "skipping document without metadata");
            }
        }

        info!(
            found = paths.len(),
            kept = corpus.len(),
            source = %source_dir.display(),
            "collected entries"
        );
        Ok(corpus)
    }

    /// Absolute path the codex for `source_dir` is written to.
    ///
    /// # Errors
    ///
    /// [`CodexError::InvalidArgument`] if `source_dir` is not a usable directory or
    /// has no parent (a filesystem root).
    pub fn output_path_for(&self, source_dir: impl AsRef<Path>) -> Result<PathBuf> {
        let source_dir = validate_source_dir(source_dir.as_ref())?;
        let parent = source_dir.parent().ok_or_else(|| {
            CodexError::invalid_argument(format!(
                "Source directory '{}' has no parent directory to write {} into.",
                source_dir.display(),
                self.options.output_file_name
            ))
        })?;

        Ok(parent.join(&self.options.output_file_name))
    }
}

/// Check the source directory and return it as an absolute path.
///
/// The path is made absolute lexically: symlinks are not resolved, so the
/// output lands next to the directory as the caller named it.
fn validate_source_dir(source_dir: &Path) -> Result<PathBuf> {
    if source_dir.as_os_str().is_empty() || !source_dir.is_dir() {
        return Err(CodexError::invalid_argument(
            "Source directory not provided or does not exist.",
        ));
    }

    let absolute = std::path::absolute(source_dir).map_err(|e| {
        CodexError::invalid_argument(format!(
            "Source directory '{}' cannot be resolved: {e}",
            source_dir.display()
        ))
    })?;

    Ok(normalize_lexically(&absolute))
}

/// Drop `.` components and fold `..` into its parent without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
