//! File discovery in directory trees.
//!
//! Entry documents are found with a recursive `walkdir` traversal that matches
//! file names exactly.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::core::{CodexError, Result};

/// Recursively finds files whose name is exactly `file_name`.
///
/// The match is case-sensitive and on the whole file name, so `entry.md` does
/// not match `Entry.md` or `old-entry.md`.
///
/// # Arguments
///
/// * `dir` - The directory to search in
/// * `file_name` - The exact file name to match
/// * `sorted` - Visit directory entries in file-name order, making the result
///   reproducible across runs; otherwise filesystem order is used
///
/// # Errors
///
/// Any entry the walk cannot read (for example a subdirectory without read
/// permission) aborts the search with [`CodexError::DirectoryWalkError`].
///
/// # Examples
///
/// ```rust,no_run
/// use codex2json::utils::fs::find_files_named;
/// use std::path::Path;
///
/// # fn example() -> codex2json::core::Result<()> {
/// let entries = find_files_named(Path::new("codex"), "entry.md", true)?;
/// # Ok(())
/// # }
/// ```
pub fn find_files_named(dir: &Path, file_name: &str, sorted: bool) -> Result<Vec<PathBuf>> {
    let mut walker = WalkDir::new(dir).follow_links(true);
    if sorted {
        walker = walker.sort_by_file_name();
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| CodexError::DirectoryWalkError {
            path: e.path().unwrap_or(dir).display().to_string(),
            reason: e.to_string(),
        })?;

        if entry.file_type().is_file() && entry.file_name() == file_name {
            debug!(path = %entry.path().display(), "found document");
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
