//! Atomic file writes.
//!
//! Content is written to a temporary file next to the destination, synced,
//! and then renamed over the target. Readers see either the old file or the
//! complete new one, never a partial write.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::{CodexError, Result};

/// Safely writes a string to a file using atomic operations.
///
/// Convenience wrapper around [`atomic_write`].
///
/// # Examples
///
/// ```rust,no_run
/// use codex2json::utils::fs::safe_write;
/// use std::path::Path;
///
/// # fn example() -> codex2json::core::Result<()> {
/// safe_write(Path::new("codex.json"), "[]")?;
/// # Ok(())
/// # }
/// ```
pub fn safe_write(path: &Path, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Atomically writes bytes to a file, replacing any existing file.
///
/// The parent directory must already exist; it is not created. A new file gets
/// the usual permissions for the process umask; an existing file keeps its
/// permissions.
///
/// # Errors
///
/// Returns [`CodexError::OutputWriteError`] if the temporary file cannot be
/// created, written, synced or renamed. The target is left untouched in that
/// case.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let write_error = |reason: String| CodexError::OutputWriteError {
        path: path.display().to_string(),
        reason,
    };

    let temp_path = temp_path_for(path);
    let result = write_temp(&temp_path, path, content).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| format!("failed to rename temp file: {e}"))
    });

    if let Err(reason) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(write_error(reason));
    }

    Ok(())
}

fn write_temp(temp_path: &Path, target: &Path, content: &[u8]) -> std::result::Result<(), String> {
    let mut file = fs::File::create(temp_path).map_err(|e| {
        format!("failed to create temp file {}: {e}", temp_path.display())
    })?;

    file.write_all(content).map_err(|e| format!("failed to write temp file: {e}"))?;
    file.sync_all().map_err(|e| format!("failed to sync to disk: {e}"))?;

    if let Ok(metadata) = fs::metadata(target) {
        fs::set_permissions(temp_path, metadata.permissions())
            .map_err(|e| format!("failed to copy permissions: {e}"))?;
    }

    Ok(())
}

/// `codex.json` -> `codex.json.tmp`, in the same directory.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map_or_else(OsString::new, OsString::from);
    name.push(".tmp");
    path.with_file_name(name)
}
