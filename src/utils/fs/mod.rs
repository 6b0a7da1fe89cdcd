//! File system utilities.
//!
//! - **Discovery**: exact-name recursive search with `walkdir`
//! - **Atomic writes**: temp-file-and-rename so output is all or nothing
//!
//! # Examples
//!
//! ```rust,no_run
//! use codex2json::utils::fs::{find_files_named, safe_write};
//! use std::path::Path;
//!
//! # fn example() -> codex2json::core::Result<()> {
//! let entries = find_files_named(Path::new("codex"), "entry.md", true)?;
//! safe_write(Path::new("count.txt"), &entries.len().to_string())?;
//! # Ok(())
//! # }
//! ```

pub mod atomic;
pub mod discovery;

pub use atomic::{atomic_write, safe_write};
pub use discovery::find_files_named;
