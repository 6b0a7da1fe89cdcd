//! codex2json - collect `entry.md` frontmatter into a single JSON codex
//!
//! A codex is a directory tree in which every record lives in its own folder as
//! an `entry.md` file: a small frontmatter block followed by free text.
//! codex2json walks the tree, extracts each document's fields and body, and
//! writes them as one JSON array to `codex.json` next to the tree.
//!
//! # Entry Format
//!
//! ```markdown
//! ---
//! title: Aster
//! family: Asteraceae
//! tags:
//!   - flower
//!   - perennial
//! aliases:
//!   - Michaelmas daisy
//! ---
//! Asters bloom late
//! in the season.
//! ```
//!
//! becomes
//!
//! ```json
//! {
//!   "Metadata": {
//!     "title": "Aster",
//!     "family": "Asteraceae",
//!     "tags": "flower, perennial",
//!     "aliases": "Michaelmas daisy"
//!   },
//!   "Content": "Asters bloom late in the season."
//! }
//! ```
//!
//! Documents without any metadata are left out.
//!
//! # Modules
//!
//! - [`markdown`] - Line-based frontmatter and content extraction
//! - [`codex`] - Directory walk, filtering, and `codex.json` output
//! - [`models`] - Extracted entry and corpus types
//! - [`core`] - Error types and user-facing error reporting
//! - [`config`] - Optional TOML configuration
//! - [`cli`] - Command-line interface
//! - [`utils`] - File discovery and atomic writes
//!
//! # Library Usage
//!
//! ```rust,no_run
//! use codex2json::codex::CodexGenerator;
//!
//! # fn example() -> codex2json::core::Result<()> {
//! let output = CodexGenerator::new().process("notes/codex")?;
//! assert!(output.ends_with("codex.json"));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod codex;
pub mod config;
pub mod constants;
pub mod core;
pub mod markdown;
pub mod models;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
