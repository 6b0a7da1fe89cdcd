//! Codex generation.
//!
//! The [`CodexGenerator`] walks a source directory for entry documents, runs the
//! frontmatter extractor on each, drops documents without metadata, and writes
//! the surviving entries as a JSON array to `codex.json` in the parent of the
//! source directory.
//!
//! ```text
//! notes/
//! ├── codex/              <- source directory
//! │   ├── aster/entry.md
//! │   └── fern/entry.md
//! └── codex.json          <- output
//! ```

mod generator;

pub use generator::{CodexGenerator, GeneratorOptions};
