//! Markdown entry documents.
//!
//! Entry documents are plain Markdown files with a simplified frontmatter
//! block. See [`frontmatter`] for the exact extraction rules.

pub mod frontmatter;

pub use frontmatter::{FrontmatterExtractor, ListField, ParserState, extract_entry, parse_entry};

