//! Data model shared by the extractor and the codex generator.
//!
//! An [`ExtractedEntry`] pairs the frontmatter of one `entry.md` document with
//! its flattened body text. A [`Corpus`] is the ordered list of entries that
//! end up in `codex.json`.
//!
//! The serialized shape is fixed by downstream consumers of `codex.json`:
//!
//! ```json
//! [
//!   { "Metadata": { "title": "Aster", "tags": "flower, purple" }, "Content": "Body text." }
//! ]
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Frontmatter fields of a single document, in the order they were first seen.
///
/// Overwriting a key keeps its original position, so output stays stable when
/// a document repeats a field.
pub type MetadataRecord = IndexMap<String, String>;

/// Ordered sequence of entries written to `codex.json`.
pub type Corpus = Vec<ExtractedEntry>;

/// Metadata and body content extracted from one document.
///
/// Entries are built by the extractor and are not modified afterwards; fields
/// are exposed through accessors only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntry {
    #[serde(rename = "Metadata")]
    metadata: MetadataRecord,

    #[serde(rename = "Content")]
    content: String,
}

impl ExtractedEntry {
    /// Create an entry from already extracted parts.
    #[must_use]
    pub const fn new(metadata: MetadataRecord, content: String) -> Self {
        Self {
            metadata,
            content,
        }
    }

    /// Frontmatter fields of the document.
    #[must_use]
    pub const fn metadata(&self) -> &MetadataRecord {
        &self.metadata
    }

    /// Body lines joined with single spaces.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Look up one metadata field.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Whether the entry carries at least one metadata field.
    ///
    /// Entries without metadata are left out of the codex.
    #[must_use]
    pub fn has_metadata(&self) -> bool {
        !self.metadata.is_empty()
    }

    /// Split the entry into its metadata and content.
    #[must_use]
    pub fn into_parts(self) -> (MetadataRecord, String) {
        (self.metadata, self.content)
    }
}
