//! Line-oriented frontmatter and content extraction.
//!
//! Entry documents carry a simplified frontmatter block: `key: value` lines plus
//! two list fields, `tags:` and `aliases:`, whose `- item` lines are joined with
//! `", "`. Everything after the closing delimiter is body text, flattened to a
//! single line.
//!
//! ```markdown
//! ---
//! title: Aster
//! tags:
//!   - flower
//!   - purple
//! ---
//! Asters bloom late
//! in the season.
//! ```
//!
//! yields `title = "Aster"`, `tags = "flower, purple"` and the content
//! `"Asters bloom late in the season."`.
//!
//! This is deliberately not a YAML parser: there are no nested maps, quoted
//! strings or escapes. Malformed lines are ignored rather than reported.
//!
//! # Delimiters
//!
//! Every trimmed `---` line toggles the parser. The first opens the metadata
//! block, the second closes it and starts the content. A later `---` (for
//! example a Markdown horizontal rule in the body) re-opens a metadata block,
//! and the lines that follow are read as metadata until the next `---`.

use std::path::Path;

use tracing::trace;

use crate::constants::{
    ALIASES_FIELD, BYTE_ORDER_MARK, CONTENT_LINE_SEPARATOR, FRONTMATTER_DELIMITER, LIST_ITEM_MARKER,
    LIST_ITEM_SEPARATOR, TAGS_FIELD,
};
use crate::core::{CodexError, Result};
use crate::models::{ExtractedEntry, MetadataRecord};

/// Position of the parser relative to the `---` delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// No delimiter seen yet; lines are ignored.
    BeforeMetadata,
    /// Between an opening and a closing delimiter.
    InMetadata,
    /// After a closing delimiter; lines are body content.
    InContent,
}

impl ParserState {
    /// State after reading a delimiter line.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::BeforeMetadata | Self::InContent => Self::InMetadata,
            Self::InMetadata => Self::InContent,
        }
    }
}

/// List field currently collecting `- item` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    /// Collecting into `tags`
    Tags,
    /// Collecting into `aliases`
    Aliases,
}

impl ListField {
    /// Metadata key the list accumulates into.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Tags => TAGS_FIELD,
            Self::Aliases => ALIASES_FIELD,
        }
    }

    /// Recognise a list header line (`tags:` or `aliases:`).
    fn from_header(line: &str) -> Option<Self> {
        let name = line.strip_suffix(':')?;
        if name == TAGS_FIELD {
            Some(Self::Tags)
        } else if name == ALIASES_FIELD {
            Some(Self::Aliases)
        } else {
            None
        }
    }
}

/// Incremental extractor fed one line at a time.
///
/// Most callers want [`parse_entry`] or [`extract_entry`]; the extractor is
/// public so the state can be observed in tests and tooling.
#[derive(Debug, Clone)]
pub struct FrontmatterExtractor {
    state: ParserState,
    reading: Option<ListField>,
    metadata: MetadataRecord,
    content: Vec<String>,
}

impl Default for FrontmatterExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FrontmatterExtractor {
    /// Create an extractor positioned before any metadata.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ParserState::BeforeMetadata,
            reading: None,
            metadata: MetadataRecord::new(),
            content: Vec::new(),
        }
    }

    /// Current delimiter state.
    #[must_use]
    pub const fn state(&self) -> ParserState {
        self.state
    }

    /// List field currently being collected, if any.
    #[must_use]
    pub const fn reading(&self) -> Option<ListField> {
        self.reading
    }

    /// Feed one raw line (without its line terminator).
    pub fn push_line(&mut self, line: &str) {
        let line = line.trim();

        // Blank lines never end a list and never reach the content.
        if line.is_empty() {
            return;
        }

        if line == FRONTMATTER_DELIMITER {
            let next = self.state.toggle();
            trace!(from = ?self.state, to = ?next, "frontmatter delimiter");
            self.state = next;
            return;
        }

        match self.state {
            ParserState::BeforeMetadata => {}
            ParserState::InMetadata => self.push_metadata_line(line),
            ParserState::InContent => self.content.push(line.to_string()),
        }
    }

    fn push_metadata_line(&mut self, line: &str) {
        let is_item = line.starts_with(LIST_ITEM_MARKER);

        if self.reading.is_some() && !is_item {
            self.reading = None;
        }

        if let Some(field) = ListField::from_header(line) {
            self.reading = Some(field);
            self.metadata.insert(field.key().to_string(), String::new());
            return;
        }

        if let Some(field) = self.reading {
            // `reading` survives only on item lines, see above
            let item = line.trim_start_matches(LIST_ITEM_MARKER).trim();
            let value = self.metadata.entry(field.key().to_string()).or_default();
            if !value.is_empty() {
                value.push_str(LIST_ITEM_SEPARATOR);
            }
            value.push_str(item);
            return;
        }

        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim();
            // A scalar `tags: x` must not clobber the list; `aliases` has no such guard.
            if key != TAGS_FIELD {
                self.metadata.insert(key.to_string(), value.trim().to_string());
            }
        }
    }

    /// Finish extraction and build the entry.
    #[must_use]
    pub fn finish(self) -> ExtractedEntry {
        ExtractedEntry::new(self.metadata, self.content.join(CONTENT_LINE_SEPARATOR))
    }
}

/// Extract metadata and content from in-memory document text.
///
/// Never fails: text without delimiters simply yields an empty entry. A leading
/// byte order mark is ignored.
///
/// # Examples
///
/// ```rust
/// use codex2json::markdown::parse_entry;
///
/// let entry = parse_entry("---\ntitle: Aster\naliases:\n- Michaelmas daisy\n---\nA late bloomer.");
/// assert_eq!(entry.field("title"), Some("Aster"));
/// assert_eq!(entry.field("aliases"), Some("Michaelmas daisy"));
/// assert_eq!(entry.content(), "A late bloomer.");
/// ```
#[must_use]
pub fn parse_entry(text: &str) -> ExtractedEntry {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let mut extractor = FrontmatterExtractor::new();
    for line in text.lines() {
        extractor.push_line(line);
    }
    extractor.finish()
}

/// Read a document from disk and extract its metadata and content.
///
/// # Errors
///
/// Returns [`CodexError::FileReadError`] if the file is missing, unreadable, or
/// not valid UTF-8.
pub fn extract_entry(path: &Path) -> Result<ExtractedEntry> {
    let text = std::fs::read_to_string(path).map_err(|e| CodexError::FileReadError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(parse_entry(&text))
}
