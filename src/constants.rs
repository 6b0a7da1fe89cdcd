//! Constants shared across the codex2json codebase.
//!
//! File names, frontmatter markers and separators used by the extractor and
//! the generator. Defining them centrally keeps the parser and its tests in
//! agreement about the exact text they match.

/// Name of the documents collected into the codex (exact, case-sensitive match).
pub const ENTRY_FILE_NAME: &str = "entry.md";

/// Name of the JSON file written next to the source directory.
pub const OUTPUT_FILE_NAME: &str = "codex.json";

/// Line that opens and closes a frontmatter block once trimmed.
pub const FRONTMATTER_DELIMITER: &str = "---";

/// Metadata key whose list items are accumulated from `- item` lines.
pub const TAGS_FIELD: &str = "tags";

/// Metadata key whose list items are accumulated from `- item` lines.
pub const ALIASES_FIELD: &str = "aliases";

/// Marker that starts a list item line inside a `tags:` or `aliases:` block.
pub const LIST_ITEM_MARKER: char = '-';

/// Separator placed between accumulated list items.
pub const LIST_ITEM_SEPARATOR: &str = ", ";

/// UTF-8 byte order mark some editors put at the start of a document.
pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// Separator placed between body lines when flattening the content.
pub const CONTENT_LINE_SEPARATOR: &str = " ";

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "CODEX2JSON_CONFIG";
