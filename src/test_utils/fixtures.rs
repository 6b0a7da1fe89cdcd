//! Sample entry documents.

use crate::models::MetadataRecord;

/// An entry document together with the metadata and content it should yield.
#[derive(Debug, Clone)]
pub struct EntryFixture {
    /// Raw document text
    pub text: String,
    /// Metadata the extractor is expected to produce
    pub metadata: MetadataRecord,
    /// Content the extractor is expected to produce
    pub content: String,
}

impl EntryFixture {
    /// Document with scalar fields, a tag list, an alias and two body paragraphs.
    pub fn aster() -> Self {
        let text = "\
---
title: Aster
family: Asteraceae
tags:
  - flower
  - perennial
aliases:
  - Michaelmas daisy
---

Asters bloom late
in the season.

They attract pollinators.
";
        Self {
            text: text.to_string(),
            metadata: record(&[
                ("title", "Aster"),
                ("family", "Asteraceae"),
                ("tags", "flower, perennial"),
                ("aliases", "Michaelmas daisy"),
            ]),
            content: "Asters bloom late in the season. They attract pollinators.".to_string(),
        }
    }

    /// Minimal document with one field and one body line.
    pub fn simple(title: &str, body: &str) -> Self {
        Self {
            text: format!("---\ntitle: {title}\n---\n{body}\n"),
            metadata: record(&[("title", title)]),
            content: body.trim().to_string(),
        }
    }

    /// Document with body text but no frontmatter; excluded from the codex.
    pub fn without_metadata() -> Self {
        Self {
            text: "# Loose notes\n\nNothing to index here.\n".to_string(),
            metadata: MetadataRecord::new(),
            content: String::new(),
        }
    }

    /// Empty document; excluded from the codex.
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            metadata: MetadataRecord::new(),
            content: String::new(),
        }
    }
}

fn record(pairs: &[(&str, &str)]) -> MetadataRecord {
    pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
}
