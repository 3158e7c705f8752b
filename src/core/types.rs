//! Core types shared across kb-extract modules

use serde::{Deserialize, Serialize};

/// One successfully extracted document.
///
/// `source` is the file's base name with directory components stripped;
/// `content` is the document's page texts concatenated, with a newline
/// appended after every page (including the last).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeRecord {
    pub source: String,
    pub content: String,
}

impl KnowledgeRecord {
    pub fn new(source: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            content: content.into(),
        }
    }
}

/// Counters summarizing one extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractReport {
    /// `*.pdf` entries discovered in the scan directory
    pub found: usize,
    /// Files that produced a record
    pub extracted: usize,
    /// Files skipped after an open or extraction failure
    pub failed: usize,
}
