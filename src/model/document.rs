//! Source documents and the raw table blocks found in them.

use std::path::{Path, PathBuf};

use crate::parser::find_tables;

/// The text content of one Markdown source file.
///
/// A document is read once and never modified; table blocks borrow from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: Option<PathBuf>,
    text: String,
}

impl Document {
    /// Create a document from in-memory text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            path: None,
            text: text.into(),
        }
    }

    /// Attach the path the text was read from.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Source path, if the document came from a file.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Full document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Locate every table block in the document.
    pub fn table_blocks(&self) -> Vec<RawTableBlock<'_>> {
        find_tables(&self.text)
    }
}

/// A detected, unparsed span of table text within a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTableBlock<'a> {
    text: &'a str,
    start: usize,
    end: usize,
    ordinal: usize,
}

impl<'a> RawTableBlock<'a> {
    pub(crate) fn new(source: &'a str, start: usize, end: usize, ordinal: usize) -> Self {
        Self {
            text: &source[start..end],
            start,
            end,
            ordinal,
        }
    }

    /// Block text with surrounding whitespace removed.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Byte offset of the block start within the document.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the block end within the document.
    pub fn end(&self) -> usize {
        self.end
    }

    /// 1-based position among the blocks of the same document.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Number of lines in the block.
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }
}
