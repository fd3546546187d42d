//! Filesystem access: reading source documents and walking the source tree.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::model::Document;

/// Default extension of Markdown source files.
pub const MARKDOWN_EXTENSION: &str = "md";

/// Read a whole source file into a [`Document`].
///
/// The file handle is released before this function returns, on success and
/// on every error path.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| Error::Encoding {
        path: path.to_path_buf(),
    })?;
    Ok(Document::new(text).with_path(path))
}

/// Recursively collect files under `root` whose extension is `extension`.
///
/// The comparison is case-sensitive and a leading dot in `extension` is
/// ignored. Entries are visited in file-name order so repeated runs produce
/// the same sequence.
pub fn find_markdown_files<P: AsRef<Path>>(root: P, extension: &str) -> Result<Vec<PathBuf>> {
    let extension = extension.trim_start_matches('.');
    let mut files = Vec::new();

    for entry in WalkDir::new(root.as_ref())
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|e| e == extension) {
            files.push(path.to_path_buf());
        }
    }

    log::debug!(
        "Found {} *.{} file(s) under {}",
        files.len(),
        extension,
        root.as_ref().display()
    );
    Ok(files)
}
