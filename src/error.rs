//! Error types for mdtables library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mdtables operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting and writing tables.
///
/// Malformed table content is never an error: parsing is permissive and
/// produces ragged rows instead.
#[derive(Error, Debug)]
pub enum Error {
    /// A source file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// Path of the unreadable file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A source file is not valid UTF-8 text.
    #[error("{} is not valid UTF-8 text", .path.display())]
    Encoding {
        /// Path of the offending file
        path: PathBuf,
    },

    /// An output file could not be created or written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Path of the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Two tables in the same run mapped to the same output file.
    #[error("Output file {} was already written during this run", .path.display())]
    OutputCollision {
        /// The contested output path
        path: PathBuf,
    },

    /// Error while walking the source directory.
    #[error("Directory traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    /// The delimiter string is unusable.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Encoding {
            path: PathBuf::from("notes/report.md"),
        };
        assert_eq!(err.to_string(), "notes/report.md is not valid UTF-8 text");

        let err = Error::OutputCollision {
            path: PathBuf::from("out/report_table_1.tsv"),
        };
        assert_eq!(
            err.to_string(),
            "Output file out/report_table_1.tsv was already written during this run"
        );
    }

    #[test]
    fn test_write_error_display() {
        let err = Error::Write {
            path: PathBuf::from("out/a_table_1.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "Failed to write out/a_table_1.csv: missing");
    }

    #[test]
    fn test_read_error_keeps_source() {
        use std::error::Error as _;

        let err = Error::Read {
            path: PathBuf::from("a.md"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("Failed to read a.md"));
        assert!(err.source().is_some());
    }
}
