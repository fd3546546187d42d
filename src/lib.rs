//! # mdtables
//!
//! Extract tables from Markdown files and write them out as delimited text.
//!
//! The library finds pipe tables in Markdown text, parses them into rows of
//! trimmed cells, and writes each table to its own TSV, CSV, or custom
//! delimited file.
//!
//! ## Quick Start
//!
//! ```
//! use mdtables::extract_tables;
//!
//! let text = "Intro text.\n\n| A | B |\n|---|---|\n| 1 | 2 |\n\nMore text.";
//! let tables = extract_tables(text);
//!
//! assert_eq!(tables.len(), 1);
//! assert_eq!(tables[0].as_strings(), vec![vec!["A", "B"], vec!["1", "2"]]);
//! ```
//!
//! ## Table detection
//!
//! A table is a run of lines that each contain `|`, with a blank line or the
//! start/end of the document directly before and after it. The second line
//! of every table is dropped as the header separator (`|---|---|`); see
//! [`parser::SeparatorMode`] to make that conditional.

pub mod convert;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{
    convert_directory, CollisionPolicy, ConvertEvent, ConvertOptions, ConvertReport, Converter,
    DelimitedFileWriter, TableSink,
};
pub use error::{Error, Result};
pub use model::{Document, RawTableBlock, Table, TableRow};
pub use parser::{find_tables, parse_table, ParseOptions, SeparatorMode, TableParser};
pub use render::{to_delimited, Delimiter, JsonFormat};

use std::path::Path;

/// Extract every table from Markdown text, in order of appearance.
pub fn extract_tables(text: &str) -> Vec<Table> {
    extract_tables_with_options(text, &ParseOptions::default())
}

/// Extract every table from Markdown text with custom parse options.
pub fn extract_tables_with_options(text: &str, options: &ParseOptions) -> Vec<Table> {
    let parser = TableParser::with_options(options.clone());
    find_tables(text)
        .iter()
        .map(|block| parser.parse(block.text()))
        .collect()
}

/// Read a Markdown file and extract its tables.
///
/// # Example
///
/// ```no_run
/// use mdtables::extract_tables_from_file;
///
/// let tables = extract_tables_from_file("README.md")?;
/// println!("{} tables", tables.len());
/// # Ok::<(), mdtables::Error>(())
/// ```
pub fn extract_tables_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Table>> {
    let document = convert::read_document(path)?;
    Ok(extract_tables(document.text()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_tables_scenario() {
        let text = "Intro text.\n\n| A | B |\n|---|---|\n| 1 | 2 |\n\nMore text.";
        let blocks = find_tables(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text(), "| A | B |\n|---|---|\n| 1 | 2 |");

        let tables = extract_tables(text);
        assert_eq!(tables[0].as_strings(), vec![vec!["A", "B"], vec!["1", "2"]]);
    }

    #[test]
    fn test_extract_tables_empty_document() {
        assert!(extract_tables("").is_empty());
        assert!(extract_tables("# Heading\n\nNo tables here.").is_empty());
    }

    #[test]
    fn test_extract_tables_with_detect_option() {
        let text = "| a | b |\n| 1 | 2 |";
        let positional = extract_tables(text);
        let detected = extract_tables_with_options(text, &ParseOptions::new().detect_separator());

        assert_eq!(positional[0].row_count(), 1);
        assert_eq!(detected[0].row_count(), 2);
    }

    #[test]
    fn test_extract_tables_from_missing_file() {
        let result = extract_tables_from_file("/definitely/not/here.md");
        assert!(matches!(result, Err(Error::Read { .. })));
    }
}
