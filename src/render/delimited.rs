//! Delimited text rendering (TSV, CSV, and custom separators).

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::model::Table;

/// Separator placed between cells of an output row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// Tab character, written as `.tsv`
    #[default]
    Tab,
    /// Comma, written as `.csv`
    Comma,
    /// Any other separator, written as `.txt`
    Custom(String),
}

impl Delimiter {
    /// Parse a delimiter from user input.
    ///
    /// A literal tab and the two-character escape `\t` both select [`Delimiter::Tab`].
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "" => Err(Error::InvalidDelimiter("delimiter must not be empty".into())),
            "\t" | "\\t" => Ok(Delimiter::Tab),
            "," => Ok(Delimiter::Comma),
            other => Ok(Delimiter::Custom(other.to_string())),
        }
    }

    /// Separator text inserted between cells.
    pub fn as_str(&self) -> &str {
        match self {
            Delimiter::Tab => "\t",
            Delimiter::Comma => ",",
            Delimiter::Custom(s) => s,
        }
    }

    /// File extension for output written with this delimiter.
    pub fn extension(&self) -> &'static str {
        match self {
            Delimiter::Tab => "tsv",
            Delimiter::Comma => "csv",
            Delimiter::Custom(_) => "txt",
        }
    }
}

impl FromStr for Delimiter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Delimiter::parse(s)
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Tab => f.write_str("\\t"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Render a table as delimited text, one line per row.
///
/// Every row, including the last, ends with `\n`.
pub fn to_delimited(table: &Table, delimiter: &Delimiter) -> String {
    let mut output = String::new();
    for row in &table.rows {
        output.push_str(&row.join(delimiter.as_str()));
        output.push('\n');
    }
    output
}

/// Write a table as delimited text to any writer.
pub fn write_delimited<W: Write>(
    writer: &mut W,
    table: &Table,
    delimiter: &Delimiter,
) -> std::io::Result<()> {
    for row in &table.rows {
        writer.write_all(row.join(delimiter.as_str()).as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
