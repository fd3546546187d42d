//! Conversion of raw table blocks into rows and cells.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::{Table, TableRow};

use super::finder::CELL_DELIMITER;
use super::{ParseOptions, SeparatorMode};

/// Parse one table block with default options.
///
/// Lines become rows and pipe-separated fragments become cells. Cells are
/// trimmed and empty ones dropped, which removes the artifacts of leading and
/// trailing pipes. The second line is discarded as the header separator.
/// Parsing never fails; rows keep whatever cell count they have.
///
/// # Example
///
/// ```
/// use mdtables::parse_table;
///
/// let table = parse_table("| Name | Age |\n|------|-----|\n| Alice | 30 |");
/// assert_eq!(table.as_strings(), vec![vec!["Name", "Age"], vec!["Alice", "30"]]);
/// ```
pub fn parse_table(block: &str) -> Table {
    TableParser::new().parse(block)
}

/// Table block parser.
#[derive(Debug, Clone, Default)]
pub struct TableParser {
    options: ParseOptions,
}

impl TableParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse a block into a table.
    pub fn parse(&self, block: &str) -> Table {
        let lines: Vec<&str> = block.split('\n').collect();
        let mut rows: Vec<TableRow> = lines.iter().map(|line| split_cells(line)).collect();

        if let Some(second) = lines.get(1) {
            let looks_like_separator = is_separator_row(second);
            match self.options.separator_mode {
                SeparatorMode::Positional => {
                    if !looks_like_separator {
                        log::warn!(
                            "Dropping second table line {:?} although it is not a separator row",
                            second.trim()
                        );
                    }
                    rows.remove(1);
                }
                SeparatorMode::Detect if looks_like_separator => {
                    rows.remove(1);
                }
                SeparatorMode::Detect => {
                    log::debug!("Keeping second table line {:?}", second.trim());
                }
            }
        }

        Table { rows }
    }
}

fn split_cells(line: &str) -> TableRow {
    TableRow::new(
        line.split(CELL_DELIMITER)
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .map(String::from)
            .collect(),
    )
}

/// Check whether a line is a Markdown header-separator row such as
/// `|---|:---:|` or `--- | ---`.
pub fn is_separator_row(line: &str) -> bool {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR
        .get_or_init(|| {
            Regex::new(r"^\|?\s*:?-+:?\s*(\|\s*:?-+:?\s*)*\|?$")
                .expect("separator pattern is valid")
        })
        .is_match(line.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_table() {
        let block = "| Name | Age |\n|------|-----|\n| Alice | 30 |\n| Bob | 25 |";
        let table = parse_table(block);
        assert_eq!(
            table.as_strings(),
            vec![vec!["Name", "Age"], vec!["Alice", "30"], vec!["Bob", "25"]]
        );
    }

    #[test]
    fn test_single_line_block() {
        let table = parse_table("| only | row |");
        assert_eq!(table.as_strings(), vec![vec!["only", "row"]]);
    }

    #[test]
    fn test_two_line_block_keeps_header_only() {
        let table = parse_table("| h1 | h2 |\n|----|----|");
        assert_eq!(table.as_strings(), vec![vec!["h1", "h2"]]);
    }

    #[test]
    fn test_cells_without_outer_pipes() {
        let table = parse_table("a | b\n--- | ---\nc | d");
        assert_eq!(table.as_strings(), vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_whitespace_only_cells_are_dropped() {
        let table = parse_table("| a |   | b |  ");
        assert_eq!(table.as_strings(), vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_ragged_rows_are_kept() {
        let table = parse_table("| a | b | c |\n|---|---|---|\n| 1 |\n| 1 | 2 | 3 | 4 |");
        assert_eq!(
            table.as_strings(),
            vec![vec!["a", "b", "c"], vec!["1"], vec!["1", "2", "3", "4"]]
        );
        assert!(table.is_ragged());
    }

    #[test]
    fn test_crlf_is_trimmed() {
        let table = parse_table("| A | B |\r\n|---|---|\r\n| 1 | 2 |");
        assert_eq!(table.as_strings(), vec![vec!["A", "B"], vec!["1", "2"]]);
    }

    #[test]
    fn test_positional_drop_loses_first_data_row() {
        let table = parse_table("| a | b |\n| 1 | 2 |\n| 3 | 4 |");
        assert_eq!(table.as_strings(), vec![vec!["a", "b"], vec!["3", "4"]]);
    }

    #[test]
    fn test_detect_mode_keeps_data_row() {
        let parser = TableParser::with_options(ParseOptions::new().detect_separator());

        let table = parser.parse("| a | b |\n| 1 | 2 |");
        assert_eq!(table.as_strings(), vec![vec!["a", "b"], vec!["1", "2"]]);

        let table = parser.parse("| a | b |\n|:--|--:|\n| 1 | 2 |");
        assert_eq!(table.as_strings(), vec![vec!["a", "b"], vec!["1", "2"]]);
    }

    #[test]
    fn test_separator_row_recognition() {
        assert!(is_separator_row("|------|-----|"));
        assert!(is_separator_row("---|---|---"));
        assert!(is_separator_row("| :--- | :---: | ---: |"));
        assert!(is_separator_row("  |---|  \r"));
        assert!(!is_separator_row("| 1 | 2 |"));
        assert!(!is_separator_row("|   |   |"));
        assert!(!is_separator_row(""));
    }

    #[test]
    fn test_round_trip_through_delimiter() {
        let table = parse_table("| Name | Age |\n|---|---|\n| Alice | 30 |");
        let serialized: Vec<String> = table.rows.iter().map(|r| r.join("\t")).collect();
        let reparsed: Vec<Vec<&str>> = serialized.iter().map(|l| l.split('\t').collect()).collect();
        assert_eq!(reparsed, table.as_strings());
    }
}
