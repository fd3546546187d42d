//! Markdown table detection and parsing.

mod finder;
mod options;
mod table_parser;

pub use finder::{find_tables, CELL_DELIMITER};
pub use options::{ParseOptions, SeparatorMode};
pub use table_parser::{is_separator_row, parse_table, TableParser};
