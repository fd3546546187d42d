//! Data model shared by the finder, the parser, and the writers.
//!
//! A [`Document`] owns the text of one source file, [`RawTableBlock`]s borrow
//! spans of it, and [`Table`]s are the parsed result handed to output.

mod document;
mod table;

pub use document::{Document, RawTableBlock};
pub use table::{Table, TableRow};
