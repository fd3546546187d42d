//! Rendering module for writing tables to output formats.

mod delimited;
mod json;

pub use delimited::{to_delimited, write_delimited, Delimiter};
pub use json::{to_json, JsonFormat};
