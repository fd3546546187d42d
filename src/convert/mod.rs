//! Directory conversion: walk a source tree, extract tables from every
//! Markdown file, and hand each table to a [`TableSink`].
//!
//! Files are processed one at a time. Each source file is read completely,
//! its tables parsed and written, before the next file is opened. The first
//! error stops the run.
//!
//! # Example
//!
//! ```no_run
//! use mdtables::convert::{convert_directory, ConvertOptions};
//! use mdtables::render::Delimiter;
//!
//! fn main() -> mdtables::Result<()> {
//!     let options = ConvertOptions::new().with_delimiter(Delimiter::Comma);
//!     let report = convert_directory("docs", "tables", &options)?;
//!     println!("{} tables written", report.tables_found);
//!     Ok(())
//! }
//! ```

mod fs;
mod writer;

pub use fs::{find_markdown_files, read_document, MARKDOWN_EXTENSION};
pub use writer::{output_file_name, CollisionPolicy, DelimitedFileWriter, TableSink};

use crate::error::Result;
use crate::parser::{ParseOptions, TableParser};
use crate::render::Delimiter;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Options for directory conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Separator placed between cells
    pub delimiter: Delimiter,

    /// Extension of source files to scan (without the dot)
    pub extension: String,

    /// Handling of output names produced twice in one run
    pub collision_policy: CollisionPolicy,

    /// Table parsing options
    pub parse: ParseOptions,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delimiter.
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the source file extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set the collision policy.
    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    /// Set parsing options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::Tab,
            extension: MARKDOWN_EXTENSION.to_string(),
            collision_policy: CollisionPolicy::Overwrite,
            parse: ParseOptions::default(),
        }
    }
}

/// Summary of a conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConvertReport {
    /// Number of source files read
    pub files_scanned: usize,

    /// Number of source files that contained at least one table
    pub files_with_tables: usize,

    /// Total number of tables extracted
    pub tables_found: usize,

    /// Output paths in the order they were written
    pub written: Vec<PathBuf>,

    /// Number of output name collisions within the run
    pub collisions: usize,
}

impl ConvertReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outputs of one source file.
    pub fn record_file(&mut self, written: Vec<PathBuf>) {
        self.files_scanned += 1;
        if !written.is_empty() {
            self.files_with_tables += 1;
        }
        self.tables_found += written.len();
        self.written.extend(written);
    }
}

/// Progress notifications emitted while a tree is converted.
#[derive(Debug, Clone, Copy)]
pub enum ConvertEvent<'a> {
    /// The source tree was walked; `total` files will be converted.
    Scanned {
        /// Number of matching source files
        total: usize,
    },
    /// A source file is about to be read.
    FileStarted {
        /// Source file path
        path: &'a Path,
    },
    /// All tables of a source file were written.
    FileFinished {
        /// Source file path
        path: &'a Path,
        /// Outputs written for this file
        written: &'a [PathBuf],
    },
}

/// Extracts tables from source files and forwards them to a sink.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
    parser: TableParser,
}

impl Converter {
    /// Create a converter with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        let parser = TableParser::with_options(options.parse.clone());
        Self { options, parser }
    }

    /// Conversion options in use.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert one source file, returning the paths its tables went to.
    pub fn convert_file<S: TableSink + ?Sized>(
        &self,
        path: &Path,
        sink: &mut S,
    ) -> Result<Vec<PathBuf>> {
        let document = read_document(path)?;
        let blocks = document.table_blocks();
        log::debug!("{}: {} table(s)", path.display(), blocks.len());

        let mut written = Vec::with_capacity(blocks.len());
        for block in blocks {
            let table = self.parser.parse(block.text());
            written.push(sink.write_table(path, block.ordinal(), &table)?);
        }
        Ok(written)
    }

    /// Convert every matching file under `source`.
    pub fn convert_tree<S: TableSink + ?Sized>(
        &self,
        source: &Path,
        sink: &mut S,
    ) -> Result<ConvertReport> {
        self.convert_tree_with_progress(source, sink, |_| {})
    }

    /// Convert every matching file under `source`, reporting progress.
    pub fn convert_tree_with_progress<S, F>(
        &self,
        source: &Path,
        sink: &mut S,
        mut on_event: F,
    ) -> Result<ConvertReport>
    where
        S: TableSink + ?Sized,
        F: FnMut(ConvertEvent<'_>),
    {
        let files = find_markdown_files(source, &self.options.extension)?;
        on_event(ConvertEvent::Scanned { total: files.len() });

        let mut report = ConvertReport::new();
        for path in &files {
            on_event(ConvertEvent::FileStarted { path });
            let written = self.convert_file(path, sink)?;
            on_event(ConvertEvent::FileFinished {
                path,
                written: &written,
            });
            report.record_file(written);
        }
        Ok(report)
    }

    /// Convert every matching file under `source` into delimited files in
    /// `output`, reporting progress.
    ///
    /// `output` must already exist.
    pub fn convert_to_directory<F>(
        &self,
        source: &Path,
        output: &Path,
        on_event: F,
    ) -> Result<ConvertReport>
    where
        F: FnMut(ConvertEvent<'_>),
    {
        let mut writer = DelimitedFileWriter::new(output, self.options.delimiter.clone())
            .with_collision_policy(self.options.collision_policy);

        let mut report = self.convert_tree_with_progress(source, &mut writer, on_event)?;
        report.collisions = writer.collisions();

        log::info!(
            "Extracted {} table(s) from {} of {} file(s)",
            report.tables_found,
            report.files_with_tables,
            report.files_scanned
        );
        Ok(report)
    }
}

/// Convert every Markdown file under `source` into delimited files in `output`.
///
/// `output` must already exist.
pub fn convert_directory<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    output: Q,
    options: &ConvertOptions,
) -> Result<ConvertReport> {
    Converter::new(options.clone()).convert_to_directory(source.as_ref(), output.as_ref(), |_| {})
}
