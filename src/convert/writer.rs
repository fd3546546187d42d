//! Output naming and writing of converted tables.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::Table;
use crate::render::{write_delimited, Delimiter};

/// Destination for converted tables.
///
/// Implement this trait to send tables somewhere other than delimited files
/// on disk.
pub trait TableSink {
    /// Write one table and return the path (or identifier) it was written to.
    ///
    /// `ordinal` is the 1-based position of the table within `source`.
    fn write_table(&mut self, source: &Path, ordinal: usize, table: &Table) -> Result<PathBuf>;
}

/// What to do when two tables in one run map to the same output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Replace the earlier file and log a warning
    #[default]
    Overwrite,
    /// Append `_2`, `_3`, ... to the file stem until the name is unused
    Suffix,
    /// Stop with [`Error::OutputCollision`]
    Fail,
}

/// Build the output file name for a table: `{stem}_table_{ordinal}.{ext}`.
///
/// # Example
///
/// ```
/// use mdtables::convert::output_file_name;
/// use mdtables::render::Delimiter;
/// use std::path::Path;
///
/// let name = output_file_name(Path::new("docs/report.md"), 2, &Delimiter::Comma);
/// assert_eq!(name, "report_table_2.csv");
/// ```
pub fn output_file_name(source: &Path, ordinal: usize, delimiter: &Delimiter) -> String {
    let stem = source.file_stem().unwrap_or_default().to_string_lossy();
    format!("{}_table_{}.{}", stem, ordinal, delimiter.extension())
}

/// Writes each table to its own delimited file in a flat output directory.
///
/// The directory must already exist; it is never created.
#[derive(Debug)]
pub struct DelimitedFileWriter {
    output_dir: PathBuf,
    delimiter: Delimiter,
    collision_policy: CollisionPolicy,
    written: HashSet<PathBuf>,
    collisions: usize,
}

impl DelimitedFileWriter {
    /// Create a writer targeting `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>, delimiter: Delimiter) -> Self {
        Self {
            output_dir: output_dir.into(),
            delimiter,
            collision_policy: CollisionPolicy::default(),
            written: HashSet::new(),
            collisions: 0,
        }
    }

    /// Set the collision policy.
    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    /// Number of name collisions seen so far.
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    fn resolve_path(&mut self, source: &Path, ordinal: usize) -> Result<PathBuf> {
        let path = self
            .output_dir
            .join(output_file_name(source, ordinal, &self.delimiter));
        if !self.written.contains(&path) {
            return Ok(path);
        }

        self.collisions += 1;
        match self.collision_policy {
            CollisionPolicy::Overwrite => {
                log::warn!(
                    "Overwriting {} with table {} of {}",
                    path.display(),
                    ordinal,
                    source.display()
                );
                Ok(path)
            }
            CollisionPolicy::Fail => Err(Error::OutputCollision { path }),
            CollisionPolicy::Suffix => {
                let stem = path.file_stem().unwrap_or_default().to_string_lossy();
                let mut counter = 2;
                loop {
                    let candidate = self.output_dir.join(format!(
                        "{}_{}.{}",
                        stem,
                        counter,
                        self.delimiter.extension()
                    ));
                    if !self.written.contains(&candidate) {
                        log::warn!(
                            "{} already written; using {} for table {} of {}",
                            path.display(),
                            candidate.display(),
                            ordinal,
                            source.display()
                        );
                        return Ok(candidate);
                    }
                    counter += 1;
                }
            }
        }
    }
}

impl TableSink for DelimitedFileWriter {
    fn write_table(&mut self, source: &Path, ordinal: usize, table: &Table) -> Result<PathBuf> {
        let path = self.resolve_path(source, ordinal)?;
        let to_write_error = |source| Error::Write {
            path: path.clone(),
            source,
        };

        let file = File::create(&path).map_err(to_write_error)?;
        let mut writer = BufWriter::new(file);
        write_delimited(&mut writer, table, &self.delimiter).map_err(to_write_error)?;
        writer.flush().map_err(to_write_error)?;

        log::debug!("Wrote {} ({} rows)", path.display(), table.row_count());
        self.written.insert(path.clone());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample() -> Table {
        Table::from_strings(vec![vec!["Name", "Age"], vec!["Alice", "30"]])
    }

    #[test]
    fn test_output_file_name() {
        let source = Path::new("notes/report.md");
        assert_eq!(
            output_file_name(source, 2, &Delimiter::Comma),
            "report_table_2.csv"
        );
        assert_eq!(
            output_file_name(source, 1, &Delimiter::Tab),
            "report_table_1.tsv"
        );
        assert_eq!(
            output_file_name(source, 3, &Delimiter::Custom(";".into())),
            "report_table_3.txt"
        );
    }

    #[test]
    fn test_write_table() {
        let dir = TempDir::new().unwrap();
        let mut writer = DelimitedFileWriter::new(dir.path(), Delimiter::Tab);

        let path = writer
            .write_table(Path::new("a/report.md"), 1, &sample())
            .unwrap();

        assert_eq!(path, dir.path().join("report_table_1.tsv"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Name\tAge\nAlice\t30\n");
    }

    #[test]
    fn test_missing_output_dir() {
        let dir = TempDir::new().unwrap();
        let mut writer = DelimitedFileWriter::new(dir.path().join("absent"), Delimiter::Tab);

        let result = writer.write_table(Path::new("report.md"), 1, &sample());
        assert!(matches!(result, Err(Error::Write { .. })));
        assert!(!dir.path().join("absent").exists());
    }

    #[test]
    fn test_collision_overwrite() {
        let dir = TempDir::new().unwrap();
        let mut writer = DelimitedFileWriter::new(dir.path(), Delimiter::Comma);

        let first = writer
            .write_table(Path::new("a/report.md"), 1, &sample())
            .unwrap();
        let second = writer
            .write_table(Path::new("b/report.md"), 1, &Table::from_strings([["x"]]))
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(writer.collisions(), 1);
        assert_eq!(fs::read_to_string(&second).unwrap(), "x\n");
    }

    #[test]
    fn test_collision_suffix() {
        let dir = TempDir::new().unwrap();
        let mut writer = DelimitedFileWriter::new(dir.path(), Delimiter::Comma)
            .with_collision_policy(CollisionPolicy::Suffix);

        let paths: Vec<_> = ["a/report.md", "b/report.md", "c/report.md"]
            .iter()
            .map(|src| writer.write_table(Path::new(src), 1, &sample()).unwrap())
            .collect();

        assert_eq!(
            paths,
            vec![
                dir.path().join("report_table_1.csv"),
                dir.path().join("report_table_1_2.csv"),
                dir.path().join("report_table_1_3.csv"),
            ]
        );
        assert_eq!(writer.collisions(), 2);
    }

    #[test]
    fn test_collision_fail() {
        let dir = TempDir::new().unwrap();
        let mut writer = DelimitedFileWriter::new(dir.path(), Delimiter::Tab)
            .with_collision_policy(CollisionPolicy::Fail);

        writer
            .write_table(Path::new("a/report.md"), 1, &sample())
            .unwrap();
        let result = writer.write_table(Path::new("b/report.md"), 1, &sample());

        assert!(matches!(result, Err(Error::OutputCollision { .. })));
    }

    #[test]
    fn test_preexisting_file_is_not_a_collision() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("report_table_1.tsv"), "stale\n").unwrap();
        let mut writer = DelimitedFileWriter::new(dir.path(), Delimiter::Tab)
            .with_collision_policy(CollisionPolicy::Fail);

        let path = writer
            .write_table(Path::new("report.md"), 1, &sample())
            .unwrap();

        assert_eq!(writer.collisions(), 0);
        assert_eq!(fs::read_to_string(path).unwrap(), "Name\tAge\nAlice\t30\n");
    }
}
