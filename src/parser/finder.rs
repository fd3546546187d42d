//! Table block detection.
//!
//! A table block is a maximal run of lines that each contain a pipe, with a
//! blank line or a document edge directly before and after the run. The scan
//! is a two-state line machine rather than a regular expression so the rule
//! does not depend on lookahead support.
//!
//! Any pipe-bearing line qualifies, so prose that happens to contain a `|`
//! surrounded by blank lines is reported as a (one-line) table.

use crate::model::RawTableBlock;

/// Character that marks a line as table content.
pub const CELL_DELIMITER: char = '|';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Not inside a run. `bounded` is true at the start of the document and
    /// after a blank line that itself follows a line break.
    Outside { bounded: bool },
    /// Inside a run that started at byte `start`; `end` is one past the last
    /// pipe line's content.
    Inside { start: usize, end: usize },
}

/// Find every table block in `text`, in order of appearance.
///
/// Returned blocks are trimmed of surrounding whitespace, never overlap, and
/// carry 1-based ordinals. A document without pipe lines yields an empty list.
pub fn find_tables(text: &str) -> Vec<RawTableBlock<'_>> {
    let mut blocks = Vec::new();
    let mut state = ScanState::Outside { bounded: true };
    let mut offset = 0;

    for (index, line) in text.split('\n').enumerate() {
        let content = line.strip_suffix('\r').unwrap_or(line);
        let blank = content.is_empty();
        let piped = content.contains(CELL_DELIMITER);
        let content_end = offset + content.len();

        state = match state {
            ScanState::Outside { bounded: true } if piped => ScanState::Inside {
                start: offset,
                end: content_end,
            },
            // an empty first line is only one line break, not a boundary
            ScanState::Outside { .. } => ScanState::Outside {
                bounded: blank && index > 0,
            },
            ScanState::Inside { start, .. } if piped => ScanState::Inside {
                start,
                end: content_end,
            },
            ScanState::Inside { start, end } if blank => {
                push_block(&mut blocks, text, start, end);
                ScanState::Outside { bounded: true }
            }
            ScanState::Inside { start, .. } => {
                log::debug!(
                    "Discarding pipe run at byte {}: not followed by a blank line",
                    start
                );
                ScanState::Outside { bounded: false }
            }
        };

        offset += line.len() + 1;
    }

    if let ScanState::Inside { start, end } = state {
        push_block(&mut blocks, text, start, end);
    }

    log::debug!("Found {} table block(s)", blocks.len());
    blocks
}

fn push_block<'a>(blocks: &mut Vec<RawTableBlock<'a>>, text: &'a str, start: usize, end: usize) {
    let raw = &text[start..end];
    let leading = raw.len() - raw.trim_start().len();
    let trimmed_end = start + raw.trim_end().len();
    blocks.push(RawTableBlock::new(
        text,
        start + leading,
        trimmed_end,
        blocks.len() + 1,
    ));
}
