//! Whole-file CSV loading.
//!
//! The export is read into memory in one go and decoded lossily, so a stray
//! Latin-1 byte in a name column turns into U+FFFD instead of aborting the run.

use crate::error::Result;
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;

/// A single source row. Rows carry no width guarantee.
pub type Row = Vec<String>;

/// Read every row of a delimited file at `path`.
pub fn read_rows(path: &Path, delimiter: u8) -> Result<Vec<Row>> {
    let bytes = std::fs::read(path)?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());
    parse_rows(&bytes, delimiter)
}

/// Parse raw bytes into rows, replacing undecodable sequences.
///
/// Blank lines are kept as empty rows so that row indices match source lines.
pub fn parse_rows(bytes: &[u8], delimiter: u8) -> Result<Vec<Row>> {
    let content = String::from_utf8_lossy(bytes);
    let content = content.as_bytes();

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(content);

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    loop {
        let more = reader.read_record(&mut record)?;

        // The recorded position is where the read began, before csv skipped
        // any blank lines.
        let start = record.position().map_or(0, |p| p.byte() as usize);
        let blanks = blank_lines_at(content, start);
        rows.extend(std::iter::repeat_with(Row::new).take(blanks));

        if !more {
            break;
        }
        rows.push(record.iter().map(String::from).collect());
    }

    Ok(rows)
}

/// Count the empty lines beginning at byte `start`.
///
/// CRLF, LF and CR each end one line. A lone LF right after a CR is the tail
/// of the previous record's terminator and does not count.
fn blank_lines_at(content: &[u8], start: usize) -> usize {
    let mut i = start;
    if i > 0 && content.get(i) == Some(&b'\n') && content[i - 1] == b'\r' {
        i += 1;
    }

    let mut count = 0;
    while let Some(&b) = content.get(i) {
        match b {
            b'\r' => {
                i += 1;
                if content.get(i) == Some(&b'\n') {
                    i += 1;
                }
            }
            b'\n' => i += 1,
            _ => break,
        }
        count += 1;
    }
    count
}
