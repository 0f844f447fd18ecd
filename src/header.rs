//! Header row detection and column lookup

use crate::input::Row;
use crate::tables::HeaderVocabulary;

/// Number of leading rows searched for the header
pub const DEFAULT_SCAN_ROWS: usize = 30;

/// Synthetic column appended to every detected header
pub const POSTED_TO_LABEL: &str = "Posted To";

/// Outcome of the header search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMatch {
    pub index: usize,
    pub score: usize,
}

impl HeaderMatch {
    /// True when no scanned row matched any vocabulary term and row 0 was
    /// taken by default.
    pub fn is_low_confidence(&self) -> bool {
        self.score == 0
    }
}

/// Pick the best-scoring row among the first `scan_rows`.
///
/// Only a strictly greater score replaces the current best, so ties go to the
/// earliest row and an all-zero window yields row 0.
pub fn locate_header(rows: &[Row], vocabulary: &HeaderVocabulary, scan_rows: usize) -> HeaderMatch {
    let mut best = HeaderMatch { index: 0, score: 0 };

    for (i, row) in rows.iter().take(scan_rows).enumerate() {
        let score = vocabulary.score(row);
        log::debug!("Row {} header score: {}", i, score);
        if score > best.score {
            best = HeaderMatch { index: i, score };
        }
    }

    if best.is_low_confidence() {
        log::warn!("No header candidate matched the vocabulary; falling back to row 0");
    }

    best
}

/// Trimmed header cells with the synthetic `Posted To` label appended
pub fn build_header(row: &[String]) -> Vec<String> {
    let mut header: Vec<String> = row.iter().map(|c| c.trim().to_string()).collect();
    header.push(POSTED_TO_LABEL.to_string());
    header
}

/// Positions of the columns used for destination lookup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnIndices {
    pub state: Option<usize>,
    pub posting: Option<usize>,
}

/// Find the `state` and `posting` columns by case-insensitive exact name.
///
/// Every match overwrites the previous one, so with duplicate names the
/// rightmost column wins.
pub fn find_columns(header: &[String]) -> ColumnIndices {
    let mut cols = ColumnIndices::default();

    for (idx, h) in header.iter().enumerate() {
        let h = h.to_lowercase();
        if h == "state" {
            cols.state = Some(idx);
        }
        if h == "posting" {
            cols.posting = Some(idx);
        }
    }

    if cols.state.is_none() {
        log::warn!("No 'State' column in header");
    }
    if cols.posting.is_none() {
        log::warn!("No 'Posting' column in header");
    }

    cols
}
