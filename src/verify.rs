//! The full pass: header search, column lookup, per-row resolution.

use crate::error::{Result, VerifyError};
use crate::header::{build_header, find_columns, locate_header, ColumnIndices, HeaderMatch, DEFAULT_SCAN_ROWS};
use crate::input::{read_rows, Row};
use crate::resolve::{resolve_row, PostedTo, RowResolution};
use crate::tables::{HeaderVocabulary, LocationMap};
use std::path::Path;

/// Tables and limits for one run
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    pub vocabulary: HeaderVocabulary,
    pub locations: LocationMap,
    pub scan_rows: usize,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            vocabulary: HeaderVocabulary::default(),
            locations: LocationMap::default(),
            scan_rows: DEFAULT_SCAN_ROWS,
        }
    }
}

/// Everything a report needs
#[derive(Debug, Clone)]
pub struct Report {
    pub total_rows: usize,
    pub header_match: HeaderMatch,
    /// Trimmed header cells, ending with `Posted To`
    pub header: Vec<String>,
    pub columns: ColumnIndices,
    pub rows: Vec<RowResolution>,
}

/// Tally of how each row was resolved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionCounts {
    pub via_state: usize,
    pub via_posting: usize,
    pub not_found: usize,
}

impl Report {
    pub fn counts(&self) -> ResolutionCounts {
        let mut counts = ResolutionCounts::default();
        for r in &self.rows {
            match r.posted_to {
                PostedTo::State(_) => counts.via_state += 1,
                PostedTo::Posting(_) => counts.via_posting += 1,
                PostedTo::NotFound => counts.not_found += 1,
            }
        }
        counts
    }
}

/// Run the pass over rows already in memory.
pub fn verify_rows(rows: &[Row], config: &VerifyConfig) -> Result<Report> {
    if rows.is_empty() {
        return Err(VerifyError::EmptyInput);
    }

    let header_match = locate_header(rows, &config.vocabulary, config.scan_rows);
    let header = build_header(&rows[header_match.index]);
    log::info!("Header at row {} (score {}): {:?}", header_match.index, header_match.score, header);

    let columns = find_columns(&header);
    log::info!("State column: {:?}, Posting column: {:?}", columns.state, columns.posting);

    let resolved = rows
        .iter()
        .enumerate()
        .skip(header_match.index + 1)
        .map(|(i, row)| resolve_row(i, row, &columns, &config.locations))
        .collect();

    Ok(Report {
        total_rows: rows.len(),
        header_match,
        header,
        columns,
        rows: resolved,
    })
}

/// Read `path` and run the pass.
pub fn verify_file(path: &Path, delimiter: u8, config: &VerifyConfig) -> Result<Report> {
    let rows = read_rows(path, delimiter)?;
    verify_rows(&rows, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_rows;

    fn rows(data: &[&[&str]]) -> Vec<Row> {
        data.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_verify_rows() {
        let input = rows(&[
            &["NATIONAL EXAMINATIONS COUNCIL"],
            &["S/N", "Name", "File No", "State", "Posting"],
            &["1", "Adamu Bello", "F001", "Niger", "Kano"],
            &["2", "Chika Obi", "F002", "", "lagos"],
            &["3", "Emeka Eze", "F003", "Enugu", "enugu"],
            &["4", "Musa Sani", "F004"],
        ]);
        let report = verify_rows(&input, &VerifyConfig::default()).unwrap();

        assert_eq!(report.total_rows, 6);
        assert_eq!(report.header_match.index, 1);
        assert_eq!(report.header.last().map(String::as_str), Some("Posted To"));
        assert_eq!(report.columns, ColumnIndices { state: Some(3), posting: Some(4) });

        let dests: Vec<&str> = report.rows.iter().map(|r| r.posted_to.as_str()).collect();
        assert_eq!(dests, vec!["Minna", "Ikeja", "NOT FOUND", "NOT FOUND"]);
        assert_eq!(report.rows[0].row, 2);
        assert_eq!(report.rows[3].state, "");

        assert_eq!(
            report.counts(),
            ResolutionCounts { via_state: 1, via_posting: 1, not_found: 2 }
        );
    }

    #[test]
    fn test_verify_rows_custom_tables() {
        let config = VerifyConfig {
            vocabulary: HeaderVocabulary::new(["Region"]),
            locations: LocationMap::new([("enugu", "Enugu")]),
            scan_rows: 5,
        };
        let input = rows(&[&["junk"], &["Region", "State"], &["x", "ENUGU"]]);
        let report = verify_rows(&input, &config).unwrap();
        assert_eq!(report.header_match.index, 1);
        assert_eq!(report.rows[0].posted_to, PostedTo::State("Enugu".to_string()));
    }

    #[test]
    fn test_verify_rows_low_confidence_header() {
        let input = rows(&[&["1", "Niger"], &["2", "Kano"]]);
        let report = verify_rows(&input, &VerifyConfig::default()).unwrap();
        assert!(report.header_match.is_low_confidence());
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].posted_to, PostedTo::NotFound);
    }

    #[test]
    fn test_blank_lines_keep_source_row_numbers() {
        let input = parse_rows(b"TITLE\n\nS/N,State,Posting\n\n1,Niger,Kano\n", b',').unwrap();
        let report = verify_rows(&input, &VerifyConfig::default()).unwrap();

        assert_eq!(report.total_rows, 5);
        assert_eq!(report.header_match.index, 2);
        let row_nums: Vec<usize> = report.rows.iter().map(|r| r.row).collect();
        assert_eq!(row_nums, vec![3, 4]);
        assert_eq!(report.rows[0].posted_to, PostedTo::NotFound);
        assert_eq!(report.rows[1].posted_to, PostedTo::State("Minna".to_string()));
    }

    #[test]
    fn test_verify_rows_empty() {
        let result = verify_rows(&[], &VerifyConfig::default());
        assert!(matches!(result, Err(VerifyError::EmptyInput)));
    }
}
