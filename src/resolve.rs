//! Posted To resolution for a single data row

use crate::header::ColumnIndices;
use crate::tables::LocationMap;
use std::fmt;

pub const NOT_FOUND: &str = "NOT FOUND";

/// Resolved destination, tagged with the column that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostedTo {
    State(String),
    Posting(String),
    NotFound,
}

impl PostedTo {
    pub fn as_str(&self) -> &str {
        match self {
            PostedTo::State(s) | PostedTo::Posting(s) => s,
            PostedTo::NotFound => NOT_FOUND,
        }
    }
}

impl fmt::Display for PostedTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One inspected data row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowResolution {
    /// Source row index
    pub row: usize,
    /// Trimmed state cell; empty when the column is absent or past the row end
    pub state: String,
    /// Trimmed posting cell; empty when the column is absent or past the row end
    pub posting: String,
    pub posted_to: PostedTo,
}

/// Bounds-checked, trimmed cell read
fn cell(row: &[String], idx: Option<usize>) -> Option<&str> {
    idx.and_then(|i| row.get(i)).map(|s| s.trim())
}

/// State column first, then posting column, else `NotFound`.
pub fn resolve_destination(row: &[String], cols: &ColumnIndices, locations: &LocationMap) -> PostedTo {
    if let Some(capital) = cell(row, cols.state).and_then(|v| locations.lookup(v)) {
        return PostedTo::State(capital.to_string());
    }
    if let Some(capital) = cell(row, cols.posting).and_then(|v| locations.lookup(v)) {
        return PostedTo::Posting(capital.to_string());
    }
    PostedTo::NotFound
}

pub fn resolve_row(row_num: usize, row: &[String], cols: &ColumnIndices, locations: &LocationMap) -> RowResolution {
    RowResolution {
        row: row_num,
        state: cell(row, cols.state).unwrap_or("").to_string(),
        posting: cell(row, cols.posting).unwrap_or("").to_string(),
        posted_to: resolve_destination(row, cols, locations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    const COLS: ColumnIndices = ColumnIndices { state: Some(1), posting: Some(2) };

    #[test]
    fn test_state_wins_over_posting() {
        let map = LocationMap::default();
        let dest = resolve_destination(&row(&["1", "Niger", "Kano"]), &COLS, &map);
        assert_eq!(dest, PostedTo::State("Minna".to_string()));
        assert_eq!(dest.to_string(), "Minna");
    }

    #[test]
    fn test_falls_back_to_posting() {
        let map = LocationMap::default();
        let dest = resolve_destination(&row(&["1", "", "lagos"]), &COLS, &map);
        assert_eq!(dest, PostedTo::Posting("Ikeja".to_string()));

        let no_state = ColumnIndices { state: None, posting: Some(2) };
        let dest = resolve_destination(&row(&["1", "Niger", "lagos"]), &no_state, &map);
        assert_eq!(dest.as_str(), "Ikeja");
    }

    #[test]
    fn test_unmapped_is_not_found() {
        let map = LocationMap::default();
        let dest = resolve_destination(&row(&["1", "Enugu", "enugu"]), &COLS, &map);
        assert_eq!(dest, PostedTo::NotFound);
        assert_eq!(dest.to_string(), NOT_FOUND);
    }

    #[test]
    fn test_no_columns_is_not_found() {
        let map = LocationMap::default();
        let dest = resolve_destination(&row(&["Niger"]), &ColumnIndices::default(), &map);
        assert_eq!(dest, PostedTo::NotFound);
    }

    #[test]
    fn test_short_row_uses_state_and_blanks_posting() {
        let map = LocationMap::default();
        let cols = ColumnIndices { state: Some(1), posting: Some(5) };
        let res = resolve_row(7, &row(&["1", " Gombe "]), &cols, &map);
        assert_eq!(res.row, 7);
        assert_eq!(res.state, "Gombe");
        assert_eq!(res.posting, "");
        assert_eq!(res.posted_to.as_str(), "Gombe");
    }

    #[test]
    fn test_empty_row_never_panics() {
        let map = LocationMap::default();
        let res = resolve_row(3, &[], &COLS, &map);
        assert_eq!(res.state, "");
        assert_eq!(res.posting, "");
        assert_eq!(res.posted_to, PostedTo::NotFound);
    }
}
