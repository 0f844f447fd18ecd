//! Plain-text report rendering

use crate::verify::Report;
use std::io::{self, Write};

fn index_or_absent(idx: Option<usize>) -> String {
    match idx {
        Some(i) => i.to_string(),
        None => "-1".to_string(),
    }
}

/// Quote a cell the way a list literal would: single quotes, switching to
/// double quotes when the cell holds a `'` but no `"`.
fn quote_cell(cell: &str) -> String {
    let quote = if cell.contains('\'') && !cell.contains('"') { '"' } else { '\'' };

    let mut out = String::with_capacity(cell.len() + 2);
    out.push(quote);
    for c in cell.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

fn quoted_list(cells: &[String]) -> String {
    let inner: Vec<String> = cells.iter().map(|c| quote_cell(c)).collect();
    format!("[{}]", inner.join(", "))
}

/// Write the summary header, one line per data row, then the tally.
pub fn write_report<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    writeln!(out, "Total rows: {}", report.total_rows)?;

    // Posted To is synthetic, so leave it out of the detected header content
    let detected = &report.header[..report.header.len().saturating_sub(1)];
    writeln!(
        out,
        "FOUND HEADER at row {}: {}",
        report.header_match.index,
        quoted_list(detected)
    )?;
    if report.header_match.is_low_confidence() {
        writeln!(out, "Warning: no row matched the header vocabulary; using row 0")?;
    }

    writeln!(
        out,
        "State Index: {}, Posting Index: {}",
        index_or_absent(report.columns.state),
        index_or_absent(report.columns.posting)
    )?;

    writeln!(out)?;
    writeln!(out, "--- Rows Inspection ---")?;

    for r in &report.rows {
        writeln!(
            out,
            "Row {}: State='{}', Posting='{}' -> Posted To='{}'",
            r.row, r.state, r.posting, r.posted_to
        )?;
    }

    let counts = report.counts();
    writeln!(
        out,
        "Resolved: {} via state, {} via posting, {} not found",
        counts.via_state, counts.via_posting, counts.not_found
    )?;

    Ok(())
}
