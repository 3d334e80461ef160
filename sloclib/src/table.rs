//! Table-ready data structures for report output.
//!
//! This module provides `ReportTable`, a presentation-ready data structure
//! that can be directly consumed by a renderer or serialized to JSON.
//!
//! The data flow is:
//! 1. Per-file stats arriving at the aggregator
//! 2. Report (rows in arrival order + total)
//! 3. ReportTable (table-ready: headers, rows, footer)

use serde::{Deserialize, Serialize};

use crate::report::Report;
use crate::stats::LineCounts;

/// Column headers, in display order.
pub const HEADERS: [&str; 4] = ["FILENAME", "White Space", "Comment", "Code"];

/// Label of the footer row.
pub const TOTAL_LABEL: &str = "TOTAL";

/// A single row in the table (data row or footer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row label (file path or "TOTAL")
    pub label: String,
    /// Values for each count column (as strings, ready for display)
    pub values: Vec<String>,
}

impl TableRow {
    fn from_counts(label: impl Into<String>, counts: &LineCounts) -> Self {
        Self {
            label: label.into(),
            values: vec![
                counts.blank.to_string(),
                counts.comments.to_string(),
                counts.code.to_string(),
            ],
        }
    }
}

/// Table-ready report data.
///
/// This is the final data structure before presentation. Renderers iterate
/// over headers/rows/footer and apply formatting - no computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTable {
    /// Column headers: [label_header, white space, comment, code]
    pub headers: Vec<String>,
    /// Data rows, in report order
    pub rows: Vec<TableRow>,
    /// Summary/footer row
    pub footer: TableRow,
}

impl ReportTable {
    /// Create a ReportTable from a Report.
    pub fn from_report(report: &Report) -> Self {
        let headers = HEADERS.iter().map(|h| h.to_string()).collect();
        let rows = report
            .rows
            .iter()
            .map(|f| TableRow::from_counts(f.path.to_string_lossy(), &f.counts))
            .collect();
        let footer = TableRow::from_counts(TOTAL_LABEL, &report.total);

        ReportTable {
            headers,
            rows,
            footer,
        }
    }
}

impl From<&Report> for ReportTable {
    fn from(report: &Report) -> Self {
        Self::from_report(report)
    }
}
