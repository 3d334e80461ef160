//! The finished result of a counting run.

use serde::{Deserialize, Serialize};

use crate::stats::{FileStats, LineCounts};

/// Per-file rows plus their running total.
///
/// Rows keep the order in which records reached the aggregator; they are
/// never sorted or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// One row per scanned file, in arrival order
    pub rows: Vec<FileStats>,
    /// Elementwise sum of every row
    pub total: LineCounts,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row and add it into the total.
    pub fn add_file(&mut self, stats: FileStats) {
        self.total += stats.counts;
        self.rows.push(stats);
    }

    /// Number of files in the report
    pub fn file_count(&self) -> usize {
        self.rows.len()
    }
}
