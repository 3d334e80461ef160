//! Core data structures for line statistics

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};
use std::path::PathBuf;

use crate::classifier::LineKind;

/// Line counts for a single file or a running total
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCounts {
    /// Lines with anything other than a comment
    pub code: u64,
    /// Line comments, block comments, and lines inside an open block comment
    pub comments: u64,
    /// Blank lines (whitespace only)
    pub blank: u64,
}

impl LineCounts {
    /// Create a new LineCounts with all zeros
    pub fn new() -> Self {
        Self::default()
    }

    /// Total physical lines
    pub fn total(&self) -> u64 {
        self.code + self.comments + self.blank
    }

    /// Count one classified line
    pub fn record(&mut self, kind: LineKind) {
        match kind {
            LineKind::Blank => self.blank += 1,
            LineKind::Comment => self.comments += 1,
            LineKind::Code => self.code += 1,
        }
    }
}

impl Add for LineCounts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            code: self.code + other.code,
            comments: self.comments + other.comments,
            blank: self.blank + other.blank,
        }
    }
}

impl AddAssign for LineCounts {
    fn add_assign(&mut self, other: Self) {
        self.code += other.code;
        self.comments += other.comments;
        self.blank += other.blank;
    }
}

/// Statistics for a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    /// Path to the file, as discovered by the walk
    pub path: PathBuf,
    /// Line counts for this file
    pub counts: LineCounts,
}

impl FileStats {
    /// Create new file stats
    pub fn new(path: PathBuf, counts: LineCounts) -> Self {
        Self { path, counts }
    }
}
