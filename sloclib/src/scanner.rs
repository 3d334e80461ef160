//! Per-file line scanning.
//!
//! A scan reads a file line by line in order, runs every line through a fresh
//! [`LineClassifier`], and produces one [`FileStats`]. A scan either returns a
//! complete record or an error, never a partial count.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::classifier::{CommentSyntax, LineClassifier};
use crate::error::SlocError;
use crate::stats::{FileStats, LineCounts};
use crate::Result;

/// Count the lines produced by a reader.
///
/// Lines are split on `\n`. Invalid UTF-8 is decoded lossily since only the
/// markers and surrounding whitespace matter for classification.
pub fn scan_reader<R: BufRead>(reader: R, syntax: &CommentSyntax) -> std::io::Result<LineCounts> {
    let mut classifier = LineClassifier::new(syntax.clone());
    let mut counts = LineCounts::new();

    for line in reader.split(b'\n') {
        let line = line?;
        counts.record(classifier.classify_line(&String::from_utf8_lossy(&line)));
    }

    Ok(counts)
}

/// Scan a single file.
///
/// # Example
///
/// ```rust,ignore
/// use sloclib::{scan_file, CommentSyntax};
///
/// let stats = scan_file("main.go", &CommentSyntax::default())?;
/// println!("code: {}, comments: {}", stats.counts.code, stats.counts.comments);
/// ```
pub fn scan_file(path: impl AsRef<Path>, syntax: &CommentSyntax) -> Result<FileStats> {
    let path = path.as_ref();
    let read_error = |source| SlocError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let counts = scan_reader(BufReader::new(file), syntax).map_err(read_error)?;

    Ok(FileStats::new(path.to_path_buf(), counts))
}

/// Scan an in-memory string, mostly useful for tests and tooling.
pub fn scan_str(source: &str, syntax: &CommentSyntax) -> LineCounts {
    let mut classifier = LineClassifier::new(syntax.clone());
    let mut counts = LineCounts::new();

    for line in source.lines() {
        counts.record(classifier.classify_line(line));
    }

    counts
}
