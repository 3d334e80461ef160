//! # sloclib
//!
//! A source line counter library that classifies every line of a source file
//! as code, comment, or blank and aggregates the counts per file and in total.
//!
//! ## Overview
//!
//! Counting is a small pipeline:
//!
//! - **Walk**: each root path is traversed recursively and files ending in the
//!   configured suffix are picked up
//! - **Scan**: every eligible file is read line by line through a full-line
//!   comment classifier (`//`, `/* */` by default)
//! - **Aggregate**: per-file records are sent over one shared channel to a
//!   single aggregator thread, which builds the [`Report`]
//!
//! ## Features
//!
//! - **Configurable markers**: one line-comment and one block-comment pair
//! - **Suffix and glob filtering**: pick the file type, exclude paths
//! - **Parallel roots**: walk several roots concurrently into one report
//! - **Pure Rust data types**: returns structured data, no printing
//!
//! ## Example
//!
//! ```rust
//! use sloclib::{count_paths, CountOptions, ReportTable};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("a.go"), "package a\n\nfunc A() {\n}\n").unwrap();
//! fs::write(dir.path().join("b.go"), "// one\n// two\n").unwrap();
//! fs::write(dir.path().join("readme.txt"), "ignored\n").unwrap();
//!
//! let report = count_paths(&[dir.path()], &CountOptions::new()).unwrap();
//! assert_eq!(report.file_count(), 2);
//! assert_eq!(report.total.code, 3);
//! assert_eq!(report.total.comments, 2);
//! assert_eq!(report.total.blank, 1);
//!
//! let table = ReportTable::from_report(&report);
//! assert_eq!(table.footer.label, "TOTAL");
//! ```

pub mod aggregator;
pub mod classifier;
pub mod counter;
pub mod error;
pub mod filter;
pub mod options;
pub mod report;
pub mod scanner;
pub mod stats;
pub mod table;
pub mod walker;

pub use aggregator::{Aggregator, AggregatorHandle};
pub use classifier::{ClassifierState, CommentSyntax, LineClassifier, LineKind};
pub use counter::{count_file, count_paths};
pub use error::SlocError;
pub use filter::FilterConfig;
pub use options::{CountOptions, LogLevel};
pub use report::Report;
pub use scanner::{scan_file, scan_reader, scan_str};
pub use stats::{FileStats, LineCounts};
pub use table::{ReportTable, TableRow};
pub use walker::{walk, WalkSummary};

/// Result type for sloclib operations
pub type Result<T> = std::result::Result<T, SlocError>;
