//! Single consumer at the end of the counting pipeline.
//!
//! Producers send [`FileStats`] records into one shared channel. The
//! aggregator drains that channel on its own thread until every sender has
//! been dropped, then returns the finished [`Report`]. Joining the
//! aggregator through [`AggregatorHandle::wait`] is the one-shot completion
//! signal: the report is only observable after the channel has closed and
//! the last record has been counted.

use std::thread::{self, JoinHandle};

use crossbeam_channel::Receiver;

use crate::error::SlocError;
use crate::report::Report;
use crate::stats::FileStats;
use crate::Result;

/// Accumulates file records into a report.
#[derive(Debug, Default)]
pub struct Aggregator {
    report: Report,
}

impl Aggregator {
    /// Create an aggregator with an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one record.
    pub fn push(&mut self, stats: FileStats) {
        log::debug!(
            "{}: code={} comments={} blank={}",
            stats.path.display(),
            stats.counts.code,
            stats.counts.comments,
            stats.counts.blank
        );
        self.report.add_file(stats);
    }

    /// Finish and hand over the report.
    pub fn finish(self) -> Report {
        self.report
    }

    /// Drain `source` until it is closed and return the report.
    ///
    /// Blocks while the channel is open and empty; returns only once every
    /// sender has been dropped.
    pub fn run(source: Receiver<FileStats>) -> Report {
        let mut aggregator = Self::new();
        for stats in source {
            aggregator.push(stats);
        }
        aggregator.finish()
    }

    /// Run the aggregator on a dedicated thread.
    pub fn spawn(source: Receiver<FileStats>) -> Result<AggregatorHandle> {
        let handle = thread::Builder::new()
            .name("sloc-aggregator".to_string())
            .spawn(move || Self::run(source))?;
        Ok(AggregatorHandle { handle })
    }
}

/// Handle to a running aggregator thread.
#[derive(Debug)]
pub struct AggregatorHandle {
    handle: JoinHandle<Report>,
}

impl AggregatorHandle {
    /// Wait for the aggregator to finish and take its report.
    ///
    /// Only returns after every sender for the channel has been dropped.
    pub fn wait(self) -> Result<Report> {
        self.handle
            .join()
            .map_err(|_| SlocError::Aggregator("aggregator thread panicked".to_string()))
    }
}
