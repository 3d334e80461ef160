//! High-level counting API.
//!
//! [`count_paths`] wires the pipeline together: one aggregator thread owns
//! the receiving end of a channel, every root path is walked with a clone of
//! the sender, and the report is taken from the aggregator once all senders
//! are gone. The channel is closed on every exit path, so a failed walk never
//! leaves the aggregator blocked.

use std::path::Path;
use std::thread;

use crossbeam_channel::{unbounded, Sender};

use crate::aggregator::Aggregator;
use crate::classifier::CommentSyntax;
use crate::error::SlocError;
use crate::options::CountOptions;
use crate::report::Report;
use crate::scanner::scan_file;
use crate::stats::FileStats;
use crate::walker::{walk, WalkSummary};
use crate::Result;

/// Count lines under every root path.
///
/// Roots are walked one after another on the calling thread, or one thread
/// per root when [`CountOptions::parallel`] is set. Rows appear in the order
/// records reach the aggregator.
///
/// Any fatal error (missing root, unreadable file) discards the records
/// aggregated so far and is returned once the aggregator has shut down.
///
/// # Example
///
/// ```rust,ignore
/// use sloclib::{count_paths, CountOptions, FilterConfig};
///
/// let report = count_paths(&["src", "cmd"], &CountOptions::new())?;
/// println!("{} files, {} code lines", report.file_count(), report.total.code);
/// ```
pub fn count_paths<P>(paths: &[P], options: &CountOptions) -> Result<Report>
where
    P: AsRef<Path> + Sync,
{
    let (tx, rx) = unbounded();
    let aggregator = Aggregator::spawn(rx)?;

    // Both walkers consume the sender; it is dropped before they return.
    let walked = if options.parallel {
        walk_parallel(paths, options, tx)
    } else {
        walk_sequential(paths, options, tx)
    };

    let report = aggregator.wait();
    walked?;
    report
}

/// Count lines in a single file.
///
/// # Example
///
/// ```rust,ignore
/// use sloclib::{count_file, CommentSyntax};
///
/// let stats = count_file("main.go", &CommentSyntax::default())?;
/// println!("Code: {}, Comments: {}", stats.counts.code, stats.counts.comments);
/// ```
pub fn count_file(path: impl AsRef<Path>, syntax: &CommentSyntax) -> Result<FileStats> {
    scan_file(path, syntax)
}

fn send(tx: &Sender<FileStats>, stats: FileStats) -> Result<()> {
    tx.send(stats)
        .map_err(|_| SlocError::Aggregator("aggregator stopped receiving".to_string()))
}

fn walk_sequential<P: AsRef<Path>>(
    paths: &[P],
    options: &CountOptions,
    tx: Sender<FileStats>,
) -> Result<()> {
    for root in paths {
        log::debug!("processing {}", root.as_ref().display());
        walk(root, options, |stats| send(&tx, stats))?;
    }
    Ok(())
}

fn walk_parallel<P>(paths: &[P], options: &CountOptions, tx: Sender<FileStats>) -> Result<()>
where
    P: AsRef<Path> + Sync,
{
    let results: Vec<Result<WalkSummary>> = thread::scope(|scope| {
        let handles: Vec<_> = paths
            .iter()
            .map(|root| {
                let tx = tx.clone();
                scope.spawn(move || {
                    log::debug!("processing {}", root.as_ref().display());
                    walk(root, options, |stats| send(&tx, stats))
                })
            })
            .collect();
        drop(tx);

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|_| Err(SlocError::Walker("walker thread panicked".to_string())))
            })
            .collect()
    });

    // First failure in root order wins.
    results.into_iter().try_for_each(|result| result.map(drop))
}
