//! Recursive source discovery.
//!
//! A walk starts at one root path. A root file is checked for eligibility and
//! scanned directly; a root directory is traversed recursively and every
//! eligible regular file is scanned. Each finished [`FileStats`] is handed to
//! the caller's `emit` callback as soon as it is produced.
//!
//! A missing root aborts the walk. Entries inside the tree that cannot be
//! read are logged and skipped. Scan failures abort the walk.
//!
//! Directory symlinks are not descended into. A symlink whose target is a
//! regular file is treated like that file.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::error::SlocError;
use crate::options::CountOptions;
use crate::scanner::scan_file;
use crate::stats::FileStats;
use crate::Result;

/// What happened during one walk, for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Files scanned and emitted
    pub files_emitted: u64,
    /// Files that were not eligible, and symlinks that do not point at a file
    pub files_ignored: u64,
    /// Entries skipped because they could not be read
    pub skipped_entries: u64,
}

/// Walk `root` and emit one record per eligible file.
///
/// `emit` may fail (for example when the receiving side of a channel is
/// gone); its error stops the walk.
pub fn walk<F>(root: impl AsRef<Path>, options: &CountOptions, mut emit: F) -> Result<WalkSummary>
where
    F: FnMut(FileStats) -> Result<()>,
{
    let root = root.as_ref();
    let mut summary = WalkSummary::default();

    let metadata = fs::metadata(root).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => SlocError::PathNotFound(root.to_path_buf()),
        _ => SlocError::RootAccess {
            path: root.to_path_buf(),
            source,
        },
    })?;

    if !metadata.is_dir() {
        visit_file(root, options, &mut emit, &mut summary)?;
        return Ok(summary);
    }

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("skipping unreadable entry: {e}");
                summary.skipped_entries += 1;
                continue;
            }
        };

        if entry.file_type().is_file() {
            visit_file(entry.path(), options, &mut emit, &mut summary)?;
        } else if entry.file_type().is_symlink() {
            visit_symlink(&entry, options, &mut emit, &mut summary)?;
        }
    }

    log::info!(
        "{}: {} files scanned, {} ignored, {} entries skipped",
        root.display(),
        summary.files_emitted,
        summary.files_ignored,
        summary.skipped_entries
    );

    Ok(summary)
}

fn visit_file<F>(
    path: &Path,
    options: &CountOptions,
    emit: &mut F,
    summary: &mut WalkSummary,
) -> Result<()>
where
    F: FnMut(FileStats) -> Result<()>,
{
    if !options.filter.matches(path) {
        log::trace!("ignoring {}", path.display());
        summary.files_ignored += 1;
        return Ok(());
    }

    log::debug!("scanning {}", path.display());
    emit(scan_file(path, &options.syntax)?)?;
    summary.files_emitted += 1;
    Ok(())
}

fn visit_symlink<F>(
    entry: &DirEntry,
    options: &CountOptions,
    emit: &mut F,
    summary: &mut WalkSummary,
) -> Result<()>
where
    F: FnMut(FileStats) -> Result<()>,
{
    match fs::metadata(entry.path()) {
        Ok(target) if target.is_file() => visit_file(entry.path(), options, emit, summary),
        Ok(_) => {
            log::trace!("ignoring {}: link target is not a file", entry.path().display());
            summary.files_ignored += 1;
            Ok(())
        }
        Err(e) => {
            log::trace!("ignoring {}: {e}", entry.path().display());
            summary.files_ignored += 1;
            Ok(())
        }
    }
}
