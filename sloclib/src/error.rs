//! Error types for sloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while counting lines
#[derive(Error, Debug)]
pub enum SlocError {
    /// Failed to open or read an eligible file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Root path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Root path exists but cannot be stat'd
    #[error("cannot access '{path}': {source}")]
    RootAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Unknown log level name
    #[error("invalid log level: found '{0}' (expected one of CRITICAL, ERROR, WARNING, NOTICE, INFO, DEBUG)")]
    InvalidLogLevel(String),

    /// The aggregator stopped before the pipeline finished
    #[error("aggregator failed: {0}")]
    Aggregator(String),

    /// A walker thread panicked
    #[error("walker failed: {0}")]
    Walker(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
