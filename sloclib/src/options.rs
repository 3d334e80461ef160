//! Input options for line counting.
//!
//! This module contains the configuration types that control which files are
//! scanned, how lines are classified, and how verbose diagnostics are.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::classifier::CommentSyntax;
use crate::error::SlocError;
use crate::filter::FilterConfig;

/// Options for counting lines.
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    /// File eligibility
    pub filter: FilterConfig,
    /// Comment markers
    pub syntax: CommentSyntax,
    /// Walk root paths concurrently instead of one after another
    pub parallel: bool,
}

impl CountOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    /// Set comment markers.
    pub fn syntax(mut self, syntax: CommentSyntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Walk each root on its own thread.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Diagnostic verbosity accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogLevel {
    Critical,
    Error,
    Warning,
    Notice,
    #[default]
    Info,
    Debug,
}

impl LogLevel {
    /// All levels, least verbose first.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Critical,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Notice,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    /// Upper-case name as written on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Critical => "CRITICAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Notice => "NOTICE",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Map onto the `log` crate's filter.
    ///
    /// `log` has no critical or notice levels; they fold into error and info.
    /// DEBUG enables per-file trace output as well.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Critical | LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Notice | LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Trace,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = SlocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| SlocError::InvalidLogLevel(s.to_string()))
    }
}
