//! File eligibility with suffix and glob exclude support.

use std::path::Path;

use glob::Pattern;

use crate::error::SlocError;
use crate::Result;

/// Suffix scanned when none is configured.
pub const DEFAULT_SUFFIX: &str = ".go";

/// Configuration for file eligibility.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// File name suffix a source file must end with
    pub suffix: String,
    /// Glob patterns to exclude
    pub exclude: Vec<Pattern>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            exclude: Vec::new(),
        }
    }
}

impl FilterConfig {
    /// Create a new filter config for `.go` files.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source file suffix.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        let pat = Pattern::new(pattern).map_err(|e| SlocError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.exclude.push(pat);
        Ok(self)
    }

    /// Add multiple exclude patterns.
    pub fn exclude_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.exclude(pattern)?;
        }
        Ok(self)
    }

    /// Check if a file is eligible for scanning.
    ///
    /// A path matches if its file name ends with the suffix and it doesn't
    /// match any exclude pattern.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        if !name.to_string_lossy().ends_with(self.suffix.as_str()) {
            return false;
        }

        let path_str = path.to_string_lossy();
        !self.exclude.iter().any(|pattern| pattern.matches(&path_str))
    }
}
