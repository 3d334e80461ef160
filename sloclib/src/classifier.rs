//! Full-line comment classification.
//!
//! Each physical line is trimmed and then classified as blank, comment, or
//! code. The only state carried between lines is whether a block comment is
//! currently open. Block comments are tracked one level deep and comments
//! trailing code on the same line are not detected.

use serde::{Deserialize, Serialize};

/// Category of a single physical line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Empty after trimming whitespace
    Blank,
    /// Line comment, block comment, or a line inside an open block comment
    Comment,
    /// Anything else
    Code,
}

/// State carried from one line to the next within a single file.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ClassifierState {
    /// A block comment was opened and has not been closed yet
    pub in_block_comment: bool,
}

/// Comment markers used for classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentSyntax {
    /// Line comment prefix (`//`)
    pub line: String,
    /// Block comment opening marker (`/*`)
    pub block_open: String,
    /// Block comment closing marker (`*/`)
    pub block_close: String,
}

impl Default for CommentSyntax {
    fn default() -> Self {
        Self::new("//", "/*", "*/")
    }
}

impl CommentSyntax {
    /// Create a syntax from its three markers.
    pub fn new(
        line: impl Into<String>,
        block_open: impl Into<String>,
        block_close: impl Into<String>,
    ) -> Self {
        Self {
            line: line.into(),
            block_open: block_open.into(),
            block_close: block_close.into(),
        }
    }

    /// Classify one line given the state left by the previous line.
    ///
    /// Precedence: blank, then an open block comment, then the line marker,
    /// then the block opening marker. A line starting with the line marker
    /// never opens a block, even if it contains the opening marker.
    pub fn classify(&self, line: &str, state: ClassifierState) -> (LineKind, ClassifierState) {
        let line = line.trim();

        if line.is_empty() {
            return (LineKind::Blank, state);
        }

        if state.in_block_comment {
            let in_block_comment = !line.ends_with(self.block_close.as_str());
            return (LineKind::Comment, ClassifierState { in_block_comment });
        }

        if line.starts_with(self.line.as_str()) {
            return (LineKind::Comment, state);
        }

        if line.starts_with(self.block_open.as_str()) {
            let in_block_comment = !line.ends_with(self.block_close.as_str());
            return (LineKind::Comment, ClassifierState { in_block_comment });
        }

        (LineKind::Code, state)
    }
}

/// Sequential classifier owning its syntax and per-file state.
#[derive(Debug, Clone, Default)]
pub struct LineClassifier {
    syntax: CommentSyntax,
    state: ClassifierState,
}

impl LineClassifier {
    /// Create a classifier with fresh state.
    pub fn new(syntax: CommentSyntax) -> Self {
        Self {
            syntax,
            state: ClassifierState::default(),
        }
    }

    /// Classify the next line of the current file.
    pub fn classify_line(&mut self, line: &str) -> LineKind {
        let (kind, state) = self.syntax.classify(line, self.state);
        self.state = state;
        kind
    }

    /// Current carried state.
    pub fn state(&self) -> ClassifierState {
        self.state
    }
}
