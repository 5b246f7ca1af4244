//! Source positions for scanning and diagnostics
//!
//! A `Position` is a cursor over a piece of source text. The lexer owns one
//! and advances it in place; tokens and errors hold independent snapshots of
//! it taken with [`Position::copy`].

use std::fmt;
use std::sync::Arc;

/// A cursor over labelled source text
///
/// Index and column start at `-1` so that the first `advance` lands on the
/// first character. Line and column are 0-based internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    index: isize,
    line: usize,
    column: isize,
    label: Arc<str>,
    text: Arc<str>,
}

impl Position {
    /// Create a position at an explicit location
    pub fn new(index: isize, line: usize, column: isize, label: &str, text: &str) -> Self {
        Self {
            index,
            line,
            column,
            label: Arc::from(label),
            text: Arc::from(text),
        }
    }

    /// Create the cursor that sits just before the first character
    pub fn before_start(label: &str, text: &str) -> Self {
        Self::new(-1, 0, -1, label, text)
    }

    /// Move past `current_char`
    ///
    /// `None` is passed for the very first advance, when no character has
    /// been read yet. Passing over a newline starts a new line.
    pub fn advance(&mut self, current_char: Option<char>) -> &mut Self {
        self.index += 1;
        self.column += 1;

        if current_char == Some('\n') {
            self.line += 1;
            self.column = 0;
        }

        self
    }

    /// Take an independent snapshot of this position
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Absolute character index
    pub fn index(&self) -> isize {
        self.index
    }

    /// Line number (0-based)
    pub fn line(&self) -> usize {
        self.line
    }

    /// Column number (0-based)
    pub fn column(&self) -> isize {
        self.column
    }

    /// Label identifying the source, usually a file name
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The full source text
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.label, self.line + 1, self.column + 1)
    }
}
