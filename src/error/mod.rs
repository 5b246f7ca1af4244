//! Error handling and diagnostics for the arithmetic language
//!
//! Every error carries the span it was raised at, a kind, and a details
//! string. Scanning is fail-fast, so a single error ends the pass.

use std::fmt;

use crate::position::Position;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for arithmetic language operations
pub type ArithResult<T> = Result<T, ArithError>;

/// Kinds of errors raised while scanning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character that starts no token
    IllegalCharacter,
    /// An integer literal too large to represent
    InvalidNumber,
}

impl ErrorKind {
    /// Label shown at the start of the rendered error
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IllegalCharacter => "Illegal Character",
            Self::InvalidNumber => "Invalid Number",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for the arithmetic language
///
/// `start` is inclusive and `end` exclusive. Rendering reports the line of
/// `start`, 1-based.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind}: {details}\nFile {}, line {}", .start.label(), .start.line() + 1)]
pub struct ArithError {
    start: Position,
    end: Position,
    kind: ErrorKind,
    details: String,
}

impl ArithError {
    /// Create a new error spanning `start..end`
    pub fn new(start: Position, end: Position, kind: ErrorKind, details: impl Into<String>) -> Self {
        Self {
            start,
            end,
            kind,
            details: details.into(),
        }
    }

    /// Create an illegal character error for `character`
    pub fn illegal_character(start: Position, end: Position, character: char) -> Self {
        Self::new(start, end, ErrorKind::IllegalCharacter, format!("'{}'", character))
    }

    /// Create an error for a numeric literal that cannot be represented
    pub fn invalid_number(start: Position, end: Position, literal: &str) -> Self {
        Self::new(start, end, ErrorKind::InvalidNumber, format!("'{}'", literal))
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    /// Start of the offending span
    pub fn start(&self) -> &Position {
        &self.start
    }

    /// End of the offending span (exclusive)
    pub fn end(&self) -> &Position {
        &self.end
    }
}
