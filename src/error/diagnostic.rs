//! Diagnostic formatting for better error messages
//!
//! This module renders an error together with the source line it points at
//! and a caret underline beneath the offending span.

use super::ArithError;
use colored::Colorize;

/// Diagnostic information for displaying errors with context
pub struct Diagnostic<'a> {
    error: &'a ArithError,
    color: bool,
}

impl<'a> Diagnostic<'a> {
    /// Create a colored diagnostic from an error
    pub fn new(error: &'a ArithError) -> Self {
        Self { error, color: true }
    }

    /// Create a diagnostic that never emits color codes
    pub fn plain(error: &'a ArithError) -> Self {
        Self {
            error,
            color: false,
        }
    }

    /// Format the diagnostic with the offending source line underlined
    pub fn format(&self) -> String {
        let start = self.error.start();
        let kind = self.error.kind().as_str();

        let mut output = String::new();
        if self.color {
            output.push_str(&format!("{}: ", kind.red().bold()));
        } else {
            output.push_str(&format!("{}: ", kind));
        }
        output.push_str(self.error.details());
        output.push('\n');
        output.push_str(&format!("File {}, line {}\n", start.label(), start.line() + 1));
        output.push_str(&self.format_source_context());

        output
    }

    /// Render the line holding the span start, then carets under the span
    fn format_source_context(&self) -> String {
        let start = self.error.start();
        let end = self.error.end();

        let Some(line) = start.text().split('\n').nth(start.line()) else {
            return String::new();
        };

        let from = usize::try_from(start.column()).unwrap_or(0);
        // Spans that run onto a later line are underlined to the end of this one.
        let to = if end.line() == start.line() {
            usize::try_from(end.column()).unwrap_or(from)
        } else {
            line.chars().count()
        };
        let width = to.saturating_sub(from).max(1);

        let padding = " ".repeat(from);
        let carets = "^".repeat(width);

        let mut output = String::new();
        if self.color {
            output.push_str(&format!("  {} {}\n", "|".blue().bold(), line));
            output.push_str(&format!("  {} {}{}\n", "|".blue().bold(), padding, carets.red().bold()));
        } else {
            output.push_str(&format!("  | {}\n", line));
            output.push_str(&format!("  | {}{}\n", padding, carets));
        }
        output
    }
}

impl std::fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
