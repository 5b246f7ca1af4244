//! # Arith Language
//!
//! Front end for a small arithmetic expression language: integer and float
//! literals, `+ - * /`, and parentheses.
//!
//! ## Architecture
//!
//! - `position`: Cursor over source text, used for spans and diagnostics
//! - `error`: Error type and diagnostic formatting
//! - `lexer`: Tokenization of source text
//! - `ast`: Expression tree shapes built by a parser

pub mod position;
pub mod error;
pub mod lexer;
pub mod ast;

// Re-export commonly used types
pub use ast::Node;
pub use error::{ArithError, ArithResult, Diagnostic, ErrorKind};
pub use lexer::{Lexer, Literal, Token, TokenKind};
pub use position::Position;

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tokenize `text` in one pass
///
/// `label` names the source in error messages, usually a file name or
/// `<stdin>`.
pub fn run(label: &str, text: &str) -> ArithResult<Vec<Token>> {
    Lexer::new(label, text).make_tokens()
}
