//! Lexical analysis module
//!
//! This module handles tokenization of arithmetic source text.

pub mod token;
pub mod scanner;

pub use token::{Token, TokenKind, Literal};
pub use scanner::Lexer;
