//! Token definitions for the arithmetic language
//!
//! This module defines the token kinds produced by lexical analysis.

use crate::position::Position;
use std::fmt;

/// A token in the arithmetic language
///
/// The span `start..end` covers exactly the characters of the lexeme. For
/// the EOF token both ends sit on the final position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    start: Position,
    end: Position,
}

impl Token {
    /// Create a new token spanning `start..end`
    pub fn new(kind: TokenKind, start: Position, end: Position) -> Self {
        Self { kind, start, end }
    }

    /// Create a token covering the single character at `start`
    pub fn single(kind: TokenKind, start: &Position) -> Self {
        let mut end = start.copy();
        end.advance(None);
        Self::new(kind, start.copy(), end)
    }

    /// Create the end-of-input token at `pos`
    pub fn eof(pos: &Position) -> Self {
        Self::new(TokenKind::Eof, pos.copy(), pos.copy())
    }

    /// The literal value carried by INT and FLOAT tokens
    pub fn value(&self) -> Option<Literal> {
        match self.kind {
            TokenKind::Int(value) => Some(Literal::Integer(value)),
            TokenKind::Float(value) => Some(Literal::Float(value)),
            _ => None,
        }
    }

    pub fn start(&self) -> &Position {
        &self.start
    }

    pub fn end(&self) -> &Position {
        &self.end
    }

    /// The source characters covered by this token
    pub fn lexeme(&self) -> String {
        let from = usize::try_from(self.start.index()).unwrap_or(0);
        let to = usize::try_from(self.end.index()).unwrap_or(0);
        self.start
            .text()
            .chars()
            .skip(from)
            .take(to.saturating_sub(from))
            .collect()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Zero renders as `INT:0`; only value-less kinds render bare.
        match self.value() {
            Some(value) => write!(f, "{}:{}", self.kind.name(), value),
            None => write!(f, "{}", self.kind.name()),
        }
    }
}

/// Token kinds in the arithmetic language
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    // Literals
    Int(i64),
    Float(f64),

    // Arithmetic
    Plus,       // +
    Minus,      // -
    Mul,        // *
    Div,        // /

    // Delimiters
    LParen,     // (
    RParen,     // )

    // Special
    Eof,
}

impl TokenKind {
    /// Map a single-character operator or paren to its kind
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '(' => Some(Self::LParen),
            ')' => Some(Self::RParen),
            _ => None,
        }
    }

    /// Upper-case label used when rendering tokens
    pub fn name(&self) -> &'static str {
        match self {
            Self::Int(_) => "INT",
            Self::Float(_) => "FLOAT",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Eof => "EOF",
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Literal token values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Integer(i64),
    Float(f64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{}", value),
            // Debug keeps the fractional part, so 1.0 prints as `1.0`
            Self::Float(value) => write!(f, "{:?}", value),
        }
    }
}
