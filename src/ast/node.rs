//! Abstract Syntax Tree definitions
//!
//! This module defines the expression node shapes a parser builds from a
//! token sequence.

use crate::lexer::Token;
use crate::position::Position;
use std::fmt;

/// Expression node
///
/// Each node owns its children. Nodes are never modified once built.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Numeric literal, wrapping an INT or FLOAT token
    Number(Token),

    /// Binary operation: left op right
    BinaryOp {
        left: Box<Node>,
        operator: Token,
        right: Box<Node>,
    },

    /// Unary operation: op operand
    UnaryOp {
        operator: Token,
        operand: Box<Node>,
    },
}

impl Node {
    pub fn number(token: Token) -> Self {
        debug_assert!(token.kind.is_number(), "number node built from {}", token);
        Self::Number(token)
    }

    pub fn binary(left: Node, operator: Token, right: Node) -> Self {
        Self::BinaryOp {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn unary(operator: Token, operand: Node) -> Self {
        Self::UnaryOp {
            operator,
            operand: Box::new(operand),
        }
    }

    /// Start of the leftmost token in this subtree
    pub fn start(&self) -> &Position {
        match self {
            Self::Number(token) => token.start(),
            Self::BinaryOp { left, .. } => left.start(),
            Self::UnaryOp { operator, .. } => operator.start(),
        }
    }

    /// End of the rightmost token in this subtree
    pub fn end(&self) -> &Position {
        match self {
            Self::Number(token) => token.end(),
            Self::BinaryOp { right, .. } => right.end(),
            Self::UnaryOp { operand, .. } => operand.end(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(token) => write!(f, "{}", token),
            Self::BinaryOp { left, operator, right } => {
                write!(f, "({}, {}, {})", left, operator, right)
            }
            Self::UnaryOp { operator, operand } => write!(f, "({}, {})", operator, operand),
        }
    }
}
