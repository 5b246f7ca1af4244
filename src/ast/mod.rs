//! Syntax tree module
//!
//! This module holds the expression tree shapes a parser produces.

pub mod node;

pub use node::Node;
