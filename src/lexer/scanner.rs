//! Lexer/Scanner implementation for the arithmetic language
//!
//! This module implements lexical analysis, converting source text into
//! tokens in a single pass. Scanning stops at the first character that
//! starts no token.

use crate::error::{ArithError, ArithResult};
use crate::position::Position;
use super::token::{Token, TokenKind};

use tracing::{debug, trace};

/// Lexer for arithmetic source text
pub struct Lexer {
    source: Vec<char>,
    pos: Position,
    current_char: Option<char>,
}

impl Lexer {
    /// Create a new lexer over `text`, labelled `label` in diagnostics
    pub fn new(label: &str, text: &str) -> Self {
        trace!(target: "arith::lexer", label, len = text.len(), "Creating new Lexer");
        let mut lexer = Self {
            source: text.chars().collect(),
            pos: Position::before_start(label, text),
            current_char: None,
        };
        lexer.advance();
        lexer
    }

    /// Tokenize the source text
    ///
    /// On success the tokens end with a single EOF token. The first illegal
    /// character aborts the scan and no tokens are returned.
    pub fn make_tokens(mut self) -> ArithResult<Vec<Token>> {
        let mut tokens = Vec::new();

        while let Some(c) = self.current_char {
            match c {
                // Whitespace (skip)
                ' ' | '\t' => self.advance(),

                // Number literals
                c if c.is_ascii_digit() => tokens.push(self.make_number()?),

                _ => match TokenKind::from_char(c) {
                    Some(kind) => {
                        let token = Token::single(kind, &self.pos);
                        trace!(target: "arith::lexer::scanner", token = %token, "Produced token");
                        tokens.push(token);
                        self.advance();
                    }
                    None => {
                        let start = self.pos.copy();
                        self.advance();
                        debug!(
                            target: "arith::lexer::scanner",
                            character = ?c,
                            line = start.line(),
                            column = start.column(),
                            "Illegal character, aborting scan"
                        );
                        return Err(ArithError::illegal_character(start, self.pos.copy(), c));
                    }
                },
            }
        }

        tokens.push(Token::eof(&self.pos));
        debug!(target: "arith::lexer", count = tokens.len(), "Scan complete");

        Ok(tokens)
    }

    /// Scan an integer or float literal
    ///
    /// A second decimal point ends the literal and is left as the current
    /// character.
    fn make_number(&mut self) -> ArithResult<Token> {
        let start = self.pos.copy();
        let mut literal = String::new();
        let mut dot_count = 0;

        while let Some(c) = self.current_char {
            if c == '.' {
                if dot_count == 1 {
                    break;
                }
                dot_count += 1;
            } else if !c.is_ascii_digit() {
                break;
            }
            literal.push(c);
            self.advance();
        }

        let kind = if dot_count == 0 {
            match literal.parse::<i64>() {
                Ok(value) => TokenKind::Int(value),
                Err(_) => {
                    debug!(target: "arith::lexer::scanner", literal = %literal, "Integer literal out of range");
                    return Err(ArithError::invalid_number(start, self.pos.copy(), &literal));
                }
            }
        } else {
            // Digits and one '.' always parse, `1.` included
            match literal.parse::<f64>() {
                Ok(value) => TokenKind::Float(value),
                Err(_) => return Err(ArithError::invalid_number(start, self.pos.copy(), &literal)),
            }
        };

        let token = Token::new(kind, start, self.pos.copy());
        trace!(target: "arith::lexer::scanner", token = %token, "Produced token");
        Ok(token)
    }

    /// Advance to the next character
    fn advance(&mut self) {
        self.pos.advance(self.current_char);
        self.current_char = usize::try_from(self.pos.index())
            .ok()
            .and_then(|index| self.source.get(index).copied());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn tokenize_source(source: &str) -> ArithResult<Vec<Token>> {
        Lexer::new("<stdin>", source).make_tokens()
    }

    fn render(tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(|token| token.to_string()).collect()
    }

    fn scan_error(source: &str) -> ArithError {
        match tokenize_source(source) {
            Ok(tokens) => panic!("expected an error, got {:?}", render(&tokens)),
            Err(err) => err,
        }
    }

    #[test]
    fn test_empty_source() {
        let tokens = tokenize_source("").unwrap();
        assert_eq!(tokens.len(), 1); // Just EOF
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(tokens[0].start().index(), 0);
        assert_eq!(tokens[0].start(), tokens[0].end());
    }

    #[test]
    fn test_addition() {
        let tokens = tokenize_source("23 + 45").unwrap();
        assert_eq!(render(&tokens), vec!["INT:23", "PLUS", "INT:45", "EOF"]);
    }

    #[test]
    fn test_float_literal() {
        let tokens = tokenize_source("3.4").unwrap();
        assert_eq!(render(&tokens), vec!["FLOAT:3.4", "EOF"]);
        assert_eq!(tokens[0].kind, TokenKind::Float(3.4));
    }

    #[test]
    fn test_parenthesised_expression() {
        let tokens = tokenize_source("(1 + 2) * 3").unwrap();
        assert_eq!(
            render(&tokens),
            vec!["LPAREN", "INT:1", "PLUS", "INT:2", "RPAREN", "MUL", "INT:3", "EOF"]
        );
    }

    #[test]
    fn test_single_character_tokens() {
        let tokens = tokenize_source("+-*/()").unwrap();
        let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Mul,
                TokenKind::Div,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_tabs_are_whitespace() {
        let tokens = tokenize_source("\t7\t-\t2 ").unwrap();
        assert_eq!(render(&tokens), vec!["INT:7", "MINUS", "INT:2", "EOF"]);
    }

    #[test]
    fn test_integer_and_float_kinds() {
        let tokens = tokenize_source("0 42 1. 0.5 123.456").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Int(0));
        assert_eq!(tokens[1].kind, TokenKind::Int(42));
        assert_eq!(tokens[2].kind, TokenKind::Float(1.0));
        assert_eq!(tokens[3].kind, TokenKind::Float(0.5));
        assert_eq!(tokens[4].kind, TokenKind::Float(123.456));
    }

    #[test]
    fn test_illegal_character() {
        let err = scan_error("2 + 3&");
        assert_eq!(err.kind(), ErrorKind::IllegalCharacter);
        assert_eq!(err.details(), "'&'");
        assert_eq!(err.to_string(), "Illegal Character: '&'\nFile <stdin>, line 1");
    }

    #[test]
    fn test_illegal_character_span() {
        let err = scan_error("12 % 5");
        assert_eq!(err.start().line(), 0);
        assert_eq!(err.start().column(), 3);
        assert_eq!(err.end().line(), 0);
        assert_eq!(err.end().column(), 4);
        assert_eq!(err.end().index() - err.start().index(), 1);
    }

    #[test]
    fn test_second_decimal_point_is_not_consumed() {
        let err = scan_error("1.2.3");
        assert_eq!(err.kind(), ErrorKind::IllegalCharacter);
        assert_eq!(err.details(), "'.'");
        assert_eq!(err.start().index(), 3);
        assert_eq!(err.end().index(), 4);
    }

    #[test]
    fn test_leading_decimal_point_is_illegal() {
        let err = scan_error(".5");
        assert_eq!(err.details(), "'.'");
        assert_eq!(err.start().column(), 0);
    }

    #[test]
    fn test_newline_is_illegal() {
        let err = scan_error("1\n2");
        assert_eq!(err.details(), "'\n'");
        assert_eq!(err.start().line(), 0);
        assert_eq!(err.start().column(), 1);
        assert_eq!(err.end().line(), 1);
        assert_eq!(err.end().column(), 0);
    }

    #[test]
    fn test_integer_overflow() {
        let err = scan_error("1 + 99999999999999999999");
        assert_eq!(err.kind(), ErrorKind::InvalidNumber);
        assert_eq!(err.details(), "'99999999999999999999'");
        assert_eq!(err.start().column(), 4);
        assert_eq!(err.end().column(), 24);
    }

    #[test]
    fn test_token_spans() {
        let tokens = tokenize_source("12.5 * (3)").unwrap();
        let spans: Vec<(isize, isize)> = tokens
            .iter()
            .map(|token| (token.start().column(), token.end().column()))
            .collect();
        assert_eq!(spans, vec![(0, 4), (5, 6), (7, 8), (8, 9), (9, 10), (10, 10)]);

        let lexemes: Vec<String> = tokens.iter().map(Token::lexeme).collect();
        assert_eq!(lexemes, vec!["12.5", "*", "(", "3", ")", ""]);
    }

    #[test]
    fn test_float_span_stops_before_second_point() {
        // The scan aborts on the second point, so look at the number alone
        let mut lexer = Lexer::new("<stdin>", "1.2.3");
        let token = lexer.make_number().unwrap();
        assert_eq!(token.kind, TokenKind::Float(1.2));
        assert_eq!(token.start().index(), 0);
        assert_eq!(token.end().index(), 3);
        assert_eq!(lexer.current_char, Some('.'));
    }

    #[test]
    fn test_eof_is_always_last() {
        for source in ["1", "1 + 2", "((3.5))", "   ", "8 / 4 - 2 * 1.5"] {
            let tokens = tokenize_source(source).unwrap();
            assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::Eof));
            let eof_count = tokens.iter().filter(|token| token.kind == TokenKind::Eof).count();
            assert_eq!(eof_count, 1);
        }
    }

    #[test]
    fn test_rescanning_is_deterministic() {
        let source = "(4.25 - 1) / 3";
        let first = tokenize_source(source).unwrap();
        let second = tokenize_source(source).unwrap();
        assert_eq!(first, second);
    }
}
