//! # Sequence Parsing
//!
//! Parses `{ ... }` sequence literals.
//!
//! ## Forms
//!
//! - `{}`: empty
//! - `{1, 2, 3}`: explicit elements
//! - `{1 ... 5}` or `{1, ..., 5}`: continue up to a bound
//! - `{1 ...}`: unbounded, evaluated lazily

use super::Parser;
use crate::ast::{Ast, SequenceLiteral, SequenceTail};
use crate::error::ParseError;
use crate::lexer::TokenKind;

impl<'a> Parser<'a> {
    /// Parse a sequence literal, optionally named by an enclosing `name = `.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// sequence = "{" "}"
    ///          | "{" expression ("," expression)* (","? "..." expression?)? "}"
    /// ```
    pub(super) fn parse_sequence(&mut self, name: Option<String>) -> Result<Ast, ParseError> {
        self.expect(TokenKind::LBrace)?;

        let mut elements = Vec::new();
        let mut tail = None;

        if !self.match_token(TokenKind::RBrace) {
            loop {
                elements.push(self.parse_expression()?);

                if self.match_token(TokenKind::Comma) && !self.check(TokenKind::Ellipsis) {
                    continue;
                }
                if self.match_token(TokenKind::Ellipsis) {
                    tail = Some(if self.check(TokenKind::RBrace) {
                        SequenceTail::Unbounded
                    } else {
                        SequenceTail::UpTo(Box::new(self.parse_expression()?))
                    });
                }
                self.expect(TokenKind::RBrace)?;
                break;
            }
        }

        Ok(Ast::Sequence(SequenceLiteral {
            elements,
            tail,
            name,
        }))
    }
}

// =============================================================================
// TESTS
// =============================================================================
