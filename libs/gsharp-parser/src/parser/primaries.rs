//! # Primary Expression Parsing
//!
//! Parses literals and parenthesized expressions, and dispatches on the
//! leading keyword to the other parsing modules.
//!
//! ## Responsibilities
//!
//! - Number literals: `42`, `-3.5`
//! - String literals: `"hello"`
//! - Boolean literals: `true`, `false`
//! - Parenthesized expressions: `(1 + 2)`
//! - Keyword dispatch: figures, `draw`, `let`, `if`, sequences, ...

use super::Parser;
use crate::ast::{Ast, Literal};
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::TokenKind;

impl<'a> Parser<'a> {
    /// Parse primary expression.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// primary = number | string | "true" | "false" | "(" expression ")"
    ///         | figure | draw | measure | intersect | color | restore
    ///         | const | let | function | if | sequence | identifier_form
    /// ```
    pub(super) fn parse_primary(&mut self) -> Result<Ast, ParseError> {
        match self.peek_kind() {
            TokenKind::Number => {
                let token = self.advance();
                let value = token.text.parse::<f64>().map_err(|_| {
                    ParseError::new(
                        ParseErrorKind::InvalidNumber {
                            text: token.text.clone(),
                        },
                        token.span,
                    )
                })?;
                Ok(Ast::number(value))
            }

            TokenKind::String => {
                let token = self.advance();
                Ok(Ast::Value(Literal::Str(token.text)))
            }

            TokenKind::True => {
                self.advance();
                Ok(Ast::Value(Literal::Bool(true)))
            }
            TokenKind::False => {
                self.advance();
                Ok(Ast::Value(Literal::Bool(false)))
            }

            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(expr)
            }

            TokenKind::Point | TokenKind::Figure(_) => self.parse_figure(),
            TokenKind::Draw => self.parse_draw(),
            TokenKind::Measure => self.parse_measure(),
            TokenKind::Intersect => self.parse_intersect(),
            TokenKind::Color => self.parse_color(),
            TokenKind::Restore => {
                self.advance();
                Ok(Ast::ColorPop)
            }

            TokenKind::Const => self.parse_const(),
            TokenKind::Let => self.parse_let(),
            TokenKind::Function => self.parse_function(),
            TokenKind::If => self.parse_if(),
            TokenKind::LBrace => self.parse_sequence(None),
            TokenKind::Identifier => self.parse_identifier_form(),

            _ => Err(self.error_expected("expression")),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
