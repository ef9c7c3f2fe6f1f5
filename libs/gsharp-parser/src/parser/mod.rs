//! # GSharp Parser
//!
//! Recursive descent parser for GSharp.
//! Consumes one statement per call and produces an [`Ast`].
//!
//! ## Example
//!
//! ```rust
//! use gsharp_parser::lexer::Lexer;
//! use gsharp_parser::parser::Parser;
//!
//! let tokens = Lexer::new("point p(1, 2); draw p;").tokenize().unwrap();
//! let mut parser = Parser::new(&tokens);
//! let first = parser.parse_statement().unwrap();
//! assert_eq!(first.line, 1);
//! ```

mod collections;
mod control_flow;
mod declarations;
mod figures;
mod operators;
mod primaries;

use crate::ast::{Ast, Statement};
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Token, TokenKind};
use config::constants::MAX_NESTING_DEPTH;

// =============================================================================
// PARSER
// =============================================================================

/// Recursive descent parser over a token stream.
///
/// Statements are separated by `;`. The parser also implements
/// [`Iterator`], yielding statements until the end of input.
pub struct Parser<'a> {
    /// Token stream.
    tokens: &'a [Token],
    /// Current token index.
    current: usize,
    /// Returned when reading past the stream.
    eof: Token,
    /// Expression nesting depth of the statement being parsed.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    ///
    /// ## Parameters
    ///
    /// - `tokens`: Tokens from the lexer
    pub fn new(tokens: &'a [Token]) -> Self {
        let end = tokens.last().map(|t| t.span).unwrap_or_default();
        Self {
            tokens,
            current: 0,
            eof: Token::new(TokenKind::Eof, end, String::new()),
            depth: 0,
        }
    }

    /// Parse exactly one statement.
    ///
    /// Leading empty statements are skipped. The statement must be followed
    /// by `;` or the end of input. At the end of input this returns
    /// [`Ast::End`].
    ///
    /// ## Returns
    ///
    /// The parsed statement with its source line.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        self.depth = 0;
        while self.match_token(TokenKind::Semicolon) {}

        let line = self.peek().line();
        if self.is_at_end() {
            return Ok(Statement::new(Ast::End, line));
        }

        let node = match self.try_parse_multi_assign()? {
            Some(node) => node,
            None => self.parse_expression()?,
        };

        if !self.is_at_end() {
            self.expect(TokenKind::Semicolon)?;
        }

        log::trace!("parsed statement at line {}: {:?}", line, node);
        Ok(Statement::new(node, line))
    }

    /// Check whether only empty statements remain.
    pub fn is_at_end(&self) -> bool {
        self.tokens[self.current.min(self.tokens.len())..]
            .iter()
            .all(|t| matches!(t.kind, TokenKind::Semicolon | TokenKind::Eof))
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    /// Get current token.
    fn peek(&self) -> &Token {
        self.tokens.get(self.current).unwrap_or(&self.eof)
    }

    /// Get the token `n` positions ahead.
    fn peek_at(&self, n: usize) -> &Token {
        self.tokens.get(self.current + n).unwrap_or(&self.eof)
    }

    /// Get current token kind.
    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Check if current token matches kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Advance to next token.
    ///
    /// ## Returns
    ///
    /// The token that was consumed
    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::Eof {
            self.current += 1;
        }
        token
    }

    /// Consume token if it matches expected kind.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_expected(kind.display()))
        }
    }

    /// Consume an identifier and return its text.
    fn expect_identifier(&mut self) -> Result<String, ParseError> {
        Ok(self.expect(TokenKind::Identifier)?.text)
    }

    /// Try to consume token if it matches.
    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Error for the current token, given what was expected instead.
    fn error_expected(&self, expected: &str) -> ParseError {
        let token = self.peek();
        if token.is_eof() {
            ParseError::unexpected_eof(expected).with_span(token.span)
        } else {
            let found = match token.kind {
                TokenKind::String => format!("\"{}\"", token.text),
                _ => token.text.clone(),
            };
            ParseError::new(
                ParseErrorKind::UnexpectedToken {
                    found,
                    expected: expected.to_string(),
                },
                token.span,
            )
        }
    }

    /// Run `parse` one nesting level deeper.
    ///
    /// Fails with [`ParseErrorKind::NestingTooDeep`] past
    /// `MAX_NESTING_DEPTH`, before the native stack runs out.
    fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::new(
                ParseErrorKind::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.peek().span,
            ));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    // =========================================================================
    // EXPRESSIONS
    // =========================================================================

    /// Parse a full expression.
    pub(crate) fn parse_expression(&mut self) -> Result<Ast, ParseError> {
        self.parse_precedence(operators::Precedence::Comparison)
    }

    /// Parse comma-separated expressions up to (and including) `)`.
    ///
    /// The opening `(` must already be consumed.
    fn parse_arguments(&mut self) -> Result<Vec<Ast>, ParseError> {
        let mut args = Vec::new();
        if self.match_token(TokenKind::RParen) {
            return Ok(args);
        }

        loop {
            args.push(self.parse_expression()?);
            if self.match_token(TokenKind::Comma) {
                continue;
            }
            self.expect(TokenKind::RParen)?;
            return Ok(args);
        }
    }
}

impl Iterator for Parser<'_> {
    type Item = Result<Statement, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_at_end() {
            return None;
        }
        let result = self.parse_statement();
        if result.is_err() {
            // Stop after the first error
            self.current = self.tokens.len();
        }
        Some(result)
    }
}

// =============================================================================
// TESTS
// =============================================================================
