//! # Lex and Parse Errors
//!
//! Error types for the GSharp front end. Both carry the 1-based line and
//! column of the offending input.
//!
//! ## Example
//!
//! ```rust
//! use gsharp_parser::error::ParseError;
//!
//! let error = ParseError::unexpected_token(")", "identifier");
//! println!("{}", error);
//! ```

use crate::span::{Position, Span};
use thiserror::Error;

// =============================================================================
// LEX ERROR
// =============================================================================

/// A lexical error with location information.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at {position}")]
pub struct LexError {
    /// Error kind with details.
    pub kind: LexErrorKind,
    /// Where scanning failed.
    pub position: Position,
}

impl LexError {
    /// Create a new lex error.
    pub const fn new(kind: LexErrorKind, position: Position) -> Self {
        Self { kind, position }
    }
}

/// Kinds of lexical errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexErrorKind {
    /// A character that starts no token.
    #[error("invalid character '{0}'")]
    InvalidChar(char),

    /// End of input reached inside a string literal.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A `function` header missing its name, parentheses or `=>`.
    #[error("malformed function header: {0}")]
    MalformedFunctionHeader(String),
}

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A parse error with location information.
///
/// ## Example
///
/// ```rust
/// use gsharp_parser::error::{ParseError, ParseErrorKind};
/// use gsharp_parser::span::{Position, Span};
///
/// let error = ParseError::new(
///     ParseErrorKind::UnexpectedToken {
///         found: ")".to_string(),
///         expected: "identifier".to_string(),
///     },
///     Span::at(Position::new(5, 1, 6)),
/// );
/// assert!(error.to_string().contains("column 6"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at {}", span.start)]
pub struct ParseError {
    /// Error kind with details.
    pub kind: ParseErrorKind,
    /// Source location of error.
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error.
    pub const fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Create unexpected token error.
    ///
    /// ## Parameters
    ///
    /// - `found`: Token that was found
    /// - `expected`: Description of expected token
    pub fn unexpected_token(found: &str, expected: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                found: found.to_string(),
                expected: expected.to_string(),
            },
            Span::default(),
        )
    }

    /// Create unexpected EOF error.
    pub fn unexpected_eof(expected: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEof {
                expected: expected.to_string(),
            },
            Span::default(),
        )
    }

    /// Create error with span.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Line of the error (1-based).
    pub fn line(&self) -> usize {
        self.span.start.line
    }

    /// Column of the error (1-based).
    pub fn column(&self) -> usize {
        self.span.start.column
    }
}

/// Kinds of parse errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// Found unexpected token.
    #[error("unexpected token '{found}', expected {expected}")]
    UnexpectedToken {
        /// Token that was found.
        found: String,
        /// Description of what was expected.
        expected: String,
    },

    /// Unexpected end of file.
    #[error("unexpected end of file, expected {expected}")]
    UnexpectedEof {
        /// Description of what was expected.
        expected: String,
    },

    /// Number literal that does not parse as f64.
    #[error("invalid number '{text}'")]
    InvalidNumber {
        /// The invalid text.
        text: String,
    },

    /// Figure declared with the wrong number of arguments.
    #[error("{figure} takes {expected} arguments, found {found}")]
    ArityMismatch {
        /// Figure keyword.
        figure: String,
        /// Accepted argument count(s).
        expected: String,
        /// Arguments supplied.
        found: usize,
    },

    /// Expression nested beyond the parser's depth limit.
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep {
        /// Maximum nesting depth.
        limit: usize,
    },
}

// =============================================================================
// SYNTAX ERROR
// =============================================================================

/// Either stage of the front end failing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    /// Tokenizing failed.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// Parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    /// Line of the error (1-based).
    pub fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.position.line,
            Self::Parse(e) => e.line(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_token_display() {
        let error = ParseError::unexpected_token(")", "identifier");
        let msg = format!("{}", error);
        assert!(msg.contains("unexpected token ')'"));
        assert!(msg.contains("identifier"));
    }

    #[test]
    fn test_unexpected_eof_display() {
        let error = ParseError::unexpected_eof("';'");
        let msg = format!("{}", error);
        assert!(msg.contains("unexpected end of file"));
        assert!(msg.contains("';'"));
    }

    #[test]
    fn test_error_with_span() {
        let error = ParseError::unexpected_token("x", "y")
            .with_span(Span::at(Position::new(10, 2, 4)));
        assert_eq!(error.line(), 2);
        assert_eq!(error.column(), 4);
    }

    #[test]
    fn test_lex_error_display() {
        let error = LexError::new(LexErrorKind::InvalidChar('@'), Position::new(3, 1, 4));
        assert_eq!(error.to_string(), "invalid character '@' at line 1, column 4");
    }

    #[test]
    fn test_syntax_error_line() {
        let lex: SyntaxError =
            LexError::new(LexErrorKind::UnterminatedString, Position::new(0, 3, 1)).into();
        assert_eq!(lex.line(), 3);
        assert!(lex.to_string().starts_with("unterminated string literal"));
    }
}
