//! # Tokens
//!
//! Token types produced by the GSharp lexer.
//!
//! ## Example
//!
//! ```rust
//! use gsharp_parser::lexer::{Token, TokenKind};
//! use gsharp_parser::span::{Position, Span};
//!
//! let token = Token::new(TokenKind::Number, Span::at(Position::start()), "10".to_string());
//! assert_eq!(token.kind, TokenKind::Number);
//! ```

use crate::span::{Span, Spanned};
use gsharp_geometry::FigureKind;

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Source span.
    pub span: Span,
    /// Token text. Strings are stored without their quotes.
    pub text: String,
}

impl Token {
    /// Create a new token.
    ///
    /// ## Parameters
    ///
    /// - `kind`: Token type
    /// - `span`: Source location
    /// - `text`: Token text
    pub fn new(kind: TokenKind, span: Span, text: String) -> Self {
        Self { kind, span, text }
    }

    /// Check if token is EOF.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// 1-based source line.
    pub fn line(&self) -> usize {
        self.span.start.line
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    /// Number literal like `10`, `-2` or `3.14`
    Number,
    /// String literal like `"label"`
    String,
    /// Boolean true
    True,
    /// Boolean false
    False,

    /// Identifier like `p1` or `radius`
    Identifier,

    // Keywords
    /// `intersect`
    Intersect,
    /// `draw`
    Draw,
    /// `measure`
    Measure,
    /// `point`
    Point,
    /// `line`, `segment`, `ray`, `circle` or `arc`
    Figure(FigureKind),
    /// `color`
    Color,
    /// `restore`
    Restore,
    /// `const`
    Const,
    /// `let`
    Let,
    /// `function`
    Function,
    /// `if`
    If,
    /// `then`
    Then,
    /// `else`
    Else,
    /// `in`
    In,

    // Function header, emitted right after `function`
    /// Declared function name
    FunctionName,
    /// One declared parameter
    Parameter,

    // Operators
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `^`
    Caret,
    /// `=`
    Eq,
    /// `==`
    EqEq,
    /// `!=`
    BangEq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `=>`
    FatArrow,
    /// `->`
    Arrow,

    // Delimiters
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `...`
    Ellipsis,
    /// `;` (end of line)
    Semicolon,

    /// End of file
    Eof,
}

impl TokenKind {
    /// Check if this is a keyword token.
    pub const fn is_keyword(&self) -> bool {
        matches!(
            self,
            Self::Intersect
                | Self::Draw
                | Self::Measure
                | Self::Point
                | Self::Figure(_)
                | Self::Color
                | Self::Restore
                | Self::Const
                | Self::Let
                | Self::Function
                | Self::If
                | Self::Then
                | Self::Else
                | Self::In
                | Self::True
                | Self::False
        )
    }

    /// Check if this is a comparison operator.
    pub const fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Lt | Self::Gt | Self::LtEq | Self::GtEq | Self::EqEq | Self::BangEq
        )
    }

    /// Check if a token of this kind can be the last token of an operand.
    ///
    /// A `-` that follows such a token is a binary minus, never a sign.
    pub const fn ends_operand(&self) -> bool {
        matches!(
            self,
            Self::Number
                | Self::String
                | Self::True
                | Self::False
                | Self::Identifier
                | Self::RParen
                | Self::RBrace
        )
    }

    /// Get display string for error messages.
    pub const fn display(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::True => "true",
            Self::False => "false",
            Self::Identifier => "identifier",
            Self::Intersect => "intersect",
            Self::Draw => "draw",
            Self::Measure => "measure",
            Self::Point => "point",
            Self::Figure(kind) => kind.keyword(),
            Self::Color => "color",
            Self::Restore => "restore",
            Self::Const => "const",
            Self::Let => "let",
            Self::Function => "function",
            Self::If => "if",
            Self::Then => "then",
            Self::Else => "else",
            Self::In => "in",
            Self::FunctionName => "function name",
            Self::Parameter => "parameter",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Caret => "^",
            Self::Eq => "=",
            Self::EqEq => "==",
            Self::BangEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::FatArrow => "=>",
            Self::Arrow => "->",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Comma => ",",
            Self::Ellipsis => "...",
            Self::Semicolon => ";",
            Self::Eof => "end of file",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
