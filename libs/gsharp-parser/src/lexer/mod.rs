//! # GSharp Lexer
//!
//! Tokenizes GSharp program text.
//!
//! The lexer skips whitespace and `//` comments, folds a leading `-` into a
//! number literal when it cannot be a binary minus, and consumes whole
//! `function name(a, b) =>` headers so the parser sees them pre-split.
//!
//! ## Example
//!
//! ```rust
//! use gsharp_parser::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("point p(1, 2);").tokenize().unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Point);
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{Token, TokenKind};

use crate::error::{LexError, LexErrorKind};
use crate::span::{Position, Span};
use gsharp_geometry::FigureKind;

// =============================================================================
// LEXER
// =============================================================================

/// GSharp lexer.
///
/// Converts source text into a stream of tokens ending with `Eof`.
pub struct Lexer<'a> {
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Collected tokens.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// ## Returns
    ///
    /// Vector of tokens including the EOF token, or the first lexical error.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use gsharp_parser::lexer::{Lexer, TokenKind};
    ///
    /// let tokens = Lexer::new("draw p;").tokenize().unwrap();
    /// assert!(tokens.last().map_or(false, |t| t.kind == TokenKind::Eof));
    /// ```
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        loop {
            self.skip_whitespace_and_comments();
            if self.cursor.is_eof() {
                break;
            }
            self.scan_token()?;
        }

        let eof = self.cursor.position();
        self.tokens
            .push(Token::new(TokenKind::Eof, Span::at(eof), String::new()));
        log::trace!("lexed {} tokens", self.tokens.len());
        Ok(self.tokens)
    }

    /// Skip whitespace and line comments.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.cursor.advance_while(char::is_whitespace);

            if self.cursor.starts_with("//") {
                self.cursor.advance_while(|c| c != '\n');
                continue;
            }

            break;
        }
    }

    /// Push a token spanning from `start` to the cursor.
    fn push(&mut self, kind: TokenKind, start: Position) {
        let text = self.cursor.slice_from(start).to_string();
        self.push_text(kind, start, text);
    }

    fn push_text(&mut self, kind: TokenKind, start: Position, text: String) {
        let span = Span::new(start, self.cursor.position());
        self.tokens.push(Token::new(kind, span, text));
    }

    /// Whether the previous token can end an operand.
    fn after_operand(&self) -> bool {
        self.tokens
            .last()
            .map_or(false, |token| token.kind.ends_operand())
    }

    /// Scan a single token.
    fn scan_token(&mut self) -> Result<(), LexError> {
        let start = self.cursor.position();
        let c = match self.cursor.peek() {
            Some(c) => c,
            None => return Ok(()),
        };

        // Multi-character operators first
        for (text, kind) in [
            ("...", TokenKind::Ellipsis),
            ("=>", TokenKind::FatArrow),
            ("->", TokenKind::Arrow),
            ("==", TokenKind::EqEq),
            ("!=", TokenKind::BangEq),
            (">=", TokenKind::GtEq),
            ("<=", TokenKind::LtEq),
        ] {
            if self.cursor.starts_with(text) {
                self.cursor.advance_by(text.len());
                self.push(kind, start);
                return Ok(());
            }
        }

        if c == '-'
            && self.cursor.peek_next().map_or(false, |n| n.is_ascii_digit())
            && !self.after_operand()
        {
            self.cursor.advance();
            self.scan_number(start);
            return Ok(());
        }

        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '^' => TokenKind::Caret,
            '=' => TokenKind::Eq,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            '"' => return self.scan_string(start),
            '0'..='9' => {
                self.scan_number(start);
                return Ok(());
            }
            c if c.is_alphabetic() || c == '_' => return self.scan_identifier(start),
            other => return Err(LexError::new(LexErrorKind::InvalidChar(other), start)),
        };

        self.cursor.advance();
        self.push(kind, start);
        Ok(())
    }

    /// Scan a string literal. There are no escape sequences.
    fn scan_string(&mut self, start: Position) -> Result<(), LexError> {
        self.cursor.advance(); // Opening quote
        let content_start = self.cursor.position();
        self.cursor.advance_while(|c| c != '"');

        if self.cursor.is_eof() {
            return Err(LexError::new(LexErrorKind::UnterminatedString, start));
        }

        let content = self.cursor.slice_from(content_start).to_string();
        self.cursor.advance(); // Closing quote
        self.push_text(TokenKind::String, start, content);
        Ok(())
    }

    /// Scan a number literal with an optional fractional part.
    ///
    /// A `.` only belongs to the number when a digit follows it, so `1...5`
    /// lexes as `1`, `...`, `5`.
    fn scan_number(&mut self, start: Position) {
        self.cursor.advance_while(|c| c.is_ascii_digit());

        if self.cursor.peek() == Some('.')
            && self.cursor.peek_next().map_or(false, |c| c.is_ascii_digit())
        {
            self.cursor.advance();
            self.cursor.advance_while(|c| c.is_ascii_digit());
        }

        self.push(TokenKind::Number, start);
    }

    /// Read a bare identifier, returning its text.
    fn read_identifier(&mut self) -> &'a str {
        let start = self.cursor.position();
        self.cursor.advance_while(|c| c.is_alphanumeric() || c == '_');
        self.cursor.slice_from(start)
    }

    /// Scan an identifier or keyword.
    fn scan_identifier(&mut self, start: Position) -> Result<(), LexError> {
        let text = self.read_identifier();

        let kind = match text {
            "intersect" => TokenKind::Intersect,
            "draw" => TokenKind::Draw,
            "measure" => TokenKind::Measure,
            "point" => TokenKind::Point,
            "line" => TokenKind::Figure(FigureKind::Line),
            "segment" => TokenKind::Figure(FigureKind::Segment),
            "ray" => TokenKind::Figure(FigureKind::Ray),
            "circle" => TokenKind::Figure(FigureKind::Circle),
            "arc" => TokenKind::Figure(FigureKind::Arc),
            "color" => TokenKind::Color,
            "restore" => TokenKind::Restore,
            "const" => TokenKind::Const,
            "let" => TokenKind::Let,
            "function" => TokenKind::Function,
            "if" => TokenKind::If,
            "then" => TokenKind::Then,
            "else" => TokenKind::Else,
            "in" => TokenKind::In,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            _ => TokenKind::Identifier,
        };

        self.push(kind, start);

        if kind == TokenKind::Function {
            self.scan_function_header()?;
        }
        Ok(())
    }

    /// Consume `name(p1, p2, ...) =>` after the `function` keyword.
    fn scan_function_header(&mut self) -> Result<(), LexError> {
        self.skip_whitespace_and_comments();
        let start = self.cursor.position();
        if !self
            .cursor
            .peek()
            .map_or(false, |c| c.is_alphabetic() || c == '_')
        {
            return Err(malformed("expected function name", start));
        }
        self.read_identifier();
        self.push(TokenKind::FunctionName, start);

        self.skip_whitespace_and_comments();
        if self.cursor.peek() != Some('(') {
            return Err(malformed("expected '(' after function name", self.cursor.position()));
        }
        self.cursor.advance();

        self.skip_whitespace_and_comments();
        if self.cursor.peek() != Some(')') {
            loop {
                self.skip_whitespace_and_comments();
                let param = self.cursor.position();
                if !self
                    .cursor
                    .peek()
                    .map_or(false, |c| c.is_alphabetic() || c == '_')
                {
                    return Err(malformed("expected parameter name", param));
                }
                self.read_identifier();
                self.push(TokenKind::Parameter, param);

                self.skip_whitespace_and_comments();
                match self.cursor.peek() {
                    Some(',') => {
                        self.cursor.advance();
                    }
                    Some(')') => break,
                    _ => {
                        return Err(malformed(
                            "expected ',' or ')' in parameter list",
                            self.cursor.position(),
                        ))
                    }
                }
            }
        }
        self.cursor.advance(); // ')'

        self.skip_whitespace_and_comments();
        let arrow = self.cursor.position();
        if !self.cursor.starts_with("=>") {
            return Err(malformed("expected '=>' after parameter list", arrow));
        }
        self.cursor.advance_by(2);
        self.push(TokenKind::FatArrow, arrow);
        Ok(())
    }
}

fn malformed(message: &str, position: Position) -> LexError {
    LexError::new(
        LexErrorKind::MalformedFunctionHeader(message.to_string()),
        position,
    )
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_tokenize_point_declaration() {
        let tokens = Lexer::new("point p(1, 2);").tokenize().unwrap();

        // point, p, (, 1, ,, 2, ), ;, EOF
        assert_eq!(tokens.len(), 9);
        assert_eq!(tokens[0].kind, TokenKind::Point);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "p");
        assert_eq!(tokens[3].text, "1");
        assert_eq!(tokens[7].kind, TokenKind::Semicolon);
        assert_eq!(tokens[8].kind, TokenKind::Eof);
    }

    #[test]
    fn test_tokenize_figure_keywords() {
        assert_eq!(
            kinds("line ray arc"),
            vec![
                TokenKind::Figure(FigureKind::Line),
                TokenKind::Figure(FigureKind::Ray),
                TokenKind::Figure(FigureKind::Arc),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_tokenize_with_comments() {
        let tokens = Lexer::new("// comment\ndraw p; // trailing").tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Draw);
        assert_eq!(tokens[0].line(), 2);
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_tokenize_operators() {
        assert_eq!(
            kinds("== != <= >= => -> ... ="),
            vec![
                TokenKind::EqEq,
                TokenKind::BangEq,
                TokenKind::LtEq,
                TokenKind::GtEq,
                TokenKind::FatArrow,
                TokenKind::Arrow,
                TokenKind::Ellipsis,
                TokenKind::Eq,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_tokenize_float() {
        let tokens = Lexer::new("3.14").tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].text, "3.14");
    }

    #[test]
    fn test_tokenize_range_does_not_eat_dot() {
        let tokens = Lexer::new("{1...5}").tokenize().unwrap();
        assert_eq!(tokens[1].text, "1");
        assert_eq!(tokens[2].kind, TokenKind::Ellipsis);
        assert_eq!(tokens[3].text, "5");
    }

    #[test]
    fn test_tokenize_negative_literal() {
        let tokens = Lexer::new("x = -2").tokenize().unwrap();
        assert_eq!(tokens[2].kind, TokenKind::Number);
        assert_eq!(tokens[2].text, "-2");
    }

    #[test]
    fn test_tokenize_subtraction_stays_binary() {
        assert_eq!(
            kinds("3-2"),
            vec![
                TokenKind::Number,
                TokenKind::Minus,
                TokenKind::Number,
                TokenKind::Eof
            ]
        );
        assert_eq!(kinds("(a)-1")[3], TokenKind::Minus);
    }

    #[test]
    fn test_tokenize_string_strips_quotes() {
        let tokens = Lexer::new("\"hello world\"").tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, "hello world");
    }

    #[test]
    fn test_unterminated_string() {
        let err = Lexer::new("draw p \"label").tokenize().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
        assert_eq!(err.position.column, 8);
    }

    #[test]
    fn test_invalid_char_reports_position() {
        let err = Lexer::new("x = 1;\ny = @").tokenize().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::InvalidChar('@'));
        assert_eq!(err.position.line, 2);
        assert_eq!(err.position.column, 5);
    }

    #[test]
    fn test_function_header() {
        let tokens = Lexer::new("function add(a, b) => a + b").tokenize().unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            &kinds[..5],
            &[
                TokenKind::Function,
                TokenKind::FunctionName,
                TokenKind::Parameter,
                TokenKind::Parameter,
                TokenKind::FatArrow,
            ]
        );
        assert_eq!(tokens[1].text, "add");
        assert_eq!(tokens[3].text, "b");
    }

    #[test]
    fn test_function_header_without_params() {
        let kinds = kinds("function one() => 1");
        assert_eq!(kinds[2], TokenKind::FatArrow);
    }

    #[test]
    fn test_malformed_function_header() {
        let err = Lexer::new("function f(a, b) a + b").tokenize().unwrap_err();
        assert!(matches!(err.kind, LexErrorKind::MalformedFunctionHeader(_)));

        let err = Lexer::new("function f a").tokenize().unwrap_err();
        assert!(matches!(err.kind, LexErrorKind::MalformedFunctionHeader(_)));
    }

    #[test]
    fn test_underscore_is_identifier() {
        assert_eq!(kinds("_")[0], TokenKind::Identifier);
    }
}
