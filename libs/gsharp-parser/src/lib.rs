//! # GSharp Parser
//!
//! Front end of the GSharp geometry language: lexer, AST and a
//! recursive-descent parser. Parsing never consults runtime state; it only
//! turns text into syntax trees.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Statement (one Ast per `;`)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use gsharp_parser::{parse_program, Ast};
//!
//! let statements = parse_program("point p(1, 2); draw p;").unwrap();
//! assert_eq!(statements.len(), 2);
//! assert!(matches!(statements[1].node, Ast::Draw { .. }));
//! ```
//!
//! ## Pipeline Integration
//!
//! ```text
//! gsharp-parser → gsharp-eval (uses gsharp-geometry) → ToDraw descriptors
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

pub use ast::{
    Ast, BinaryOp, FigureArgs, FigureDecl, Literal, SequenceLiteral, SequenceTail, Statement,
};
pub use error::{LexError, LexErrorKind, ParseError, ParseErrorKind, SyntaxError};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;
pub use span::{Position, Span, Spanned};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Tokenize source text.
///
/// ## Example
///
/// ```rust
/// let tokens = gsharp_parser::tokenize("x = 1;").unwrap();
/// assert_eq!(tokens.len(), 5);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Parse a whole program into statements.
///
/// Stops at the first lexical or syntax error.
///
/// ## Parameters
///
/// - `source`: GSharp program text
pub fn parse_program(source: &str) -> Result<Vec<Statement>, SyntaxError> {
    let tokens = tokenize(source)?;
    let statements = Parser::new(&tokens).collect::<Result<Vec<_>, _>>()?;
    Ok(statements)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_program() {
        let program = "
            // two circles
            point a(0, 0);
            circle c1(a, 5);
            circle c2(point(8, 0), 5);
            p, q = intersect(c1, c2);
            draw {p, q}
        ";
        let statements = parse_program(program).unwrap();
        assert_eq!(statements.len(), 5);
        assert_eq!(statements[0].line, 3);
        assert!(matches!(statements[3].node, Ast::MultiAssign { .. }));
    }

    #[test]
    fn test_parse_program_lex_error() {
        let err = parse_program("x = 1;\ny = #").unwrap_err();
        assert!(matches!(err, SyntaxError::Lex(_)));
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn test_parse_program_parse_error() {
        let err = parse_program("draw;").unwrap_err();
        assert!(matches!(err, SyntaxError::Parse(_)));
        assert_eq!(err.line(), 1);
    }
}
