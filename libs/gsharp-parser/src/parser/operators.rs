//! # Operator Parsing
//!
//! Parses binary and unary operators using precedence climbing.
//!
//! ## Operator Precedence
//!
//! | Precedence | Operators | Associativity |
//! |------------|-----------|---------------|
//! | 1 | < > <= >= == != | Left |
//! | 2 | + - | Left |
//! | 3 | * / % | Left |
//! | 4 | ^ | Right |
//! | 5 | - (unary) | Right |

use super::Parser;
use crate::ast::{Ast, BinaryOp};
use crate::error::ParseError;
use crate::lexer::TokenKind;

// =============================================================================
// PRECEDENCE
// =============================================================================

/// Operator precedence levels.
///
/// Higher values bind tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum Precedence {
    /// Comparison: `< > <= >= == !=`
    Comparison = 1,
    /// Addition/subtraction: `+ -`
    Term = 2,
    /// Multiplication/division/modulo: `* / %`
    Factor = 3,
    /// Power: `^`
    Power = 4,
    /// Unary minus
    Unary = 5,
}

impl Precedence {
    /// Get precedence and operator for a binary operator token.
    pub(super) fn of_binary(kind: TokenKind) -> Option<(Self, BinaryOp)> {
        let entry = match kind {
            TokenKind::Lt => (Self::Comparison, BinaryOp::Lt),
            TokenKind::Gt => (Self::Comparison, BinaryOp::Gt),
            TokenKind::LtEq => (Self::Comparison, BinaryOp::LtEq),
            TokenKind::GtEq => (Self::Comparison, BinaryOp::GtEq),
            TokenKind::EqEq => (Self::Comparison, BinaryOp::Eq),
            TokenKind::BangEq => (Self::Comparison, BinaryOp::NotEq),
            TokenKind::Plus => (Self::Term, BinaryOp::Add),
            TokenKind::Minus => (Self::Term, BinaryOp::Sub),
            TokenKind::Star => (Self::Factor, BinaryOp::Mul),
            TokenKind::Slash => (Self::Factor, BinaryOp::Div),
            TokenKind::Percent => (Self::Factor, BinaryOp::Mod),
            TokenKind::Caret => (Self::Power, BinaryOp::Pow),
            _ => return None,
        };
        Some(entry)
    }

    /// Get next higher precedence level.
    ///
    /// Used for left-associative operators.
    pub(super) fn next(&self) -> Self {
        match self {
            Self::Comparison => Self::Term,
            Self::Term => Self::Factor,
            Self::Factor => Self::Power,
            Self::Power | Self::Unary => Self::Unary,
        }
    }
}

// =============================================================================
// OPERATOR PARSING
// =============================================================================

impl<'a> Parser<'a> {
    /// Parse expression with minimum precedence.
    ///
    /// ## Parameters
    ///
    /// - `min_prec`: Minimum precedence level to parse
    pub(super) fn parse_precedence(&mut self, min_prec: Precedence) -> Result<Ast, ParseError> {
        self.nested(|parser| parser.parse_binary(min_prec))
    }

    fn parse_binary(&mut self, min_prec: Precedence) -> Result<Ast, ParseError> {
        let mut left = self.parse_unary()?;

        while let Some((prec, op)) = Precedence::of_binary(self.peek_kind()) {
            if prec < min_prec {
                break;
            }
            self.advance();

            // Right associativity for ^
            let next_prec = if op == BinaryOp::Pow { prec } else { prec.next() };
            let right = self.parse_precedence(next_prec)?;
            left = Ast::binary(left, op, right);
        }

        Ok(left)
    }

    /// Parse unary expression.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// unary = "-" unary | primary
    /// ```
    ///
    /// `-x` becomes `0 - x`. Each `-` counts as one nesting level.
    pub(super) fn parse_unary(&mut self) -> Result<Ast, ParseError> {
        if self.match_token(TokenKind::Minus) {
            let operand = self.nested(Self::parse_unary)?;
            return Ok(Ast::binary(Ast::number(0.0), BinaryOp::Sub, operand));
        }

        self.parse_primary()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::ast::{Ast, BinaryOp};
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn parse_expr(source: &str) -> Ast {
        let tokens = Lexer::new(source).tokenize().unwrap();
        Parser::new(&tokens).parse_statement().unwrap().node
    }

    fn op_of(ast: &Ast) -> BinaryOp {
        match ast {
            Ast::Binary { op, .. } => *op,
            other => panic!("expected binary, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_binary_add() {
        assert_eq!(op_of(&parse_expr("1 + 2")), BinaryOp::Add);
    }

    #[test]
    fn test_parse_binary_precedence() {
        // 1 + 2 * 3 => 1 + (2 * 3)
        match parse_expr("1 + 2 * 3") {
            Ast::Binary { op, right, .. } => {
                assert_eq!(op, BinaryOp::Add);
                assert_eq!(op_of(&right), BinaryOp::Mul);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_left_associative() {
        // 8 - 2 - 1 => (8 - 2) - 1
        match parse_expr("8 - 2 - 1") {
            Ast::Binary { left, right, .. } => {
                assert_eq!(op_of(&left), BinaryOp::Sub);
                assert_eq!(*right, Ast::number(1.0));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_power_right_associative() {
        // 2 ^ 3 ^ 2 => 2 ^ (3 ^ 2)
        match parse_expr("2 ^ 3 ^ 2") {
            Ast::Binary { left, right, .. } => {
                assert_eq!(*left, Ast::number(2.0));
                assert_eq!(op_of(&right), BinaryOp::Pow);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_comparison_lowest() {
        assert_eq!(op_of(&parse_expr("1 + 1 == 2")), BinaryOp::Eq);
    }

    #[test]
    fn test_parse_unary_minus_desugars() {
        let ast = parse_expr("-x");
        assert_eq!(
            ast,
            Ast::binary(
                Ast::number(0.0),
                BinaryOp::Sub,
                Ast::Identifier("x".to_string())
            )
        );
    }
}
