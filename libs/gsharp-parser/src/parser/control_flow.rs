//! # Control Flow Parsing
//!
//! Parses `if c then a else b`.

use super::Parser;
use crate::ast::Ast;
use crate::error::ParseError;
use crate::lexer::TokenKind;

impl<'a> Parser<'a> {
    /// Parse a conditional expression.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// if = "if" expression "then" expression "else" expression
    /// ```
    pub(super) fn parse_if(&mut self) -> Result<Ast, ParseError> {
        self.expect(TokenKind::If)?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::Then)?;
        let then_branch = self.parse_expression()?;
        self.expect(TokenKind::Else)?;
        let else_branch = self.parse_expression()?;

        Ok(Ast::If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Ast, BinaryOp};
    use crate::error::ParseErrorKind;
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    #[test]
    fn test_parse_if() {
        let tokens = Lexer::new("if x > 1 then 1 else 2").tokenize().unwrap();
        match Parser::new(&tokens).parse_statement().unwrap().node {
            Ast::If { condition, else_branch, .. } => {
                assert!(matches!(*condition, Ast::Binary { op: BinaryOp::Gt, .. }));
                assert_eq!(*else_branch, Ast::number(2.0));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_if_without_else() {
        let tokens = Lexer::new("if true then 1").tokenize().unwrap();
        let err = Parser::new(&tokens).parse_statement().unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedEof { .. }));
    }
}
