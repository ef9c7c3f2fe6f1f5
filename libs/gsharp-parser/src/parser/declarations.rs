//! # Declaration Parsing
//!
//! Parses `const`, `let`, `function` and the identifier-led forms.
//!
//! ## Responsibilities
//!
//! - Constants: `const a = 1`, `const a, b, _ = {1, 2, 3}`
//! - Assignments: `x = 5`, `s = {1, 2}`, `a, b = intersect(c1, c2)`
//! - Let: `let x = 1 in x + 1`, `let -> { a = 1, b = 2 } in a + b`
//! - Functions: `function sq(x) => x * x`
//! - Calls: `Sqrt(2)`, `sq(3)`

use super::Parser;
use crate::ast::Ast;
use crate::error::ParseError;
use crate::lexer::TokenKind;

impl<'a> Parser<'a> {
    /// Parse a `const` declaration.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// const = "const" identifier ("," identifier)* "=" expression
    /// ```
    pub(super) fn parse_const(&mut self) -> Result<Ast, ParseError> {
        self.expect(TokenKind::Const)?;

        let mut names = vec![self.expect_identifier()?];
        while self.match_token(TokenKind::Comma) {
            names.push(self.expect_identifier()?);
        }

        self.expect(TokenKind::Eq)?;
        let value = self.parse_expression()?;

        Ok(Ast::ConstDecl {
            names,
            value: Box::new(value),
        })
    }

    /// Parse a `let` expression.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// let     = "let" binding ("," binding)* "in" expression
    ///         | "let" "->" "{" binding ("," binding)* "}" "in" expression
    /// binding = identifier "=" expression
    /// ```
    pub(super) fn parse_let(&mut self) -> Result<Ast, ParseError> {
        self.expect(TokenKind::Let)?;

        let braced = self.match_token(TokenKind::Arrow);
        if braced {
            self.expect(TokenKind::LBrace)?;
        }

        let mut bindings = vec![self.parse_binding()?];
        while self.match_token(TokenKind::Comma) {
            bindings.push(self.parse_binding()?);
        }

        if braced {
            self.expect(TokenKind::RBrace)?;
        }
        self.expect(TokenKind::In)?;
        let body = Box::new(self.parse_expression()?);

        if !braced && bindings.len() == 1 {
            if let Some((name, value)) = bindings.pop() {
                return Ok(Ast::Let {
                    name,
                    value: Box::new(value),
                    body,
                });
            }
        }

        Ok(Ast::LetMulti { bindings, body })
    }

    fn parse_binding(&mut self) -> Result<(String, Ast), ParseError> {
        let name = self.expect_identifier()?;
        self.expect(TokenKind::Eq)?;
        let value = self.parse_expression()?;
        Ok((name, value))
    }

    /// Parse a function declaration.
    ///
    /// The lexer has already split the header into `FunctionName`,
    /// `Parameter` and `=>` tokens.
    pub(super) fn parse_function(&mut self) -> Result<Ast, ParseError> {
        self.expect(TokenKind::Function)?;
        let name = self.expect(TokenKind::FunctionName)?.text;

        let mut params = Vec::new();
        while self.check(TokenKind::Parameter) {
            params.push(self.advance().text);
        }

        self.expect(TokenKind::FatArrow)?;
        let body = self.parse_expression()?;

        Ok(Ast::FunctionDecl {
            name,
            params,
            body: Box::new(body),
        })
    }

    /// Parse an identifier-led form: call, declaration or reference.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// identifier_form = identifier "(" args? ")"
    ///                 | identifier "=" expression
    ///                 | identifier
    /// ```
    pub(super) fn parse_identifier_form(&mut self) -> Result<Ast, ParseError> {
        let name = self.expect_identifier()?;

        if self.match_token(TokenKind::LParen) {
            let args = self.parse_arguments()?;
            return Ok(if config::constants::is_predefined_function(&name) {
                Ast::PredefinedCall { name, args }
            } else {
                Ast::FunctionCall { name, args }
            });
        }

        if self.match_token(TokenKind::Eq) {
            if self.check(TokenKind::LBrace) {
                return self.parse_sequence(Some(name));
            }
            let value = self.parse_expression()?;
            return Ok(Ast::ConstDecl {
                names: vec![name],
                value: Box::new(value),
            });
        }

        Ok(Ast::Identifier(name))
    }

    /// Parse `a, b, c = expression` when the statement starts that way.
    ///
    /// Returns `None` without consuming anything otherwise.
    pub(super) fn try_parse_multi_assign(&mut self) -> Result<Option<Ast>, ParseError> {
        let mut offset = 0;
        let mut count = 0;
        loop {
            if self.peek_at(offset).kind != TokenKind::Identifier {
                return Ok(None);
            }
            count += 1;
            match self.peek_at(offset + 1).kind {
                TokenKind::Comma => offset += 2,
                TokenKind::Eq if count > 1 => break,
                _ => return Ok(None),
            }
        }

        let mut names = vec![self.expect_identifier()?];
        while self.match_token(TokenKind::Comma) {
            names.push(self.expect_identifier()?);
        }
        self.expect(TokenKind::Eq)?;
        let value = self.parse_expression()?;

        Ok(Some(Ast::MultiAssign {
            names,
            value: Box::new(value),
        }))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::ast::{Ast, SequenceLiteral};
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn parse(source: &str) -> Ast {
        let tokens = Lexer::new(source).tokenize().unwrap();
        Parser::new(&tokens).parse_statement().unwrap().node
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_const_destructuring() {
        match parse("const a, b = {1, 2, 3}") {
            Ast::ConstDecl { names: got, value } => {
                assert_eq!(got, names(&["a", "b"]));
                assert!(matches!(*value, Ast::Sequence(_)));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_assignment_is_const_decl() {
        assert_eq!(
            parse("x = 5"),
            Ast::ConstDecl {
                names: names(&["x"]),
                value: Box::new(Ast::number(5.0)),
            }
        );
    }

    #[test]
    fn test_parse_named_sequence() {
        match parse("s = {1, 2}") {
            Ast::Sequence(SequenceLiteral { elements, name, .. }) => {
                assert_eq!(elements.len(), 2);
                assert_eq!(name.as_deref(), Some("s"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_multi_assign() {
        match parse("a, b, _ = intersect(c1, c2)") {
            Ast::MultiAssign { names: got, value } => {
                assert_eq!(got, names(&["a", "b", "_"]));
                assert!(matches!(*value, Ast::Intersect { .. }));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_let_single() {
        assert!(matches!(parse("let x = 1 in x + 1"), Ast::Let { .. }));
    }

    #[test]
    fn test_parse_let_multi_comma() {
        match parse("let a = x, b = 2 in a + b") {
            Ast::LetMulti { bindings, .. } => {
                assert_eq!(bindings.len(), 2);
                assert_eq!(bindings[0].1, Ast::Identifier("x".to_string()));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_let_arrow_block() {
        match parse("let -> { a = 1 } in a") {
            Ast::LetMulti { bindings, .. } => assert_eq!(bindings.len(), 1),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_function_decl() {
        match parse("function add(a, b) => a + b") {
            Ast::FunctionDecl { name, params, .. } => {
                assert_eq!(name, "add");
                assert_eq!(params, names(&["a", "b"]));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_calls() {
        assert!(matches!(parse("Sqrt(2)"), Ast::PredefinedCall { .. }));
        match parse("add(1, 2)") {
            Ast::FunctionCall { name, args } => {
                assert_eq!(name, "add");
                assert_eq!(args.len(), 2);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(parse("Rand()"), Ast::PredefinedCall { args, .. } if args.is_empty()));
    }
}
