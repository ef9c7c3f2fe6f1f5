//! # Figure Statement Parsing
//!
//! Parses figure declarations and the statements that operate on figures.
//!
//! ## Responsibilities
//!
//! - Figures: `point p(1, 2)`, `circle c(p, 3) "label"`, `line l`
//! - Drawing: `draw p`, `draw segment(a, b) "label"`
//! - Measurement: `measure(a, b)`
//! - Intersection: `intersect(c1, c2)`
//! - Colors: `color red`, `restore`

use super::Parser;
use crate::ast::{Ast, FigureArgs, FigureDecl};
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::TokenKind;
use gsharp_geometry::FigureKind;

impl<'a> Parser<'a> {
    /// Parse a figure declaration.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// figure = ("point" | "line" | "segment" | "ray" | "circle" | "arc")
    ///          identifier? ("(" args ")")? string?
    /// ```
    pub(super) fn parse_figure(&mut self) -> Result<Ast, ParseError> {
        let keyword = self.advance();
        let kind = match keyword.kind {
            TokenKind::Point => FigureKind::Point,
            TokenKind::Figure(kind) => kind,
            _ => {
                return Err(ParseError::unexpected_token(&keyword.text, "figure keyword")
                    .with_span(keyword.span))
            }
        };

        let name = if self.check(TokenKind::Identifier) {
            Some(self.advance().text)
        } else {
            None
        };

        let args = if self.check(TokenKind::LParen) {
            let open = self.advance();
            let raw = self.parse_arguments()?;
            Some(figure_args(kind, raw).map_err(|e| e.with_span(open.span))?)
        } else {
            None
        };

        if name.is_none() && args.is_none() {
            return Err(self.error_expected("figure name or arguments"));
        }

        let comment = if self.check(TokenKind::String) {
            Some(self.advance().text)
        } else {
            None
        };

        Ok(Ast::Figure(FigureDecl {
            kind,
            name,
            args,
            comment,
        }))
    }

    /// Parse a `draw` statement.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// draw = "draw" expression string?
    /// ```
    pub(super) fn parse_draw(&mut self) -> Result<Ast, ParseError> {
        self.expect(TokenKind::Draw)?;
        let target = self.parse_expression()?;

        let label = if self.check(TokenKind::String) {
            Some(self.advance().text)
        } else {
            None
        };

        Ok(Ast::Draw {
            target: Box::new(target),
            label,
        })
    }

    /// Parse `measure(a, b)`.
    pub(super) fn parse_measure(&mut self) -> Result<Ast, ParseError> {
        self.expect(TokenKind::Measure)?;
        let (from, to) = self.parse_pair()?;
        Ok(Ast::Measure { from, to })
    }

    /// Parse `intersect(a, b)`.
    pub(super) fn parse_intersect(&mut self) -> Result<Ast, ParseError> {
        self.expect(TokenKind::Intersect)?;
        let (first, second) = self.parse_pair()?;
        Ok(Ast::Intersect { first, second })
    }

    /// Parse `color name`.
    pub(super) fn parse_color(&mut self) -> Result<Ast, ParseError> {
        self.expect(TokenKind::Color)?;
        let name = self.expect_identifier()?;
        Ok(Ast::ColorPush(name))
    }

    /// Parse `"(" expression "," expression ")"`.
    fn parse_pair(&mut self) -> Result<(Box<Ast>, Box<Ast>), ParseError> {
        self.expect(TokenKind::LParen)?;
        let first = self.parse_expression()?;
        self.expect(TokenKind::Comma)?;
        let second = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        Ok((Box::new(first), Box::new(second)))
    }
}

/// Check the argument count for a figure kind and name the arguments.
fn figure_args(kind: FigureKind, args: Vec<Ast>) -> Result<FigureArgs, ParseError> {
    let found = args.len();
    let mut iter = args.into_iter().map(Box::new);

    let result = match (kind, found) {
        (FigureKind::Point, 2) => iter
            .next()
            .zip(iter.next())
            .map(|(x, y)| FigureArgs::Point { x, y }),
        (FigureKind::Line | FigureKind::Segment | FigureKind::Ray, 2) => iter
            .next()
            .zip(iter.next())
            .map(|(a, b)| FigureArgs::Linear { a, b }),
        (FigureKind::Circle, 2) => iter
            .next()
            .zip(iter.next())
            .map(|(center, radius)| FigureArgs::Circle { center, radius }),
        (FigureKind::Arc, 3 | 4) => match (iter.next(), iter.next(), iter.next()) {
            (Some(center), Some(start), Some(end)) => Some(FigureArgs::Arc {
                center,
                start,
                end,
                radius: iter.next(),
            }),
            _ => None,
        },
        _ => None,
    };

    result.ok_or_else(|| {
        let expected = match kind {
            FigureKind::Arc => "3 or 4",
            _ => "2",
        };
        ParseError::new(
            ParseErrorKind::ArityMismatch {
                figure: kind.keyword().to_string(),
                expected: expected.to_string(),
                found,
            },
            Default::default(),
        )
    })
}

// =============================================================================
// TESTS
// =============================================================================
