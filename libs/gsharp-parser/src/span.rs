//! # Source Spans
//!
//! Positions and spans used by tokens and errors.
//! Lines and columns are 1-based so they can be shown to users as-is.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// POSITION
// =============================================================================

/// A location in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub byte: usize,
    /// Line number (1-based).
    pub line: usize,
    /// Column number (1-based, counted in characters).
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub const fn new(byte: usize, line: usize, column: usize) -> Self {
        Self { byte, line, column }
    }

    /// Position of the first character of a source.
    pub const fn start() -> Self {
        Self::new(0, 1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

// =============================================================================
// SPAN
// =============================================================================

/// A half-open range of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// First position covered.
    pub start: Position,
    /// Position just past the end.
    pub end: Position,
}

impl Span {
    /// Create a new span.
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Empty span at a single position.
    pub const fn at(position: Position) -> Self {
        Self::new(position, position)
    }
}

/// Anything that knows where it came from.
pub trait Spanned {
    /// Source span of this item.
    fn span(&self) -> Span;
}

// =============================================================================
// TESTS
// =============================================================================
