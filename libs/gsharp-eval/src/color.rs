//! # Drawing Colors
//!
//! Closed color table and the color stack.
//!
//! Names are matched case-insensitively: `color Red` and `color red` are
//! the same color.

use crate::error::EvalError;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// COLOR
// =============================================================================

/// A drawing color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    Gray,
    Orange,
    Purple,
    Brown,
    Pink,
}

impl Color {
    /// Every color, in table order.
    pub const ALL: [Color; 13] = [
        Color::Black,
        Color::White,
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Cyan,
        Color::Magenta,
        Color::Gray,
        Color::Orange,
        Color::Purple,
        Color::Brown,
        Color::Pink,
    ];

    /// Lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Cyan => "cyan",
            Color::Magenta => "magenta",
            Color::Gray => "gray",
            Color::Orange => "orange",
            Color::Purple => "purple",
            Color::Brown => "brown",
            Color::Pink => "pink",
        }
    }

    /// Resolve a color name, ignoring case.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use gsharp_eval::color::Color;
    ///
    /// assert_eq!(Color::from_name("Red").unwrap(), Color::Red);
    /// assert!(Color::from_name("chartreuse").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, EvalError> {
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| EvalError::UnknownColor(name.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// COLOR STACK
// =============================================================================

/// Stack of active colors. Never empty.
#[derive(Debug, Clone)]
pub struct ColorStack {
    /// The bottom entry is never removed.
    stack: Vec<Color>,
}

impl ColorStack {
    /// Stack holding only `base`.
    pub fn new(base: Color) -> Self {
        Self { stack: vec![base] }
    }

    /// Color drawings currently use.
    pub fn current(&self) -> Color {
        self.stack.last().copied().unwrap_or(Color::Black)
    }

    /// Make `color` current.
    pub fn push(&mut self, color: Color) {
        self.stack.push(color);
    }

    /// Return to the previous color. No-op at the bottom.
    pub fn pop(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether no colors are stacked.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

impl Default for ColorStack {
    fn default() -> Self {
        let base = Color::from_name(config::constants::DEFAULT_COLOR).unwrap_or(Color::Black);
        Self::new(base)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(Color::from_name("BLUE").unwrap(), Color::Blue);
        assert_eq!(Color::from_name("gray").unwrap(), Color::Gray);
        assert_eq!(
            Color::from_name("teal"),
            Err(EvalError::UnknownColor("teal".to_string()))
        );
    }

    #[test]
    fn test_default_stack_is_black() {
        let stack = ColorStack::default();
        assert_eq!(stack.current(), Color::Black);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_pop_never_empties() {
        let mut stack = ColorStack::default();
        stack.push(Color::Red);
        assert_eq!(stack.current(), Color::Red);
        stack.pop();
        stack.pop();
        stack.pop();
        assert_eq!(stack.current(), Color::Black);
        assert_eq!(stack.len(), 1);
    }
}
