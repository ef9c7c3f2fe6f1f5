//! # Runtime Values
//!
//! Values produced by evaluating GSharp expressions.
//!
//! ## Example
//!
//! ```rust
//! use gsharp_eval::value::{Sequence, Value};
//!
//! let seq = Sequence::Finite(vec![Value::Number(1.0), Value::Number(2.0)]);
//! assert_eq!(Value::Sequence(seq).to_string(), "{1, 2}");
//! ```

use crate::error::EvalError;
use glam::DVec2;
use gsharp_geometry::Shape;
use std::fmt;

// =============================================================================
// FIGURE
// =============================================================================

/// A figure value: resolved shape plus its name and comment.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Registry name, if any.
    pub name: Option<String>,
    /// Resolved coordinates.
    pub shape: Shape,
    /// Comment shown next to the drawing.
    pub comment: Option<String>,
}

impl Figure {
    /// Anonymous figure without comment.
    pub fn anonymous(shape: Shape) -> Self {
        Self {
            name: None,
            shape,
            comment: None,
        }
    }

    /// Anonymous point.
    pub fn point(p: DVec2) -> Self {
        Self::anonymous(Shape::Point(p))
    }
}

// =============================================================================
// SEQUENCE
// =============================================================================

/// A sequence value.
///
/// Unbounded sequences are never expanded in full: they yield elements
/// only when something takes a fixed number of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Sequence {
    /// All elements known.
    Finite(Vec<Value>),
    /// Explicit `head` elements, then `next`, `next + 1`, ... forever.
    Unbounded {
        /// Explicit leading elements.
        head: Vec<Value>,
        /// First generated number.
        next: f64,
    },
}

impl Sequence {
    /// Empty sequence.
    pub fn empty() -> Self {
        Self::Finite(Vec::new())
    }

    /// All elements, or an error naming the operation for unbounded ones.
    pub fn elements(&self, operation: &str) -> Result<&[Value], EvalError> {
        match self {
            Self::Finite(items) => Ok(items),
            Self::Unbounded { .. } => Err(EvalError::UnboundedSequence(operation.to_string())),
        }
    }

    /// Split off the first `n` elements.
    ///
    /// ## Returns
    ///
    /// The taken elements (fewer if a finite sequence runs out) and the
    /// rest of the sequence.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use gsharp_eval::value::{Sequence, Value};
    ///
    /// let naturals = Sequence::Unbounded { head: vec![], next: 1.0 };
    /// let (first, rest) = naturals.split(2);
    /// assert_eq!(first, vec![Value::Number(1.0), Value::Number(2.0)]);
    /// assert_eq!(rest, Sequence::Unbounded { head: vec![], next: 3.0 });
    /// ```
    pub fn split(self, n: usize) -> (Vec<Value>, Sequence) {
        match self {
            Self::Finite(mut items) => {
                let rest = items.split_off(n.min(items.len()));
                (items, Self::Finite(rest))
            }
            Self::Unbounded { mut head, mut next } => {
                let rest_head = head.split_off(n.min(head.len()));
                let mut taken = head;
                while taken.len() < n {
                    taken.push(Value::Number(next));
                    next += 1.0;
                }
                (
                    taken,
                    Self::Unbounded {
                        head: rest_head,
                        next,
                    },
                )
            }
        }
    }
}

// =============================================================================
// VALUE
// =============================================================================

/// A GSharp runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Number.
    Number(f64),
    /// String.
    Str(String),
    /// Boolean.
    Bool(bool),
    /// Figure.
    Figure(Figure),
    /// Sequence.
    Sequence(Sequence),
    /// Destructuring target without a matching element.
    Undefined,
}

impl Value {
    /// Type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Figure(figure) => figure.shape.kind().keyword(),
            Self::Sequence(_) => "sequence",
            Self::Undefined => "undefined",
        }
    }

    /// Extract a number.
    pub fn as_number(&self) -> Result<f64, EvalError> {
        match self {
            Self::Number(n) => Ok(*n),
            other => Err(EvalError::expected("number", other.type_name())),
        }
    }

    /// Extract a boolean.
    pub fn as_bool(&self) -> Result<bool, EvalError> {
        match self {
            Self::Bool(b) => Ok(*b),
            other => Err(EvalError::expected("boolean", other.type_name())),
        }
    }

    /// Extract a figure.
    pub fn as_figure(&self) -> Result<&Figure, EvalError> {
        match self {
            Self::Figure(figure) => Ok(figure),
            other => Err(EvalError::expected("figure", other.type_name())),
        }
    }

    /// Extract point coordinates.
    pub fn as_point(&self) -> Result<DVec2, EvalError> {
        match self {
            Self::Figure(figure) => figure
                .shape
                .as_point()
                .ok_or_else(|| EvalError::expected("point", self.type_name())),
            other => Err(EvalError::expected("point", other.type_name())),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Figure> for Value {
    fn from(figure: Figure) -> Self {
        Value::Figure(figure)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Figure(figure) => {
                write!(f, "{}", figure.shape.kind())?;
                if let Some(name) = &figure.name {
                    write!(f, " {}", name)?;
                }
                let points: Vec<String> = figure
                    .shape
                    .points()
                    .iter()
                    .map(|p| format!("({}, {})", p.x, p.y))
                    .collect();
                write!(f, "[{}]", points.join(", "))
            }
            Value::Sequence(Sequence::Finite(items)) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "}}")
            }
            Value::Sequence(Sequence::Unbounded { head, next }) => {
                write!(f, "{{")?;
                for item in head {
                    write!(f, "{}, ", item)?;
                }
                write!(f, "{} ...}}", next)
            }
            Value::Undefined => write!(f, "undefined"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(values: &[f64]) -> Vec<Value> {
        values.iter().map(|n| Value::Number(*n)).collect()
    }

    #[test]
    fn test_split_finite() {
        let seq = Sequence::Finite(numbers(&[1.0, 2.0, 3.0]));
        let (taken, rest) = seq.split(1);
        assert_eq!(taken, numbers(&[1.0]));
        assert_eq!(rest, Sequence::Finite(numbers(&[2.0, 3.0])));
    }

    #[test]
    fn test_split_finite_runs_out() {
        let (taken, rest) = Sequence::Finite(numbers(&[1.0])).split(3);
        assert_eq!(taken.len(), 1);
        assert_eq!(rest, Sequence::empty());
    }

    #[test]
    fn test_split_unbounded_uses_head_first() {
        let seq = Sequence::Unbounded {
            head: numbers(&[10.0]),
            next: 1.0,
        };
        let (taken, rest) = seq.split(3);
        assert_eq!(taken, numbers(&[10.0, 1.0, 2.0]));
        assert_eq!(
            rest,
            Sequence::Unbounded {
                head: vec![],
                next: 3.0
            }
        );
    }

    #[test]
    fn test_unbounded_elements_error() {
        let seq = Sequence::Unbounded {
            head: vec![],
            next: 0.0,
        };
        assert_eq!(
            seq.elements("sum"),
            Err(EvalError::UnboundedSequence("sum".to_string()))
        );
    }

    #[test]
    fn test_as_point() {
        let p = Value::Figure(Figure::point(DVec2::new(1.0, 2.0)));
        assert_eq!(p.as_point().unwrap(), DVec2::new(1.0, 2.0));
        assert!(Value::Number(1.0).as_point().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        let open = Value::Sequence(Sequence::Unbounded {
            head: numbers(&[0.0]),
            next: 1.0,
        });
        assert_eq!(open.to_string(), "{0, 1 ...}");
    }
}
