//! # Evaluation Errors
//!
//! Error types for statement evaluation and for a whole interpretation run.

use gsharp_geometry::GeometryError;
use gsharp_parser::{LexError, ParseError};
use thiserror::Error;

/// Errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Name not bound in any frame or registry.
    #[error("undefined identifier '{0}'")]
    UndefinedIdentifier(String),

    /// Call of a function nobody declared.
    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    /// Wrong number of arguments.
    #[error("wrong number of arguments for {name}: expected {expected}, got {found}")]
    ArityMismatch {
        /// Function name.
        name: String,
        /// Accepted argument count(s).
        expected: String,
        /// Arguments supplied.
        found: usize,
    },

    /// Type mismatch in an operator, condition or argument.
    #[error("type error: {0}")]
    TypeError(String),

    /// `draw` of a name that resolves to nothing.
    #[error("unknown figure '{0}'")]
    UnknownFigure(String),

    /// Color name outside the color table.
    #[error("unknown color '{0}'")]
    UnknownColor(String),

    /// Redeclaration of a constant, sequence or predefined name.
    #[error("'{0}' is already defined")]
    AlreadyDefined(String),

    /// Intersection of a figure with itself.
    #[error("infinite intersections: both figures are identical")]
    InfiniteIntersections,

    /// Operation that needs every element of an unbounded sequence.
    #[error("cannot {0} an unbounded sequence")]
    UnboundedSequence(String),

    /// Too many nested function calls.
    #[error("recursion limit of {0} nested calls exceeded")]
    RecursionLimit(usize),

    /// Invalid argument value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl EvalError {
    /// Type error for a value that is not of the expected kind.
    pub fn expected(what: &str, found: &str) -> Self {
        Self::TypeError(format!("expected {}, found {}", what, found))
    }
}

impl From<GeometryError> for EvalError {
    fn from(err: GeometryError) -> Self {
        match err {
            GeometryError::InfiniteIntersections => Self::InfiniteIntersections,
        }
    }
}

// =============================================================================
// INTERPRET ERROR
// =============================================================================

/// Failure of one pipeline stage.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpretErrorKind {
    /// Tokenizing failed.
    #[error("{0}")]
    Lex(LexError),
    /// Parsing failed.
    #[error("{0}")]
    Parse(ParseError),
    /// Evaluation failed.
    #[error("{0}")]
    Eval(EvalError),
}

/// Error of an interpretation run, tagged with the failing source line.
///
/// ## Example
///
/// ```rust
/// use gsharp_eval::interpret;
///
/// let err = interpret("x = 1;\ndraw nowhere;").unwrap_err();
/// assert_eq!(err, "line 2: unknown figure 'nowhere'");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {kind}")]
pub struct InterpretError {
    /// 1-based source line.
    pub line: usize,
    /// What failed.
    pub kind: InterpretErrorKind,
}

impl InterpretError {
    /// Evaluation error at a line.
    pub fn eval(line: usize, err: EvalError) -> Self {
        Self {
            line,
            kind: InterpretErrorKind::Eval(err),
        }
    }
}

impl From<LexError> for InterpretError {
    fn from(err: LexError) -> Self {
        Self {
            line: err.position.line,
            kind: InterpretErrorKind::Lex(err),
        }
    }
}

impl From<ParseError> for InterpretError {
    fn from(err: ParseError) -> Self {
        Self {
            line: err.line(),
            kind: InterpretErrorKind::Parse(err),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EvalError::TypeError("expected number".to_string());
        assert!(err.to_string().contains("type error"));
    }

    #[test]
    fn test_interpret_error_prefixes_line() {
        let err = InterpretError::eval(3, EvalError::UndefinedIdentifier("x".to_string()));
        assert_eq!(err.to_string(), "line 3: undefined identifier 'x'");
    }

    #[test]
    fn test_geometry_error_converts() {
        let err: EvalError = GeometryError::InfiniteIntersections.into();
        assert_eq!(err, EvalError::InfiniteIntersections);
    }
}
