//! # Geometry Errors

use thiserror::Error;

/// Errors raised by the intersection engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Both operands describe the same figure.
    #[error("infinite intersections: both figures are identical")]
    InfiniteIntersections,
}
