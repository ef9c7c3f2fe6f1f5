//! # GSharp Geometry
//!
//! Pure geometry over resolved coordinates: figure shapes, distance and the
//! intersection engine. Nothing here is random or stateful; the evaluator
//! resolves coordinates before calling in.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec2;
//! use gsharp_geometry::{intersect, Shape};
//!
//! let l1 = Shape::Line { a: DVec2::ZERO, b: DVec2::new(1.0, 1.0) };
//! let l2 = Shape::Line { a: DVec2::new(0.0, 2.0), b: DVec2::new(2.0, 0.0) };
//! let points = intersect(&l1, &l2).unwrap();
//! assert_eq!(points.len(), 1);
//! ```

pub mod error;
pub mod intersection;
pub mod shape;

pub use error::GeometryError;
pub use intersection::intersect;
pub use shape::{distance, Bound, FigureKind, Linear, Shape};
