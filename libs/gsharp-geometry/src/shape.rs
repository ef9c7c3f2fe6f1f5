//! # Figure Shapes
//!
//! Resolved coordinates for every figure kind, plus the queries the
//! evaluator and intersection engine need.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec2;
//! use gsharp_geometry::{FigureKind, Shape};
//!
//! let circle = Shape::Circle { center: DVec2::ZERO, radius: 5.0 };
//! assert_eq!(circle.kind(), FigureKind::Circle);
//! assert!(circle.contains(DVec2::new(3.0, 4.0)));
//! ```

use config::constants::{approx_equal, EPSILON};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// FIGURE KIND
// =============================================================================

/// The six figure kinds of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FigureKind {
    /// A single point.
    Point,
    /// Infinite line through two points.
    Line,
    /// Segment between two points.
    Segment,
    /// Half-line from an origin through a second point.
    Ray,
    /// Full circle.
    Circle,
    /// Circular arc.
    Arc,
}

impl FigureKind {
    /// Keyword used in source text.
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Line => "line",
            Self::Segment => "segment",
            Self::Ray => "ray",
            Self::Circle => "circle",
            Self::Arc => "arc",
        }
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

// =============================================================================
// SHAPE
// =============================================================================

/// A figure with resolved coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// A point.
    Point(DVec2),
    /// Line through `a` and `b`.
    Line {
        /// First point.
        a: DVec2,
        /// Second point.
        b: DVec2,
    },
    /// Segment from `a` to `b`.
    Segment {
        /// First endpoint.
        a: DVec2,
        /// Second endpoint.
        b: DVec2,
    },
    /// Ray from `origin` through `through`.
    Ray {
        /// Start of the ray.
        origin: DVec2,
        /// Second point fixing the direction.
        through: DVec2,
    },
    /// Circle.
    Circle {
        /// Center.
        center: DVec2,
        /// Radius.
        radius: f64,
    },
    /// Arc running counter-clockwise from `start` to `end`.
    ///
    /// `start` and `end` lie on the arc's circle.
    Arc {
        /// Center.
        center: DVec2,
        /// First endpoint.
        start: DVec2,
        /// Second endpoint.
        end: DVec2,
        /// Radius.
        radius: f64,
    },
}

impl Shape {
    /// Build an arc from a center and two direction points.
    ///
    /// The endpoints are projected onto the circle of the given radius.
    /// Without a radius, the distance from `center` to `start` is used.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use gsharp_geometry::Shape;
    ///
    /// let arc = Shape::arc(DVec2::ZERO, DVec2::new(2.0, 0.0), DVec2::new(0.0, 5.0), None);
    /// assert_eq!(arc.radius(), Some(2.0));
    /// assert_eq!(arc.points()[2], DVec2::new(0.0, 2.0));
    /// ```
    pub fn arc(center: DVec2, start: DVec2, end: DVec2, radius: Option<f64>) -> Self {
        let radius = radius.unwrap_or_else(|| center.distance(start));
        let project = |p: DVec2| {
            let dir = (p - center).normalize_or_zero();
            center + dir * radius
        };
        Self::Arc {
            center,
            start: project(start),
            end: project(end),
            radius,
        }
    }

    /// Figure kind of this shape.
    pub fn kind(&self) -> FigureKind {
        match self {
            Self::Point(_) => FigureKind::Point,
            Self::Line { .. } => FigureKind::Line,
            Self::Segment { .. } => FigureKind::Segment,
            Self::Ray { .. } => FigureKind::Ray,
            Self::Circle { .. } => FigureKind::Circle,
            Self::Arc { .. } => FigureKind::Arc,
        }
    }

    /// Points handed to a renderer.
    ///
    /// - point: `[p]`
    /// - line, segment, ray: `[a, b]`
    /// - circle: `[center]`
    /// - arc: `[center, start, end]`
    pub fn points(&self) -> Vec<DVec2> {
        match *self {
            Self::Point(p) => vec![p],
            Self::Line { a, b } | Self::Segment { a, b } => vec![a, b],
            Self::Ray { origin, through } => vec![origin, through],
            Self::Circle { center, .. } => vec![center],
            Self::Arc {
                center, start, end, ..
            } => vec![center, start, end],
        }
    }

    /// Radius of circles and arcs.
    pub fn radius(&self) -> Option<f64> {
        match *self {
            Self::Circle { radius, .. } | Self::Arc { radius, .. } => Some(radius),
            _ => None,
        }
    }

    /// The coordinates of a point shape.
    pub fn as_point(&self) -> Option<DVec2> {
        match *self {
            Self::Point(p) => Some(p),
            _ => None,
        }
    }

    /// Straight-line view of line-like shapes.
    ///
    /// An arc is viewed as its chord from `start` to `end`.
    pub fn as_linear(&self) -> Option<Linear> {
        let (origin, to, bound) = match *self {
            Self::Line { a, b } => (a, b, Bound::Unbounded),
            Self::Segment { a, b } => (a, b, Bound::Segment),
            Self::Ray { origin, through } => (origin, through, Bound::Ray),
            Self::Arc { start, end, .. } => (start, end, Bound::Segment),
            Self::Point(_) | Self::Circle { .. } => return None,
        };
        Some(Linear {
            origin,
            direction: to - origin,
            bound,
        })
    }

    /// Whether `p` lies on this figure, within tolerance.
    pub fn contains(&self, p: DVec2) -> bool {
        match *self {
            Self::Point(q) => p.distance(q) <= EPSILON,
            Self::Circle { center, radius } => approx_equal(p.distance(center), radius),
            _ => self.as_linear().map_or(false, |linear| linear.contains(p)),
        }
    }

    /// Whether two shapes describe the same set of points.
    pub fn same_as(&self, other: &Shape) -> bool {
        let near = |a: DVec2, b: DVec2| a.distance(b) <= EPSILON;
        match (*self, *other) {
            (Self::Point(p), Self::Point(q)) => near(p, q),
            (Self::Line { .. }, Self::Line { a, b }) => self.contains(a) && self.contains(b),
            (Self::Segment { a: a1, b: b1 }, Self::Segment { a: a2, b: b2 }) => {
                (near(a1, a2) && near(b1, b2)) || (near(a1, b2) && near(b1, a2))
            }
            (
                Self::Ray {
                    origin: o1,
                    through: t1,
                },
                Self::Ray {
                    origin: o2,
                    through: t2,
                },
            ) => {
                near(o1, o2)
                    && near(
                        (t1 - o1).normalize_or_zero(),
                        (t2 - o2).normalize_or_zero(),
                    )
            }
            (
                Self::Circle {
                    center: c1,
                    radius: r1,
                },
                Self::Circle {
                    center: c2,
                    radius: r2,
                },
            ) => near(c1, c2) && approx_equal(r1, r2),
            (
                Self::Arc {
                    center: c1,
                    start: s1,
                    end: e1,
                    radius: r1,
                },
                Self::Arc {
                    center: c2,
                    start: s2,
                    end: e2,
                    radius: r2,
                },
            ) => near(c1, c2) && near(s1, s2) && near(e1, e2) && approx_equal(r1, r2),
            _ => false,
        }
    }
}

/// Euclidean distance between two points.
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    a.distance(b)
}

// =============================================================================
// LINEAR VIEW
// =============================================================================

/// Extent of a line-like figure along its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Any parameter.
    Unbounded,
    /// Parameter `t >= 0`.
    Ray,
    /// Parameter `0 <= t <= 1`.
    Segment,
}

/// Parametric form `origin + t * direction` of a line-like figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear {
    /// Point at `t = 0`.
    pub origin: DVec2,
    /// Offset to the point at `t = 1`.
    pub direction: DVec2,
    /// Admissible parameter range.
    pub bound: Bound,
}

impl Linear {
    /// Point at parameter `t`.
    pub fn at(&self, t: f64) -> DVec2 {
        self.origin + self.direction * t
    }

    /// Whether parameter `t` lies within the figure's extent.
    pub fn admits(&self, t: f64) -> bool {
        match self.bound {
            Bound::Unbounded => true,
            Bound::Ray => t >= -EPSILON,
            Bound::Segment => (-EPSILON..=1.0 + EPSILON).contains(&t),
        }
    }

    /// Parameter of the orthogonal projection of `p`.
    pub fn project(&self, p: DVec2) -> f64 {
        let len_sq = self.direction.length_squared();
        if len_sq <= EPSILON * EPSILON {
            return 0.0;
        }
        (p - self.origin).dot(self.direction) / len_sq
    }

    /// Whether `p` lies on the figure, within tolerance.
    pub fn contains(&self, p: DVec2) -> bool {
        let t = self.project(p);
        self.admits(t) && self.at(t).distance(p) <= EPSILON
    }
}

// =============================================================================
// TESTS
// =============================================================================
