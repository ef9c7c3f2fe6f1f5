//! # Intersection Engine
//!
//! Analytic intersection of two figures.
//!
//! Operands are ordered by rank (point < circle < line-like) before
//! dispatch, so every unordered pair is handled by exactly one routine:
//!
//! | Pair | Routine |
//! |------|---------|
//! | point, any | incidence test |
//! | circle, circle | radical chord |
//! | circle, line-like | line/circle quadratic |
//! | line-like, line-like | 2×2 determinant |
//!
//! Line-like figures are lines, rays, segments and arcs (as their chord).
//! Against a circle they count as full lines. Between two line-like figures,
//! a crossing outside a ray's or segment's extent is dropped. Coincident
//! results are reported once.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec2;
//! use gsharp_geometry::{intersect, Shape};
//!
//! let a = Shape::Circle { center: DVec2::ZERO, radius: 5.0 };
//! let b = Shape::Circle { center: DVec2::new(8.0, 0.0), radius: 5.0 };
//! assert_eq!(intersect(&a, &b).unwrap().len(), 2);
//! ```

use crate::error::GeometryError;
use crate::shape::{Linear, Shape};
use config::constants::EPSILON;
use glam::DVec2;

// =============================================================================
// DISPATCH
// =============================================================================

/// Dispatch rank of a shape.
fn rank(shape: &Shape) -> u8 {
    match shape {
        Shape::Point(_) => 0,
        Shape::Circle { .. } => 1,
        Shape::Line { .. } | Shape::Segment { .. } | Shape::Ray { .. } | Shape::Arc { .. } => 2,
    }
}

/// Intersect two figures.
///
/// ## Returns
///
/// Zero, one or two points. Identical figures other than points fail with
/// [`GeometryError::InfiniteIntersections`].
pub fn intersect(a: &Shape, b: &Shape) -> Result<Vec<DVec2>, GeometryError> {
    if a.same_as(b) {
        return match a.as_point() {
            Some(p) => Ok(vec![p]),
            None => Err(GeometryError::InfiniteIntersections),
        };
    }

    let (first, second) = if rank(a) <= rank(b) { (a, b) } else { (b, a) };

    let points = if let Some(p) = first.as_point() {
        incidence(p, second)
    } else if let (Shape::Circle { center, radius }, Some(linear)) = (first, second.as_linear()) {
        circle_linear(*center, *radius, &linear)
    } else if let (
        Shape::Circle {
            center: c1,
            radius: r1,
        },
        Shape::Circle {
            center: c2,
            radius: r2,
        },
    ) = (first, second)
    {
        circle_circle(*c1, *r1, *c2, *r2)
    } else {
        match (first.as_linear(), second.as_linear()) {
            (Some(l1), Some(l2)) => linear_linear(&l1, &l2),
            _ => Vec::new(),
        }
    };

    Ok(dedup(points))
}

// =============================================================================
// ROUTINES
// =============================================================================

/// The point itself if it lies on `other`.
fn incidence(p: DVec2, other: &Shape) -> Vec<DVec2> {
    if other.contains(p) {
        vec![p]
    } else {
        Vec::new()
    }
}

/// Circle–circle intersection.
///
/// Separate (`d > r1 + r2`) or nested (`d < |r1 - r2|`) circles do not meet.
fn circle_circle(c1: DVec2, r1: f64, c2: DVec2, r2: f64) -> Vec<DVec2> {
    let d = c1.distance(c2);
    if d <= EPSILON || d > r1 + r2 + EPSILON || d < (r1 - r2).abs() - EPSILON {
        return Vec::new();
    }

    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    let h_sq = r1 * r1 - a * a;
    let h = if h_sq <= EPSILON { 0.0 } else { h_sq.sqrt() };

    let axis = (c2 - c1) / d;
    let base = c1 + axis * a;
    let offset = axis.perp() * h;

    vec![base + offset, base - offset]
}

/// Circle–line intersection.
///
/// Rays, segments and arc chords are extended to full lines here.
fn circle_linear(center: DVec2, radius: f64, linear: &Linear) -> Vec<DVec2> {
    let len = linear.direction.length();
    if len <= EPSILON {
        return Vec::new();
    }

    let foot_t = linear.project(center);
    let foot = linear.at(foot_t);
    let dist = foot.distance(center);
    if dist > radius + EPSILON {
        return Vec::new();
    }

    let half_sq = radius * radius - dist * dist;
    let half = if half_sq <= EPSILON { 0.0 } else { half_sq.sqrt() };
    let dt = half / len;

    vec![linear.at(foot_t - dt), linear.at(foot_t + dt)]
}

/// Line–line intersection via the 2×2 determinant.
///
/// Parallel operands (zero determinant) do not meet.
fn linear_linear(l1: &Linear, l2: &Linear) -> Vec<DVec2> {
    let det = l1.direction.perp_dot(l2.direction);
    let scale = l1.direction.length() * l2.direction.length();
    if det.abs() <= EPSILON * scale.max(1.0) {
        return Vec::new();
    }

    let w = l2.origin - l1.origin;
    let t = w.perp_dot(l2.direction) / det;
    let s = w.perp_dot(l1.direction) / det;

    if l1.admits(t) && l2.admits(s) {
        vec![l1.at(t)]
    } else {
        Vec::new()
    }
}

/// Drop points coinciding with an earlier one.
fn dedup(points: Vec<DVec2>) -> Vec<DVec2> {
    let mut unique: Vec<DVec2> = Vec::with_capacity(points.len());
    for p in points {
        if !unique.iter().any(|q| q.distance(p) <= EPSILON) {
            unique.push(p);
        }
    }
    unique
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn circle(x: f64, y: f64, radius: f64) -> Shape {
        Shape::Circle {
            center: DVec2::new(x, y),
            radius,
        }
    }

    fn line(ax: f64, ay: f64, bx: f64, by: f64) -> Shape {
        Shape::Line {
            a: DVec2::new(ax, ay),
            b: DVec2::new(bx, by),
        }
    }

    fn segment(ax: f64, ay: f64, bx: f64, by: f64) -> Shape {
        Shape::Segment {
            a: DVec2::new(ax, ay),
            b: DVec2::new(bx, by),
        }
    }

    #[test]
    fn test_circle_circle_two_points() {
        let a = circle(0.0, 0.0, 5.0);
        let b = circle(8.0, 0.0, 5.0);
        let points = intersect(&a, &b).unwrap();

        assert_eq!(points.len(), 2);
        for p in &points {
            assert_relative_eq!(p.x, 4.0, epsilon = 1e-9);
            assert_relative_eq!(p.distance(DVec2::ZERO), 5.0, epsilon = 1e-9);
            assert_relative_eq!(p.distance(DVec2::new(8.0, 0.0)), 5.0, epsilon = 1e-9);
        }
        assert_relative_eq!(points[0].y, -points[1].y, epsilon = 1e-9);
    }

    #[test]
    fn test_circle_circle_separate_and_nested() {
        assert!(intersect(&circle(0.0, 0.0, 1.0), &circle(5.0, 0.0, 1.0))
            .unwrap()
            .is_empty());
        assert!(intersect(&circle(0.0, 0.0, 5.0), &circle(1.0, 0.0, 1.0))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_concentric_circles() {
        let points = intersect(&circle(2.0, 2.0, 3.0), &circle(2.0, 2.0, 6.0)).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_circle_circle_tangent_single_point() {
        let points = intersect(&circle(0.0, 0.0, 2.0), &circle(4.0, 0.0, 2.0)).unwrap();
        assert_eq!(points.len(), 1);
        assert_abs_diff_eq!(points[0].x, 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(points[0].y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_circle_line() {
        let points = intersect(&circle(0.0, 0.0, 5.0), &line(-10.0, 3.0, 10.0, 3.0)).unwrap();
        assert_eq!(points.len(), 2);
        let mut xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        xs.sort_by(|a, b| a.total_cmp(b));
        assert_relative_eq!(xs[0], -4.0, epsilon = 1e-9);
        assert_relative_eq!(xs[1], 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_circle_line_order_independent() {
        let c = circle(0.0, 0.0, 5.0);
        let l = line(-10.0, 3.0, 10.0, 3.0);
        assert_eq!(intersect(&c, &l).unwrap(), intersect(&l, &c).unwrap());
    }

    #[test]
    fn test_circle_tangent_line() {
        let points = intersect(&circle(0.0, 0.0, 5.0), &line(-10.0, 5.0, 10.0, 5.0)).unwrap();
        assert_eq!(points.len(), 1);
        assert_abs_diff_eq!(points[0].x, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_circle_segment_extends_to_line() {
        // Segment from the center outward still yields both line points
        let points = intersect(&circle(0.0, 0.0, 5.0), &segment(0.0, 0.0, 10.0, 0.0)).unwrap();
        assert_eq!(points.len(), 2);
        assert_relative_eq!(points[0].x, -5.0, epsilon = 1e-9);
        assert_relative_eq!(points[1].x, 5.0, epsilon = 1e-9);

        let inside = intersect(&circle(0.0, 0.0, 5.0), &segment(-1.0, 0.0, 1.0, 0.0)).unwrap();
        assert_eq!(inside.len(), 2);
    }

    #[test]
    fn test_circle_ray_extends_to_line() {
        let ray = Shape::Ray {
            origin: DVec2::ZERO,
            through: DVec2::new(0.0, 1.0),
        };
        let points = intersect(&circle(0.0, 0.0, 2.0), &ray).unwrap();
        assert_eq!(points.len(), 2);
        assert_relative_eq!(points[0].y, -2.0, epsilon = 1e-9);
        assert_relative_eq!(points[1].y, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_parallel_lines() {
        let points = intersect(&line(0.0, 0.0, 1.0, 1.0), &line(0.0, 1.0, 1.0, 2.0)).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_crossing_lines() {
        let points = intersect(&line(0.0, 0.0, 1.0, 1.0), &line(0.0, 2.0, 2.0, 0.0)).unwrap();
        assert_eq!(points.len(), 1);
        assert_relative_eq!(points[0].x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(points[0].y, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_segments_out_of_range() {
        // Carrier lines cross at (1, 1), outside the second segment
        let points = intersect(
            &segment(0.0, 0.0, 2.0, 2.0),
            &segment(0.0, 2.0, 0.5, 1.5),
        )
        .unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_arc_as_chord() {
        let arc = Shape::arc(
            DVec2::ZERO,
            DVec2::new(2.0, 0.0),
            DVec2::new(0.0, 2.0),
            None,
        );
        // The chord runs from (2, 0) to (0, 2) and crosses y = x at (1, 1)
        let points = intersect(&arc, &line(0.0, 0.0, 1.0, 1.0)).unwrap();
        assert_eq!(points.len(), 1);
        assert_relative_eq!(points[0].x, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_point_incidence() {
        let p = Shape::Point(DVec2::new(3.0, 4.0));
        assert_eq!(intersect(&p, &circle(0.0, 0.0, 5.0)).unwrap().len(), 1);
        assert!(intersect(&circle(0.0, 0.0, 4.0), &p).unwrap().is_empty());
        assert_eq!(intersect(&p, &p).unwrap(), vec![DVec2::new(3.0, 4.0)]);
    }

    #[test]
    fn test_identical_figures() {
        let c = circle(1.0, 1.0, 2.0);
        assert_eq!(
            intersect(&c, &c),
            Err(GeometryError::InfiniteIntersections)
        );
        let l = line(0.0, 0.0, 1.0, 0.0);
        assert_eq!(
            intersect(&l, &line(4.0, 0.0, 9.0, 0.0)),
            Err(GeometryError::InfiniteIntersections)
        );
    }
}
