//! # Figure Evaluation
//!
//! Figure declarations, `intersect` and `measure`.
//!
//! ## Figure Resolution
//!
//! - With arguments: the arguments define the figure
//! - Without arguments: reuse the figure cached under the same name and
//!   kind, or place one at random and cache it
//!
//! Named figures are registered so later statements can refer to them.
//!
//! ## Example
//!
//! ```rust
//! use gsharp_eval::context::Environment;
//! use gsharp_eval::visitor::figures::eval_figure;
//! use gsharp_geometry::FigureKind;
//! use gsharp_parser::FigureDecl;
//!
//! let mut env = Environment::with_seed(5);
//! let decl = FigureDecl { kind: FigureKind::Circle, name: Some("c".into()), args: None, comment: None };
//! let first = eval_figure(&mut env, &decl).unwrap();
//! let again = eval_figure(&mut env, &decl).unwrap();
//! assert_eq!(first.shape, again.shape);
//! ```

use super::eval_value;
use crate::context::Environment;
use crate::error::EvalError;
use crate::value::{Figure, Sequence, Value};
use config::constants::{
    EPSILON, RANDOM_COORD_MAX, RANDOM_COORD_MIN, RANDOM_RADIUS_MAX, RANDOM_RADIUS_MIN,
};
use glam::DVec2;
use gsharp_geometry::{distance, intersect, FigureKind, Shape};
use gsharp_parser::{Ast, FigureArgs, FigureDecl};
use rand::Rng;
use std::f64::consts::TAU;

// =============================================================================
// FIGURE DECLARATIONS
// =============================================================================

/// Evaluate a figure declaration.
///
/// ## Parameters
///
/// - `env`: Execution context; receives named figures
/// - `decl`: Parsed declaration
pub fn eval_figure(env: &mut Environment, decl: &FigureDecl) -> Result<Figure, EvalError> {
    let (shape, cached_comment) = match (&decl.args, &decl.name) {
        (Some(args), _) => (shape_from_args(env, decl.kind, args)?, None),
        (None, Some(name)) => {
            let cached = env
                .figure(name)
                .filter(|figure| figure.shape.kind() == decl.kind)
                .map(|figure| (figure.shape, figure.comment.clone()));
            match cached {
                Some((shape, comment)) => (shape, comment),
                None => {
                    let shape = random_shape(decl.kind, env.rng());
                    log::debug!("placed {} {} at random", decl.kind, name);
                    (shape, None)
                }
            }
        }
        (None, None) => {
            return Err(EvalError::InvalidArgument(format!(
                "anonymous {} needs arguments",
                decl.kind
            )))
        }
    };

    let figure = Figure {
        name: decl.name.clone(),
        shape,
        comment: decl.comment.clone().or(cached_comment),
    };
    if let Some(name) = &decl.name {
        env.register_figure(name, figure.clone());
    }
    Ok(figure)
}

fn shape_from_args(
    env: &mut Environment,
    kind: FigureKind,
    args: &FigureArgs,
) -> Result<Shape, EvalError> {
    match args {
        FigureArgs::Point { x, y } => {
            let x = eval_value(env, x)?.as_number()?;
            let y = eval_value(env, y)?.as_number()?;
            Ok(Shape::Point(DVec2::new(x, y)))
        }
        FigureArgs::Linear { a, b } => {
            let a = eval_point(env, a)?;
            let b = eval_point(env, b)?;
            if a.distance(b) <= EPSILON {
                return Err(EvalError::InvalidArgument(format!(
                    "{} needs two distinct points",
                    kind
                )));
            }
            match kind {
                FigureKind::Line => Ok(Shape::Line { a, b }),
                FigureKind::Segment => Ok(Shape::Segment { a, b }),
                FigureKind::Ray => Ok(Shape::Ray {
                    origin: a,
                    through: b,
                }),
                other => Err(mismatched(other)),
            }
        }
        FigureArgs::Circle { center, radius } => {
            let center = eval_point(env, center)?;
            let radius = positive_radius(eval_value(env, radius)?.as_number()?)?;
            Ok(Shape::Circle { center, radius })
        }
        FigureArgs::Arc {
            center,
            start,
            end,
            radius,
        } => {
            let center = eval_point(env, center)?;
            let start = eval_point(env, start)?;
            let end = eval_point(env, end)?;
            let radius = match radius {
                Some(radius) => Some(positive_radius(eval_value(env, radius)?.as_number()?)?),
                None => None,
            };
            if center.distance(start) <= EPSILON || center.distance(end) <= EPSILON {
                return Err(EvalError::InvalidArgument(
                    "arc endpoints must differ from its center".to_string(),
                ));
            }
            Ok(Shape::arc(center, start, end, radius))
        }
    }
}

fn eval_point(env: &mut Environment, ast: &Ast) -> Result<DVec2, EvalError> {
    eval_value(env, ast)?.as_point()
}

fn positive_radius(radius: f64) -> Result<f64, EvalError> {
    if radius.is_finite() && radius > EPSILON {
        Ok(radius)
    } else {
        Err(EvalError::InvalidArgument(format!(
            "radius must be positive, got {}",
            radius
        )))
    }
}

fn mismatched(kind: FigureKind) -> EvalError {
    EvalError::InvalidArgument(format!("wrong arguments for {}", kind))
}

// =============================================================================
// RANDOM PLACEMENT
// =============================================================================

fn random_point<R: Rng>(rng: &mut R) -> DVec2 {
    DVec2::new(
        rng.gen_range(RANDOM_COORD_MIN..RANDOM_COORD_MAX),
        rng.gen_range(RANDOM_COORD_MIN..RANDOM_COORD_MAX),
    )
}

fn random_pair<R: Rng>(rng: &mut R) -> (DVec2, DVec2) {
    let a = random_point(rng);
    loop {
        let b = random_point(rng);
        if a.distance(b) > EPSILON {
            return (a, b);
        }
    }
}

/// Place a figure of `kind` uniformly inside the configured ranges.
fn random_shape<R: Rng>(kind: FigureKind, rng: &mut R) -> Shape {
    match kind {
        FigureKind::Point => Shape::Point(random_point(rng)),
        FigureKind::Line => {
            let (a, b) = random_pair(rng);
            Shape::Line { a, b }
        }
        FigureKind::Segment => {
            let (a, b) = random_pair(rng);
            Shape::Segment { a, b }
        }
        FigureKind::Ray => {
            let (origin, through) = random_pair(rng);
            Shape::Ray { origin, through }
        }
        FigureKind::Circle => Shape::Circle {
            center: random_point(rng),
            radius: rng.gen_range(RANDOM_RADIUS_MIN..RANDOM_RADIUS_MAX),
        },
        FigureKind::Arc => {
            let center = random_point(rng);
            let radius = rng.gen_range(RANDOM_RADIUS_MIN..RANDOM_RADIUS_MAX);
            let on_circle = |angle: f64| center + DVec2::from_angle(angle) * radius;
            let start = on_circle(rng.gen_range(0.0..TAU));
            let end = on_circle(rng.gen_range(0.0..TAU));
            Shape::Arc {
                center,
                start,
                end,
                radius,
            }
        }
    }
}

// =============================================================================
// INTERSECT AND MEASURE
// =============================================================================

/// Evaluate `intersect(a, b)`.
///
/// ## Returns
///
/// - no points: the empty sequence
/// - one point: that point
/// - several points: a sequence of points
pub fn eval_intersect(env: &mut Environment, first: &Ast, second: &Ast) -> Result<Value, EvalError> {
    let a = eval_value(env, first)?;
    let b = eval_value(env, second)?;
    let points = intersect(&a.as_figure()?.shape, &b.as_figure()?.shape)?;

    log::trace!("intersection found {} point(s)", points.len());
    Ok(match points.as_slice() {
        [] => Value::Sequence(Sequence::empty()),
        [p] => Value::Figure(Figure::point(*p)),
        _ => Value::Sequence(Sequence::Finite(
            points.into_iter().map(|p| Figure::point(p).into()).collect(),
        )),
    })
}

/// Evaluate `measure(p, q)`: Euclidean distance between two points.
pub fn eval_measure(env: &mut Environment, from: &Ast, to: &Ast) -> Result<Value, EvalError> {
    let from = eval_point(env, from)?;
    let to = eval_point(env, to)?;
    Ok(Value::Number(distance(from, to)))
}

// =============================================================================
// TESTS
// =============================================================================
