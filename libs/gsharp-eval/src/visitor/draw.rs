//! # Draw Evaluation
//!
//! Turns `draw` targets into [`ToDraw`] descriptors in the current color.
//!
//! ```text
//! draw p;                  // named figure
//! draw circle(p, 3) "c";   // inline figure with a label
//! draw intersect(a, b);    // every resulting point
//! ```

use super::eval_value;
use crate::context::Environment;
use crate::draw::ToDraw;
use crate::error::EvalError;
use crate::value::{Sequence, Value};
use gsharp_parser::Ast;

/// Evaluate `draw target "label"?`.
///
/// A bare name must be bound to a figure or a sequence; anything else,
/// including a number or a constant, is an unknown figure. Sequences emit
/// one descriptor per element, in order.
pub fn eval_draw(
    env: &mut Environment,
    target: &Ast,
    label: Option<&str>,
) -> Result<Vec<ToDraw>, EvalError> {
    let value = match target {
        Ast::Identifier(name) => match env.lookup(name) {
            Some(value @ (Value::Figure(_) | Value::Sequence(_))) => value,
            _ => return Err(EvalError::UnknownFigure(name.clone())),
        },
        other => eval_value(env, other)?,
    };

    let color = env.current_color();
    let drawings = match &value {
        Value::Figure(figure) => vec![ToDraw::from_figure(figure, color, label)],
        Value::Sequence(seq @ Sequence::Finite(_)) => seq
            .elements("draw")?
            .iter()
            .map(|item| Ok(ToDraw::from_figure(item.as_figure()?, color, label)))
            .collect::<Result<Vec<_>, EvalError>>()?,
        Value::Sequence(Sequence::Unbounded { .. }) => {
            return Err(EvalError::UnboundedSequence("draw".to_string()))
        }
        other => return Err(EvalError::expected("figure", other.type_name())),
    };

    log::debug!("draw {} figure(s) in {}", drawings.len(), color);
    Ok(drawings)
}

// =============================================================================
// TESTS
// =============================================================================
