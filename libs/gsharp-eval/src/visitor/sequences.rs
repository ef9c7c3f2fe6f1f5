//! # Sequence Literals
//!
//! `{a, b, c}` is expanded eagerly. `{a ... n}` continues from the last
//! explicit element in steps of 1 up to and including `n`. `{a ...}` stays
//! an unbounded generator that only destructuring can take from.

use super::{eval_value, EvalResult};
use crate::context::Environment;
use crate::error::EvalError;
use crate::value::{Sequence, Value};
use config::constants::MAX_SEQUENCE_LEN;
use gsharp_parser::{SequenceLiteral, SequenceTail};

/// Evaluate a sequence literal.
///
/// A named literal (`s = {1, 2}`) is declared and yields nothing.
pub fn eval_sequence(
    env: &mut Environment,
    literal: &SequenceLiteral,
) -> Result<EvalResult, EvalError> {
    let mut items = literal
        .elements
        .iter()
        .map(|element| eval_value(env, element))
        .collect::<Result<Vec<_>, _>>()?;

    let seq = match &literal.tail {
        None => Sequence::Finite(items),
        Some(SequenceTail::UpTo(bound)) => {
            let bound = eval_value(env, bound)?.as_number()?;
            let mut next = continuation(&items)?;
            while next <= bound {
                if items.len() >= MAX_SEQUENCE_LEN {
                    return Err(EvalError::InvalidArgument(format!(
                        "sequence longer than {} elements",
                        MAX_SEQUENCE_LEN
                    )));
                }
                items.push(Value::Number(next));
                next += 1.0;
            }
            Sequence::Finite(items)
        }
        Some(SequenceTail::Unbounded) => {
            let next = continuation(&items)?;
            Sequence::Unbounded { head: items, next }
        }
    };

    match &literal.name {
        Some(name) => {
            env.declare(name, Value::Sequence(seq))?;
            Ok(EvalResult::Unit)
        }
        None => Ok(EvalResult::Value(Value::Sequence(seq))),
    }
}

/// First generated element: one past the last explicit element.
fn continuation(items: &[Value]) -> Result<f64, EvalError> {
    match items.last() {
        Some(last) => Ok(last.as_number()? + 1.0),
        None => Err(EvalError::InvalidArgument(
            "'...' needs a starting element".to_string(),
        )),
    }
}

// =============================================================================
// TESTS
// =============================================================================
