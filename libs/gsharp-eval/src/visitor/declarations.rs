//! # Declarations
//!
//! Global declarations: `const`, plain and destructuring assignment, and
//! function declarations. None of these open a lexical frame; everything
//! lands in the environment's registries.
//!
//! ## Destructuring
//!
//! ```text
//! const a, b = {1, 2, 3};   // a = 1, b = {2, 3}
//! p, q = intersect(c1, c2); // p, q = the two points
//! x, _ = {1, 2, 3};         // x = 1, remainder discarded
//! ```

use super::{eval_value, EvalResult};
use crate::context::{Environment, DISCARD};
use crate::error::EvalError;
use crate::value::{Sequence, Value};
use gsharp_parser::Ast;

/// Evaluate `const names = value` or `names = value`.
///
/// A single name takes the whole value. With several names the value is
/// split: each of the first N-1 names takes one element (`Undefined` when
/// the sequence runs out) and the last name takes the remainder as a
/// sequence. A remainder holding exactly one figure binds that figure
/// directly. A non-sequence value behaves as a one-element sequence.
pub fn eval_assignment(
    env: &mut Environment,
    names: &[String],
    value: &Ast,
) -> Result<EvalResult, EvalError> {
    let value = eval_value(env, value)?;

    let Some((last, leading)) = names.split_last() else {
        return Ok(EvalResult::Unit);
    };
    if leading.is_empty() {
        env.declare(last, value)?;
        return Ok(EvalResult::Unit);
    }

    let seq = match value {
        Value::Sequence(seq) => seq,
        single => Sequence::Finite(vec![single]),
    };
    let (head, rest) = seq.split(leading.len());
    let mut head = head.into_iter();

    for name in leading {
        let element = head.next().unwrap_or(Value::Undefined);
        env.declare(name, element)?;
    }

    if last != DISCARD {
        env.declare(last, remainder(rest))?;
    }
    Ok(EvalResult::Unit)
}

fn remainder(rest: Sequence) -> Value {
    match rest {
        Sequence::Finite(mut items)
            if items.len() == 1 && matches!(items[0], Value::Figure(_)) =>
        {
            items.remove(0)
        }
        other => Value::Sequence(other),
    }
}

/// Register a user function without evaluating its body.
pub fn eval_function_decl(
    env: &mut Environment,
    name: &str,
    params: &[String],
    body: &Ast,
) -> Result<EvalResult, EvalError> {
    log::debug!("function {}({})", name, params.join(", "));
    env.declare_function(name, params.to_vec(), body.clone())?;
    Ok(EvalResult::Unit)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visitor::evaluate;
    use approx::assert_abs_diff_eq;
    use gsharp_parser::parse_program;

    fn env_after(source: &str) -> Environment {
        let mut env = Environment::with_seed(11);
        for statement in parse_program(source).unwrap() {
            evaluate(&mut env, &statement.node).unwrap();
        }
        env
    }

    fn numbers(values: &[f64]) -> Value {
        Value::Sequence(Sequence::Finite(
            values.iter().map(|n| Value::Number(*n)).collect(),
        ))
    }

    #[test]
    fn test_const_destructuring() {
        let env = env_after("const a, b = {1, 2, 3};");
        assert_eq!(env.lookup("a"), Some(Value::Number(1.0)));
        assert_eq!(env.lookup("b"), Some(numbers(&[2.0, 3.0])));
    }

    #[test]
    fn test_multi_assign_runs_out() {
        let env = env_after("a, b, c = {1};");
        assert_eq!(env.lookup("a"), Some(Value::Number(1.0)));
        assert_eq!(env.lookup("b"), Some(Value::Undefined));
        assert_eq!(env.lookup("c"), Some(numbers(&[])));
    }

    #[test]
    fn test_discard() {
        let env = env_after("_, b, _ = {1, 2, 3};");
        assert_eq!(env.lookup("b"), Some(Value::Number(2.0)));
        assert_eq!(env.lookup("_"), None);
    }

    #[test]
    fn test_destructure_unbounded() {
        let env = env_after("a, b, rest = {5 ...};");
        assert_eq!(env.lookup("a"), Some(Value::Number(5.0)));
        assert_eq!(env.lookup("b"), Some(Value::Number(6.0)));
        assert_eq!(
            env.lookup("rest"),
            Some(Value::Sequence(Sequence::Unbounded {
                head: vec![],
                next: 7.0
            }))
        );
    }

    #[test]
    fn test_points_destructure_to_figures() {
        let env = env_after(
            "circle a(point(0, 0), 5); circle b(point(8, 0), 5); p, q = intersect(a, b);",
        );
        let p = env.lookup("p").unwrap().as_point().unwrap();
        let q = env.lookup("q").unwrap().as_point().unwrap();
        assert_abs_diff_eq!(p.x, 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(q.x, 4.0, epsilon = 1e-9);
        assert_eq!(env.figure("p").and_then(|f| f.name.as_deref()), Some("p"));
        assert!(p != q);
        assert!(p.y.abs() > 0.0);
        assert_eq!(p.y, -q.y);
    }

    #[test]
    fn test_single_value_to_many_names() {
        let env = env_after("a, b = 4;");
        assert_eq!(env.lookup("a"), Some(Value::Number(4.0)));
        assert_eq!(env.lookup("b"), Some(numbers(&[])));
    }

    #[test]
    fn test_redeclare_constant_fails() {
        let mut env = env_after("x = 1;");
        let program = parse_program("x = 2;").unwrap();
        assert_eq!(
            evaluate(&mut env, &program[0].node),
            Err(EvalError::AlreadyDefined("x".to_string()))
        );
    }
}
