//! # Expression Evaluation
//!
//! Evaluates GSharp expressions to runtime values.
//!
//! ## Responsibilities
//!
//! - Identifier lookup
//! - Binary operations (numeric, string, boolean)
//! - `if` conditionals
//! - `let` bindings
//! - User and predefined function calls
//!
//! ## Example
//!
//! ```rust
//! use gsharp_eval::context::Environment;
//! use gsharp_eval::value::Value;
//! use gsharp_eval::visitor::expressions::eval_binary;
//! use gsharp_parser::{Ast, BinaryOp};
//!
//! let mut env = Environment::with_seed(0);
//! let value = eval_binary(&mut env, &Ast::number(7.0), BinaryOp::Mod, &Ast::number(4.0)).unwrap();
//! assert_eq!(value, Value::Number(3.0));
//! ```

use super::{eval_value, evaluate, EvalResult};
use crate::builtins;
use crate::context::Environment;
use crate::error::EvalError;
use crate::scope::Scope;
use crate::value::Value;
use config::constants::approx_equal;
use gsharp_parser::{Ast, BinaryOp};

// =============================================================================
// NAMES
// =============================================================================

/// Resolve an identifier through frames and registries.
pub fn eval_identifier(env: &Environment, name: &str) -> Result<Value, EvalError> {
    env.lookup(name)
        .ok_or_else(|| EvalError::UndefinedIdentifier(name.to_string()))
}

// =============================================================================
// OPERATORS
// =============================================================================

/// Evaluate a binary operation.
///
/// ## Operand Rules
///
/// - numbers: every operator; `==`/`!=` compare within tolerance
/// - strings: `+` concatenates, `==`/`!=` compare
/// - booleans: `==`/`!=`
///
/// Any other combination is a type error.
pub fn eval_binary(
    env: &mut Environment,
    left: &Ast,
    op: BinaryOp,
    right: &Ast,
) -> Result<Value, EvalError> {
    let lhs = eval_value(env, left)?;
    let rhs = eval_value(env, right)?;

    match (&lhs, &rhs) {
        (Value::Number(a), Value::Number(b)) => Ok(numeric_op(*a, op, *b)),
        (Value::Str(a), Value::Str(b)) => match op {
            BinaryOp::Add => Ok(Value::Str(format!("{}{}", a, b))),
            BinaryOp::Eq => Ok(Value::Bool(a == b)),
            BinaryOp::NotEq => Ok(Value::Bool(a != b)),
            _ => Err(operand_error(op, &lhs, &rhs)),
        },
        (Value::Bool(a), Value::Bool(b)) => match op {
            BinaryOp::Eq => Ok(Value::Bool(a == b)),
            BinaryOp::NotEq => Ok(Value::Bool(a != b)),
            _ => Err(operand_error(op, &lhs, &rhs)),
        },
        _ => Err(operand_error(op, &lhs, &rhs)),
    }
}

fn numeric_op(a: f64, op: BinaryOp, b: f64) -> Value {
    match op {
        BinaryOp::Add => Value::Number(a + b),
        BinaryOp::Sub => Value::Number(a - b),
        BinaryOp::Mul => Value::Number(a * b),
        BinaryOp::Div => Value::Number(a / b),
        BinaryOp::Mod => Value::Number(a % b),
        BinaryOp::Pow => Value::Number(a.powf(b)),
        BinaryOp::Lt => Value::Bool(a < b),
        BinaryOp::Gt => Value::Bool(a > b),
        BinaryOp::LtEq => Value::Bool(a <= b || approx_equal(a, b)),
        BinaryOp::GtEq => Value::Bool(a >= b || approx_equal(a, b)),
        BinaryOp::Eq => Value::Bool(approx_equal(a, b)),
        BinaryOp::NotEq => Value::Bool(!approx_equal(a, b)),
    }
}

fn operand_error(op: BinaryOp, lhs: &Value, rhs: &Value) -> EvalError {
    EvalError::TypeError(format!(
        "operator '{}' cannot be applied to {} and {}",
        op,
        lhs.type_name(),
        rhs.type_name()
    ))
}

// =============================================================================
// CONTROL FLOW
// =============================================================================

/// Evaluate `if condition then a else b`.
pub fn eval_if(
    env: &mut Environment,
    condition: &Ast,
    then_branch: &Ast,
    else_branch: &Ast,
) -> Result<EvalResult, EvalError> {
    let condition = eval_value(env, condition)?.as_bool()?;
    if condition {
        evaluate(env, then_branch)
    } else {
        evaluate(env, else_branch)
    }
}

/// Evaluate `let` with one or more bindings.
///
/// All values are evaluated in the enclosing scope before any name is bound,
/// so bindings do not see each other. The frame is popped even when the body
/// fails.
pub fn eval_let(
    env: &mut Environment,
    bindings: &[(String, Ast)],
    body: &Ast,
) -> Result<EvalResult, EvalError> {
    let values = bindings
        .iter()
        .map(|(name, value)| Ok((name.as_str(), eval_value(env, value)?)))
        .collect::<Result<Vec<_>, EvalError>>()?;

    env.scope.push();
    for (name, value) in values {
        env.scope.define(name, value);
    }
    let result = evaluate(env, body);
    env.scope.pop();
    result
}

// =============================================================================
// CALLS
// =============================================================================

/// Call a user-defined function.
///
/// The body runs in a fresh scope holding only the parameters; the caller's
/// `let` frames are not visible. Global registries stay visible.
pub fn eval_function_call(
    env: &mut Environment,
    name: &str,
    args: &[Ast],
) -> Result<EvalResult, EvalError> {
    let values = eval_args(env, args)?;
    let def = env.function(name, values.len())?;

    env.enter_call()?;
    let frame = Scope::with_bindings(def.params.iter().cloned().zip(values));
    let caller = std::mem::replace(&mut env.scope, frame);
    let result = evaluate(env, &def.body);
    env.scope = caller;
    env.exit_call();

    result
}

/// Call a predefined numeric function.
pub fn eval_predefined_call(
    env: &mut Environment,
    name: &str,
    args: &[Ast],
) -> Result<Value, EvalError> {
    let values = eval_args(env, args)?;
    builtins::call(name, &values, env.rng())
}

fn eval_args(env: &mut Environment, args: &[Ast]) -> Result<Vec<Value>, EvalError> {
    args.iter().map(|arg| eval_value(env, arg)).collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use gsharp_parser::parse_program;

    fn run(env: &mut Environment, source: &str) -> Result<Value, EvalError> {
        let mut last = Value::Undefined;
        for statement in parse_program(source).unwrap() {
            if let EvalResult::Value(value) = evaluate(env, &statement.node)? {
                last = value;
            }
        }
        Ok(last)
    }

    fn value(source: &str) -> Value {
        run(&mut Environment::with_seed(3), source).unwrap()
    }

    fn number(source: &str) -> f64 {
        value(source).as_number().unwrap()
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(number("1 + 2 * 3"), 7.0);
        assert_eq!(number("(1 + 2) * 3"), 9.0);
        assert_eq!(number("2 ^ 3 ^ 2"), 512.0);
        assert_eq!(number("10 - 4 - 3"), 3.0);
        assert_eq!(number("-7 % 3"), -1.0);
        assert_relative_eq!(number("1 / 3"), 1.0 / 3.0);
    }

    #[test]
    fn test_division_by_zero_is_infinite() {
        assert!(number("1 / 0").is_infinite());
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(value("1 < 2"), Value::Bool(true));
        assert_eq!(value("0.1 + 0.2 == 0.3"), Value::Bool(true));
        assert_eq!(value("2 >= 3"), Value::Bool(false));
        assert_eq!(value("true != false"), Value::Bool(true));
    }

    #[test]
    fn test_strings() {
        assert_eq!(value("\"ab\" + \"cd\""), Value::Str("abcd".to_string()));
        assert_eq!(value("\"a\" == \"a\""), Value::Bool(true));
        let err = run(&mut Environment::with_seed(0), "\"a\" * 2").unwrap_err();
        assert!(matches!(err, EvalError::TypeError(_)));
    }

    #[test]
    fn test_if_requires_boolean() {
        assert_eq!(number("if 1 < 2 then 10 else 20"), 10.0);
        let err = run(&mut Environment::with_seed(0), "if 1 then 2 else 3").unwrap_err();
        assert!(matches!(err, EvalError::TypeError(_)));
    }

    #[test]
    fn test_let_is_local() {
        let mut env = Environment::with_seed(0);
        assert_eq!(run(&mut env, "let x = 2 in x * x").unwrap(), Value::Number(4.0));
        assert_eq!(env.scope.depth(), 0);
        assert_eq!(
            run(&mut env, "x").unwrap_err(),
            EvalError::UndefinedIdentifier("x".to_string())
        );
    }

    #[test]
    fn test_let_bindings_are_simultaneous() {
        let mut env = Environment::with_seed(0);
        let err = run(&mut env, "let a = 1, b = a in b").unwrap_err();
        assert_eq!(err, EvalError::UndefinedIdentifier("a".to_string()));
        assert_eq!(env.scope.depth(), 0);
    }

    #[test]
    fn test_let_frame_popped_on_error() {
        let mut env = Environment::with_seed(0);
        assert!(run(&mut env, "let x = 1 in x + y").is_err());
        assert_eq!(env.scope.depth(), 0);
    }

    #[test]
    fn test_function_call() {
        assert_eq!(number("function sq(x) => x * x; sq(4)"), 16.0);
        assert_eq!(
            number("function fact(n) => if n <= 1 then 1 else n * fact(n - 1); fact(5)"),
            120.0
        );
    }

    #[test]
    fn test_function_does_not_see_caller_let() {
        let mut env = Environment::with_seed(0);
        let err = run(&mut env, "function f() => y; let y = 1 in f()").unwrap_err();
        assert_eq!(err, EvalError::UndefinedIdentifier("y".to_string()));
        assert_eq!(env.scope.depth(), 0);
    }

    #[test]
    fn test_function_sees_globals() {
        assert_eq!(number("k = 10; function f(x) => x + k; f(1)"), 11.0);
    }

    #[test]
    fn test_recursion_limit() {
        let mut env = Environment::with_seed(0);
        let err = run(&mut env, "function loop(n) => loop(n + 1); loop(0)").unwrap_err();
        assert!(matches!(err, EvalError::RecursionLimit(_)));
        assert_eq!(env.scope.depth(), 0);
        assert_eq!(run(&mut env, "loop").unwrap_err(), EvalError::UndefinedIdentifier("loop".into()));
    }

    #[test]
    fn test_recursion_below_limit_succeeds() {
        let mut env = Environment::with_seed(0);
        let source = "function down(n) => if n == 0 then 0 else 1 + down(n - 1); down(120)";
        assert_eq!(run(&mut env, source).unwrap(), Value::Number(120.0));
    }

    #[test]
    fn test_predefined_call() {
        assert_eq!(number("Sqrt(16) + Max(1, 5, 3)"), 9.0);
        let err = run(&mut Environment::with_seed(0), "Sqrt(\"x\")").unwrap_err();
        assert!(matches!(err, EvalError::TypeError(_)));
    }
}
