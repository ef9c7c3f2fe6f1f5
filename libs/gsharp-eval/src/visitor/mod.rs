//! # Evaluation Visitors
//!
//! Tree-walking evaluation of GSharp syntax trees.
//!
//! ## Module Structure
//!
//! - `expressions` - Literals, names, operators, conditionals, `let`, calls
//! - `declarations` - `const`, destructuring assignment, function declarations
//! - `sequences` - Sequence literals
//! - `figures` - Figure construction, `intersect`, `measure`
//! - `draw` - `draw` and the color stack
//!
//! ## Example
//!
//! ```rust
//! use gsharp_eval::context::Environment;
//! use gsharp_eval::value::Value;
//! use gsharp_eval::visitor::{evaluate, EvalResult};
//! use gsharp_parser::parse_program;
//!
//! let mut env = Environment::with_seed(1);
//! let program = parse_program("2 ^ 3 + 1").unwrap();
//! let result = evaluate(&mut env, &program[0].node).unwrap();
//! assert_eq!(result, EvalResult::Value(Value::Number(9.0)));
//! ```

pub mod declarations;
pub mod draw;
pub mod expressions;
pub mod figures;
pub mod sequences;

use crate::context::Environment;
use crate::draw::ToDraw;
use crate::error::EvalError;
use crate::value::Value;
use gsharp_parser::{Ast, Literal};

// =============================================================================
// EVALUATION RESULT
// =============================================================================

/// Outcome of evaluating one node.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalResult {
    /// A scalar, figure or sequence.
    Value(Value),
    /// Descriptors emitted by `draw`.
    Draw(Vec<ToDraw>),
    /// Registry mutation with nothing to hand back.
    Unit,
}

impl EvalResult {
    /// Name of the result's shape, for error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Value(value) => value.type_name(),
            Self::Draw(_) => "draw",
            Self::Unit => "declaration",
        }
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Evaluate a node against the environment.
///
/// This is the single dispatch point: every [`Ast`] variant is handled here.
///
/// ## Parameters
///
/// - `env`: Execution context of the current run
/// - `ast`: Node to evaluate
pub fn evaluate(env: &mut Environment, ast: &Ast) -> Result<EvalResult, EvalError> {
    match ast {
        Ast::Value(literal) => Ok(EvalResult::Value(literal_value(literal))),
        Ast::Identifier(name) => expressions::eval_identifier(env, name).map(EvalResult::Value),
        Ast::Binary { left, op, right } => {
            expressions::eval_binary(env, left, *op, right).map(EvalResult::Value)
        }
        Ast::If {
            condition,
            then_branch,
            else_branch,
        } => expressions::eval_if(env, condition, then_branch, else_branch),
        Ast::Let { name, value, body } => {
            let bindings = [(name.clone(), value.as_ref().clone())];
            expressions::eval_let(env, &bindings, body)
        }
        Ast::LetMulti { bindings, body } => expressions::eval_let(env, bindings, body),
        Ast::ConstDecl { names, value } | Ast::MultiAssign { names, value } => {
            declarations::eval_assignment(env, names, value)
        }
        Ast::FunctionDecl { name, params, body } => {
            declarations::eval_function_decl(env, name, params, body)
        }
        Ast::FunctionCall { name, args } => expressions::eval_function_call(env, name, args),
        Ast::PredefinedCall { name, args } => {
            expressions::eval_predefined_call(env, name, args).map(EvalResult::Value)
        }
        Ast::Measure { from, to } => figures::eval_measure(env, from, to).map(EvalResult::Value),
        Ast::Sequence(literal) => sequences::eval_sequence(env, literal),
        Ast::Intersect { first, second } => {
            figures::eval_intersect(env, first, second).map(EvalResult::Value)
        }
        Ast::Draw { target, label } => {
            draw::eval_draw(env, target, label.as_deref()).map(EvalResult::Draw)
        }
        Ast::ColorPush(name) => {
            env.push_color(name)?;
            Ok(EvalResult::Unit)
        }
        Ast::ColorPop => {
            env.pop_color();
            Ok(EvalResult::Unit)
        }
        Ast::Figure(decl) => figures::eval_figure(env, decl).map(|f| EvalResult::Value(f.into())),
        Ast::End => Ok(EvalResult::Unit),
    }
}

/// Evaluate a node that must produce a value.
///
/// Draws and declarations in value position are type errors.
pub fn eval_value(env: &mut Environment, ast: &Ast) -> Result<Value, EvalError> {
    match evaluate(env, ast)? {
        EvalResult::Value(value) => Ok(value),
        other => Err(EvalError::expected("value", other.describe())),
    }
}

fn literal_value(literal: &Literal) -> Value {
    match literal {
        Literal::Number(n) => Value::Number(*n),
        Literal::Str(s) => Value::Str(s.clone()),
        Literal::Bool(b) => Value::Bool(*b),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use gsharp_parser::parse_program;

    fn eval(source: &str) -> Result<EvalResult, EvalError> {
        let mut env = Environment::with_seed(7);
        let mut last = EvalResult::Unit;
        for statement in parse_program(source).unwrap() {
            last = evaluate(&mut env, &statement.node)?;
        }
        Ok(last)
    }

    #[test]
    fn test_literals() {
        assert_eq!(eval("\"hi\"").unwrap(), EvalResult::Value(Value::Str("hi".into())));
        assert_eq!(eval("true").unwrap(), EvalResult::Value(Value::Bool(true)));
    }

    #[test]
    fn test_declaration_is_unit() {
        assert_eq!(eval("x = 2").unwrap(), EvalResult::Unit);
        assert_eq!(eval("color red").unwrap(), EvalResult::Unit);
        assert_eq!(eval("function f(a) => a").unwrap(), EvalResult::Unit);
    }

    #[test]
    fn test_draw_in_value_position() {
        let err = eval("1 + draw point(1, 1)").unwrap_err();
        assert!(matches!(err, EvalError::TypeError(_)));
    }

    #[test]
    fn test_draw_result() {
        match eval("draw point p(1, 2)").unwrap() {
            EvalResult::Draw(items) => assert_eq!(items.len(), 1),
            other => panic!("expected draw, got {:?}", other),
        }
    }
}
