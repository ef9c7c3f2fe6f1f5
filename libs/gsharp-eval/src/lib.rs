//! # GSharp Evaluator
//!
//! Runs GSharp programs: every statement is parsed and evaluated in source
//! order against one [`Environment`], and the descriptors produced by
//! `draw` are collected for the host renderer.
//!
//! ## Architecture
//!
//! ```text
//! Source → gsharp-parser (tokens, one Ast per statement)
//!        → visitor::evaluate (Environment: frames + registries + colors + rng)
//!        → Vec<ToDraw>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use gsharp_eval::interpret;
//! use gsharp_geometry::FigureKind;
//!
//! let drawings = interpret("point p(1, 2); draw p;").unwrap();
//! assert_eq!(drawings.len(), 1);
//! assert_eq!(drawings[0].kind, FigureKind::Point);
//! ```
//!
//! ## Failure
//!
//! The first failing statement aborts the run; no partial drawings are
//! returned.

pub mod builtins;
pub mod color;
pub mod context;
pub mod draw;
pub mod error;
pub mod scope;
pub mod value;
pub mod visitor;

pub use color::{Color, ColorStack};
pub use context::Environment;
pub use draw::ToDraw;
pub use error::{EvalError, InterpretError, InterpretErrorKind};
pub use value::{Figure, Sequence, Value};
pub use visitor::{eval_value, evaluate, EvalResult};

use gsharp_parser::Parser;

// =============================================================================
// OUTPUT
// =============================================================================

/// Result of a successful run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Output {
    /// Descriptors from every `draw`, in evaluation order.
    pub drawings: Vec<ToDraw>,
    /// Value of the last statement that produced one.
    pub value: Option<Value>,
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Run a program against an existing environment.
///
/// Statements are parsed one at a time and evaluated immediately, so a
/// syntax error on a later line is only reported once every earlier
/// statement has run successfully.
///
/// ## Parameters
///
/// - `source`: GSharp program text
/// - `env`: Environment mutated by the run
///
/// ## Example
///
/// ```rust
/// use gsharp_eval::{run, Environment, Value};
///
/// let mut env = Environment::with_seed(0);
/// let output = run("const a, b = {1, 2, 3}; a + 1", &mut env).unwrap();
/// assert_eq!(output.value, Some(Value::Number(2.0)));
/// assert!(output.drawings.is_empty());
/// ```
pub fn run(source: &str, env: &mut Environment) -> Result<Output, InterpretError> {
    let tokens = gsharp_parser::tokenize(source)?;
    let mut output = Output::default();

    for statement in Parser::new(&tokens) {
        let statement = statement?;
        log::debug!("line {}: {:?}", statement.line, statement.node);

        match evaluate(env, &statement.node)
            .map_err(|err| InterpretError::eval(statement.line, err))?
        {
            EvalResult::Value(value) => output.value = Some(value),
            EvalResult::Draw(items) => output.drawings.extend(items),
            EvalResult::Unit => {}
        }
    }

    Ok(output)
}

/// Interpret a program in a fresh environment.
///
/// Random placement uses an entropy-seeded source; see
/// [`interpret_with_seed`] for reproducible output.
///
/// ## Returns
///
/// The draw descriptors, or the error message prefixed with its line.
pub fn interpret(text: &str) -> Result<Vec<ToDraw>, String> {
    finish(text, Environment::new())
}

/// Interpret a program with a deterministic random source.
///
/// ## Example
///
/// ```rust
/// use gsharp_eval::interpret_with_seed;
///
/// let a = interpret_with_seed("point p; draw p;", 42).unwrap();
/// let b = interpret_with_seed("point p; draw p;", 42).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn interpret_with_seed(text: &str, seed: u64) -> Result<Vec<ToDraw>, String> {
    finish(text, Environment::with_seed(seed))
}

fn finish(text: &str, mut env: Environment) -> Result<Vec<ToDraw>, String> {
    run(text, &mut env)
        .map(|output| output.drawings)
        .map_err(|err| {
            log::warn!("{}", err);
            err.to_string()
        })
}

// =============================================================================
// TESTS
// =============================================================================
