//! # Environment
//!
//! Mutable state of one interpretation run.
//!
//! ## Responsibilities
//!
//! - Lexical frames for `let` bindings and function parameters
//! - Global registries: constants, user functions, sequences, named figures
//! - The color stack and the random source
//! - Call depth accounting
//!
//! ## Name Resolution
//!
//! Lexical frames (innermost first), then named figures, then constants,
//! then sequences. The first match wins.
//!
//! ## Example
//!
//! ```rust
//! use gsharp_eval::context::Environment;
//! use gsharp_eval::value::Value;
//!
//! let mut env = Environment::with_seed(42);
//! env.declare("x", Value::Number(2.0)).unwrap();
//! assert_eq!(env.lookup("x"), Some(Value::Number(2.0)));
//! assert!(env.lookup("PI").is_some());
//! ```

use crate::color::{Color, ColorStack};
use crate::error::EvalError;
use crate::scope::Scope;
use crate::value::{Figure, Sequence, Value};
use config::constants::{
    is_predefined_function, MAX_CALL_DEPTH, PREDEFINED_CONSTANTS,
};
use gsharp_parser::Ast;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

/// Name that discards whatever is assigned to it.
pub const DISCARD: &str = "_";

// =============================================================================
// USER-DEFINED FUNCTIONS
// =============================================================================

/// A user-defined function.
///
/// ```text
/// function double(x) => x * 2
/// // Stored as: FunctionDef { params: [x], body: x * 2 }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// Parameter names.
    pub params: Vec<String>,
    /// Body expression.
    pub body: Ast,
}

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Execution context shared by every statement of one run.
pub struct Environment {
    /// Lexical frames.
    pub scope: Scope,
    /// Declared and predefined constants.
    constants: HashMap<String, Value>,
    /// User functions keyed by name and arity.
    functions: HashMap<(String, usize), FunctionDef>,
    /// Named sequences.
    sequences: HashMap<String, Sequence>,
    /// Named figures, including cached random placements.
    figures: HashMap<String, Figure>,
    /// Active colors.
    colors: ColorStack,
    /// Random source for placement and `Rand`.
    rng: ChaCha8Rng,
    /// Nesting depth of user function calls.
    depth: usize,
}

impl Environment {
    /// Fresh environment with an entropy-seeded random source.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Fresh environment with a deterministic random source.
    pub fn with_seed(seed: u64) -> Self {
        let constants = PREDEFINED_CONSTANTS
            .iter()
            .map(|(name, value)| (name.to_string(), Value::Number(*value)))
            .collect();

        Self {
            scope: Scope::new(),
            constants,
            functions: HashMap::new(),
            sequences: HashMap::new(),
            figures: HashMap::new(),
            colors: ColorStack::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            depth: 0,
        }
    }

    // =========================================================================
    // LOOKUP
    // =========================================================================

    /// Resolve a name.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.scope.get(name) {
            return Some(value.clone());
        }
        if let Some(figure) = self.figures.get(name) {
            return Some(Value::Figure(figure.clone()));
        }
        if let Some(value) = self.constants.get(name) {
            return Some(value.clone());
        }
        self.sequences
            .get(name)
            .map(|seq| Value::Sequence(seq.clone()))
    }

    /// Named figure from the registry.
    pub fn figure(&self, name: &str) -> Option<&Figure> {
        self.figures.get(name)
    }

    // =========================================================================
    // DECLARATIONS
    // =========================================================================

    /// Declare a global name, routed by the value's type.
    ///
    /// - figures go to the figure registry and replace earlier figures
    /// - sequences go to the sequence registry
    /// - everything else goes to the constant registry
    ///
    /// `_` discards the value. Constants and sequences cannot be redeclared.
    pub fn declare(&mut self, name: &str, value: Value) -> Result<(), EvalError> {
        if name == DISCARD {
            return Ok(());
        }

        match value {
            Value::Figure(figure) => {
                self.register_figure(name, figure);
                Ok(())
            }
            Value::Sequence(seq) => {
                self.check_free(name)?;
                log::trace!("sequence {} declared", name);
                self.sequences.insert(name.to_string(), seq);
                Ok(())
            }
            other => {
                self.check_free(name)?;
                log::trace!("constant {} = {}", name, other);
                self.constants.insert(name.to_string(), other);
                Ok(())
            }
        }
    }

    fn check_free(&self, name: &str) -> Result<(), EvalError> {
        if self.constants.contains_key(name) || self.sequences.contains_key(name) {
            Err(EvalError::AlreadyDefined(name.to_string()))
        } else {
            Ok(())
        }
    }

    /// Register a figure under `name`, replacing any earlier one.
    pub fn register_figure(&mut self, name: &str, mut figure: Figure) {
        figure.name = Some(name.to_string());
        if self.figures.insert(name.to_string(), figure).is_some() {
            log::debug!("figure {} replaced", name);
        }
    }

    /// Register a user function.
    pub fn declare_function(
        &mut self,
        name: &str,
        params: Vec<String>,
        body: Ast,
    ) -> Result<(), EvalError> {
        if is_predefined_function(name) {
            return Err(EvalError::AlreadyDefined(name.to_string()));
        }

        let key = (name.to_string(), params.len());
        if self.functions.contains_key(&key) {
            log::warn!("function {}/{} redeclared", name, params.len());
        }
        self.functions.insert(key, FunctionDef { params, body });
        Ok(())
    }

    /// Find a user function by name and argument count.
    pub fn function(&self, name: &str, arity: usize) -> Result<FunctionDef, EvalError> {
        if let Some(def) = self.functions.get(&(name.to_string(), arity)) {
            return Ok(def.clone());
        }

        let mut arities: Vec<usize> = self
            .functions
            .keys()
            .filter(|(n, _)| n == name)
            .map(|(_, a)| *a)
            .collect();
        if arities.is_empty() {
            return Err(EvalError::UnknownFunction(name.to_string()));
        }

        arities.sort_unstable();
        let expected: Vec<String> = arities.iter().map(|a| a.to_string()).collect();
        Err(EvalError::ArityMismatch {
            name: name.to_string(),
            expected: expected.join(" or "),
            found: arity,
        })
    }

    // =========================================================================
    // CALLS
    // =========================================================================

    /// Enter a user function call.
    pub fn enter_call(&mut self) -> Result<(), EvalError> {
        if self.depth >= MAX_CALL_DEPTH {
            return Err(EvalError::RecursionLimit(MAX_CALL_DEPTH));
        }
        self.depth += 1;
        Ok(())
    }

    /// Leave a user function call.
    pub fn exit_call(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    // =========================================================================
    // COLORS AND RANDOMNESS
    // =========================================================================

    /// Push a color by name.
    pub fn push_color(&mut self, name: &str) -> Result<(), EvalError> {
        let color = Color::from_name(name)?;
        self.colors.push(color);
        Ok(())
    }

    /// Restore the previous color.
    pub fn pop_color(&mut self) {
        self.colors.pop();
    }

    /// Color drawings currently use.
    pub fn current_color(&self) -> Color {
        self.colors.current()
    }

    /// The random source.
    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
