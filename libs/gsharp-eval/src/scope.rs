//! # Lexical Scope
//!
//! Frames introduced by `let` and by function calls.
//!
//! ## Scoping Rules
//!
//! - Names resolve from the innermost frame outward
//! - Inner frames shadow outer ones
//! - A function body sees only its own parameters, never the caller's frames
//!
//! ## Example
//!
//! ```rust
//! use gsharp_eval::scope::Scope;
//! use gsharp_eval::value::Value;
//!
//! let mut scope = Scope::new();
//! scope.push();
//! scope.define("x", Value::Number(10.0));
//! assert_eq!(scope.get("x"), Some(&Value::Number(10.0)));
//! scope.pop();
//! assert_eq!(scope.get("x"), None);
//! ```

use crate::value::Value;
use std::collections::HashMap;

/// A single frame of bindings.
#[derive(Debug, Clone, Default)]
struct Frame {
    bindings: HashMap<String, Value>,
}

/// Stack of lexical frames, innermost last.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    frames: Vec<Frame>,
}

impl Scope {
    /// Create an empty scope with no frames.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope holding a single frame with the given bindings.
    ///
    /// Used for function calls.
    pub fn with_bindings(bindings: impl IntoIterator<Item = (String, Value)>) -> Self {
        Self {
            frames: vec![Frame {
                bindings: bindings.into_iter().collect(),
            }],
        }
    }

    /// Push a new frame.
    pub fn push(&mut self) {
        self.frames.push(Frame::default());
    }

    /// Pop the innermost frame.
    pub fn pop(&mut self) {
        self.frames.pop();
    }

    /// Number of frames.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Bind a name in the innermost frame, creating one if needed.
    pub fn define(&mut self, name: &str, value: Value) {
        if self.frames.is_empty() {
            self.push();
        }
        if let Some(frame) = self.frames.last_mut() {
            frame.bindings.insert(name.to_string(), value);
        }
    }

    /// Look a name up, innermost frame first.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.bindings.get(name))
    }
}

// =============================================================================
// TESTS
// =============================================================================
