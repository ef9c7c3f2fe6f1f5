//! # Configuration Constants
//!
//! Centralized constants for the GSharp interpreter.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Random placement**: Ranges for figures declared without coordinates
//! - **Limits**: Safety bounds for recursion and sequence expansion
//! - **Language tables**: Pre-seeded constants, predefined functions, colors

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons in the intersection engine.
///
/// Two points closer than this are considered coincident, and a determinant
/// or discriminant smaller than this in magnitude is treated as zero.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-12));
/// ```
pub const EPSILON: f64 = 1e-9;

// =============================================================================
// RANDOM PLACEMENT
// =============================================================================

/// Lower bound (inclusive) for randomly generated coordinates.
pub const RANDOM_COORD_MIN: f64 = 0.0;

/// Upper bound (exclusive) for randomly generated coordinates.
///
/// Matches the canvas-sized square the drawing shell maps onto.
pub const RANDOM_COORD_MAX: f64 = 100.0;

/// Lower bound (inclusive) for randomly generated radii.
pub const RANDOM_RADIUS_MIN: f64 = 5.0;

/// Upper bound (exclusive) for randomly generated radii.
pub const RANDOM_RADIUS_MAX: f64 = 50.0;

// =============================================================================
// LIMITS
// =============================================================================

/// Maximum nesting depth of user function calls.
///
/// Deeper recursion aborts the run with a recursion-limit error instead of
/// overflowing the native stack.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_CALL_DEPTH;
///
/// let depth = 10;
/// assert!(depth < MAX_CALL_DEPTH);
/// ```
pub const MAX_CALL_DEPTH: usize = 128;

/// Maximum nesting depth of a single expression.
///
/// Parentheses, unary minus, `^` chains and nested `let`/`if` bodies each
/// add one level.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Maximum number of elements a bounded `{a ... n}` sequence may expand to.
pub const MAX_SEQUENCE_LEN: usize = 100_000;

// =============================================================================
// LANGUAGE TABLES
// =============================================================================

/// Name of the color active at the bottom of every fresh color stack.
pub const DEFAULT_COLOR: &str = "black";

/// Global constants available in every fresh environment.
///
/// # Example
///
/// ```rust
/// use config::constants::PREDEFINED_CONSTANTS;
///
/// let pi = PREDEFINED_CONSTANTS.iter().find(|(name, _)| *name == "PI");
/// assert_eq!(pi.map(|(_, v)| *v), Some(std::f64::consts::PI));
/// ```
pub const PREDEFINED_CONSTANTS: &[(&str, f64)] = &[
    ("PI", std::f64::consts::PI),
    ("E", std::f64::consts::E),
    ("G", 6.67430),
    ("C", 299_792_458.0),
    ("GAMMA", 0.577_215_664_901_532_9),
    ("PHI", 1.618_033_988_749_895),
    ("K", 1.380_649e-23),
    ("NA", 6.022_140_76e23),
    ("R", 8.314_462_618_153_24),
    ("SIGMA", 5.670_374_419e-8),
    ("GOLDENRATIO", 1.618_033_988_749_895),
    ("AVOGADRO", 6.022_140_76e23),
];

/// Names of the built-in numeric functions.
///
/// The parser uses this table to classify `Name(args)` as a predefined call;
/// the evaluator provides one implementation per entry.
pub const PREDEFINED_FUNCTIONS: &[&str] = &[
    "Sin", "Cos", "Tan", "Sqrt", "Pow", "Abs", "Floor", "Ceiling", "Round", "Truncate", "Log",
    "Log10", "Exp", "Min", "Max", "Sum", "Average", "Median", "Mode", "Range", "Fact", "Rand",
];

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks whether `name` is one of the built-in numeric functions.
///
/// # Example
///
/// ```rust
/// use config::constants::is_predefined_function;
///
/// assert!(is_predefined_function("Sqrt"));
/// assert!(!is_predefined_function("sqrt"));
/// ```
pub fn is_predefined_function(name: &str) -> bool {
    PREDEFINED_FUNCTIONS.contains(&name)
}

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-12));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
