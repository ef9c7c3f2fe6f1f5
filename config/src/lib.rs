//! # Config Crate
//!
//! Centralized configuration constants for the GSharp interpreter.
//! All magic numbers and fixed tables (tolerances, random placement ranges,
//! evaluation limits, the pre-seeded constant table and the predefined
//! function names) are defined here so the parser and evaluator agree.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, RANDOM_COORD_MIN, RANDOM_COORD_MAX};
//!
//! let value: f64 = 1e-12;
//! assert!(value.abs() < EPSILON);
//! assert!(RANDOM_COORD_MIN < RANDOM_COORD_MAX);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Runtime State**: Only `const` items and pure helpers

pub mod constants;
