//! # Predefined Functions
//!
//! The fixed table of numeric functions.
//!
//! | Function | Arguments |
//! |----------|-----------|
//! | `Sin Cos Tan Sqrt Abs Floor Ceiling Round Truncate Log10 Exp Fact` | 1 |
//! | `Pow` | 2 |
//! | `Log` | 1 (natural) or 2 (with base) |
//! | `Rand` | 0, 1 (max) or 2 (min, max) |
//! | `Min Max Sum Average Median Mode Range` | 1 or more, sequences flattened |
//!
//! Angles are in radians.

use crate::error::EvalError;
use crate::value::Value;
use config::constants::approx_equal;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Call a predefined function.
///
/// ## Parameters
///
/// - `name`: Function name, e.g. `Sqrt`
/// - `args`: Evaluated arguments
/// - `rng`: Random source for `Rand`
///
/// ## Example
///
/// ```rust
/// use gsharp_eval::builtins::call;
/// use gsharp_eval::value::Value;
/// use rand::SeedableRng;
///
/// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
/// let result = call("Pow", &[Value::Number(2.0), Value::Number(10.0)], &mut rng).unwrap();
/// assert_eq!(result, Value::Number(1024.0));
/// ```
pub fn call(name: &str, args: &[Value], rng: &mut ChaCha8Rng) -> Result<Value, EvalError> {
    let result = match name {
        "Sin" => unary(name, args, f64::sin)?,
        "Cos" => unary(name, args, f64::cos)?,
        "Tan" => unary(name, args, f64::tan)?,
        "Sqrt" => unary(name, args, f64::sqrt)?,
        "Abs" => unary(name, args, f64::abs)?,
        "Floor" => unary(name, args, f64::floor)?,
        "Ceiling" => unary(name, args, f64::ceil)?,
        "Round" => unary(name, args, f64::round_ties_even)?,
        "Truncate" => unary(name, args, f64::trunc)?,
        "Log10" => unary(name, args, f64::log10)?,
        "Exp" => unary(name, args, f64::exp)?,
        "Fact" => factorial(numbers(name, args, "1", 1..=1)?[0])?,
        "Pow" => {
            let n = numbers(name, args, "2", 2..=2)?;
            n[0].powf(n[1])
        }
        "Log" => {
            let n = numbers(name, args, "1 or 2", 1..=2)?;
            match n.get(1) {
                Some(base) => n[0].ln() / base.ln(),
                None => n[0].ln(),
            }
        }
        "Rand" => random(rng, &numbers(name, args, "0 to 2", 0..=2)?)?,
        "Min" => flatten(name, args)?.into_iter().fold(f64::INFINITY, f64::min),
        "Max" => flatten(name, args)?.into_iter().fold(f64::NEG_INFINITY, f64::max),
        "Sum" => flatten(name, args)?.into_iter().sum(),
        "Average" => {
            let values = flatten(name, args)?;
            values.iter().sum::<f64>() / values.len() as f64
        }
        "Median" => median(flatten(name, args)?),
        "Mode" => mode(&flatten(name, args)?),
        "Range" => {
            let values = flatten(name, args)?;
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            max - min
        }
        _ => return Err(EvalError::UnknownFunction(name.to_string())),
    };

    Ok(Value::Number(result))
}

// =============================================================================
// ARGUMENT HANDLING
// =============================================================================

fn unary(name: &str, args: &[Value], f: fn(f64) -> f64) -> Result<f64, EvalError> {
    let n = numbers(name, args, "1", 1..=1)?;
    Ok(f(n[0]))
}

/// Coerce a fixed-arity argument list to numbers.
fn numbers(
    name: &str,
    args: &[Value],
    expected: &str,
    arity: std::ops::RangeInclusive<usize>,
) -> Result<Vec<f64>, EvalError> {
    if !arity.contains(&args.len()) {
        return Err(EvalError::ArityMismatch {
            name: name.to_string(),
            expected: expected.to_string(),
            found: args.len(),
        });
    }
    args.iter().map(Value::as_number).collect()
}

/// Coerce a variadic argument list to numbers, flattening sequences.
fn flatten(name: &str, args: &[Value]) -> Result<Vec<f64>, EvalError> {
    if args.is_empty() {
        return Err(EvalError::ArityMismatch {
            name: name.to_string(),
            expected: "at least 1".to_string(),
            found: 0,
        });
    }

    let mut values = Vec::new();
    for arg in args {
        match arg {
            Value::Sequence(seq) => {
                for item in seq.elements(name)? {
                    values.push(item.as_number()?);
                }
            }
            other => values.push(other.as_number()?),
        }
    }

    if values.is_empty() {
        return Err(EvalError::InvalidArgument(format!(
            "{} needs at least one number",
            name
        )));
    }
    Ok(values)
}

// =============================================================================
// FUNCTIONS
// =============================================================================

/// Largest `n` whose factorial is finite in `f64`.
const MAX_FACTORIAL: f64 = 170.0;

fn factorial(n: f64) -> Result<f64, EvalError> {
    let n = n.trunc();
    if n.is_nan() || n < 0.0 {
        return Err(EvalError::InvalidArgument(format!(
            "factorial needs a non-negative number, got {}",
            n
        )));
    }
    if n > MAX_FACTORIAL {
        return Ok(f64::INFINITY);
    }
    Ok((1..=n as u64).map(|k| k as f64).product())
}

fn random(rng: &mut ChaCha8Rng, bounds: &[f64]) -> Result<f64, EvalError> {
    let (min, max) = match *bounds {
        [] => (0.0, 1.0),
        [max] => (0.0, max),
        [min, max, ..] => (min, max),
    };
    if !(min < max && (max - min).is_finite()) {
        return Err(EvalError::InvalidArgument(format!(
            "empty random range [{}, {})",
            min, max
        )));
    }
    Ok(rng.gen_range(min..max))
}

/// Upper middle element of the sorted values.
fn median(mut values: Vec<f64>) -> f64 {
    values.sort_by(|a, b| a.total_cmp(b));
    values[values.len() / 2]
}

/// Most frequent value; ties go to the first to appear.
fn mode(values: &[f64]) -> f64 {
    let mut best = values[0];
    let mut best_count = 0;
    for &candidate in values {
        let count = values.iter().filter(|v| approx_equal(**v, candidate)).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}

// =============================================================================
// TESTS
// =============================================================================
