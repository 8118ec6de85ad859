//! Primitive scalar targets: bool, i64, u64, f64 and string

use super::invalid;
use crate::error::Result;
use crate::value::Value;

/// Fractional digits kept when rendering a float as text
const FLOAT_TEXT_PRECISION: usize = 10;

/// Coerce a value to a boolean
///
/// Numbers are tested against zero. Strings must match [`parse_bool`].
pub fn as_bool(x: &Value) -> Result<Option<bool>> {
    let result = match x {
        Value::Null => return Ok(None),
        Value::Int(i) => *i != 0,
        Value::Uint(u) => *u != 0,
        Value::Float(f) => *f != 0.0,
        Value::Bool(b) => *b,
        Value::String(s) => parse_bool(s).ok_or_else(|| invalid(x))?,
        _ => return Err(invalid(x)),
    };
    Ok(Some(result))
}

/// Coerce a value to a signed 64-bit integer
///
/// - unsigned input above `i64::MAX` wraps (two's complement reinterpretation)
/// - float input truncates toward zero, saturating at the `i64` bounds; NaN is 0
/// - strings must be base-10 literals with an optional sign
pub fn as_int(x: &Value) -> Result<Option<i64>> {
    let result = match x {
        Value::Null => return Ok(None),
        Value::Int(i) => *i,
        Value::Uint(u) => *u as i64,
        Value::Float(f) => *f as i64,
        Value::Bool(b) => i64::from(*b),
        Value::String(s) => s.parse::<i64>().map_err(|_| invalid(x))?,
        _ => return Err(invalid(x)),
    };
    Ok(Some(result))
}

/// Coerce a value to an unsigned 64-bit integer
///
/// Negative numbers are rejected rather than wrapped. Floats truncate toward
/// zero after the sign check. Strings must be base-10 literals without any
/// sign character.
pub fn as_uint(x: &Value) -> Result<Option<u64>> {
    let result = match x {
        Value::Null => return Ok(None),
        Value::Int(i) => u64::try_from(*i).map_err(|_| invalid(x))?,
        Value::Uint(u) => *u,
        Value::Float(f) => {
            if *f < 0.0 {
                return Err(invalid(x));
            }
            *f as u64
        }
        Value::Bool(b) => u64::from(*b),
        Value::String(s) => parse_unsigned(s).ok_or_else(|| invalid(x))?,
        _ => return Err(invalid(x)),
    };
    Ok(Some(result))
}

/// Coerce a value to a 64-bit float
///
/// Integers convert subject to f64 precision.
pub fn as_float(x: &Value) -> Result<Option<f64>> {
    let result = match x {
        Value::Null => return Ok(None),
        Value::Int(i) => *i as f64,
        Value::Uint(u) => *u as f64,
        Value::Float(f) => *f,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::String(s) => s.parse::<f64>().map_err(|_| invalid(x))?,
        _ => return Err(invalid(x)),
    };
    Ok(Some(result))
}

/// Coerce a value to a string
///
/// Floats are rendered with [`format_float`].
pub fn as_string(x: &Value) -> Result<Option<String>> {
    let result = match x {
        Value::Null => return Ok(None),
        Value::Int(i) => i.to_string(),
        Value::Uint(u) => u.to_string(),
        Value::Float(f) => format_float(*f),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        _ => return Err(invalid(x)),
    };
    Ok(Some(result))
}

/// Render a float as fixed-point text
///
/// Ten fractional digits, then trailing zeros and a trailing decimal point
/// are stripped: `100.0` renders as `100`, `56.0001` as `56.0001`.
/// Non-finite values render as `NaN`, `+Inf` and `-Inf`.
pub fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f.is_sign_positive() { "+Inf" } else { "-Inf" }.to_string();
    }
    let fixed = format!("{:.*}", FLOAT_TEXT_PRECISION, f);
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Parse the strict textual boolean grammar
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Parse a base-10 unsigned literal, rejecting an explicit `+`
fn parse_unsigned(s: &str) -> Option<u64> {
    if s.starts_with('+') {
        return None;
    }
    s.parse::<u64>().ok()
}
