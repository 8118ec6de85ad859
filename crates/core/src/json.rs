//! JSON boundary helpers
//!
//! Bridges JSON text and the dynamic [`Value`] space used by the coercion
//! engine, and holds the token rules shared by every wrapper's encoder:
//!
//! | Payload | Token |
//! |---------|-------|
//! | integral float below 2^53 in magnitude | integer literal (`1`, not `1.0`) |
//! | other finite float | fixed-point decimal, never an exponent (`0.0000001`) |
//! | NaN, ±Inf | encode error |
//! | instant | quoted RFC 3339 |
//!
//! Decoding never guesses types: a JSON node becomes the closest [`Value`]
//! variant and the target's coercion decides whether it is acceptable.

use crate::convert::{format_rfc3339, parse_rfc3339};
use crate::error::{Error, Result};
use crate::value::Value;
use chrono::{DateTime, FixedOffset};
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

/// Largest magnitude at which every integer is exactly representable in `f64`
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0; // 2^53

/// Parse JSON text into a dynamic value
///
/// Empty input is no document at all and yields `Ok(None)`; a literal `null`
/// yields `Ok(Some(Value::Null))`.
pub fn parse_document(text: &[u8]) -> Result<Option<Value>> {
    if text.is_empty() {
        return Ok(None);
    }
    let value = serde_json::from_slice::<Value>(text)?;
    Ok(Some(value))
}

/// Turn an RFC 3339 string node into a `Value::Time`
///
/// Every other node passes through unchanged, including strings that are
/// not date-times; the coercion that follows rejects those.
pub fn promote_time(node: Value) -> Value {
    match node {
        Value::String(s) => match parse_rfc3339(&s) {
            Some(t) => Value::Time(t),
            None => Value::String(s),
        },
        other => other,
    }
}

/// Serialize a float with the integer-when-exact rule
///
/// Every other finite float is written as a raw fixed-point number token
/// holding the shortest digits that round-trip. JSON serializers emit the
/// token verbatim.
pub fn serialize_float<S: Serializer>(f: f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    if !f.is_finite() {
        return Err(serde::ser::Error::custom(format!(
            "{} has no JSON representation",
            crate::convert::format_float(f)
        )));
    }
    if f.fract() == 0.0 && f.abs() < MAX_SAFE_INTEGER {
        return serializer.serialize_i64(f as i64);
    }
    let token = RawValue::from_string(fixed_point(f))
        .map_err(<S::Error as serde::ser::Error>::custom)?;
    token.serialize(serializer)
}

/// Fixed-point text of a finite float: no exponent, no trailing zeros
///
/// `f64`'s `Display` already prints the shortest round-trip digits in
/// positional form (`1e20` is `100000000000000000000`).
pub fn fixed_point(f: f64) -> String {
    format!("{}", f)
}

/// Serialize an instant as an RFC 3339 string
pub fn serialize_time<S: Serializer>(
    t: &DateTime<FixedOffset>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_rfc3339(t))
}

/// Render a serializable payload as JSON text
///
/// Serializer failures surface as [`Error::Encode`].
pub fn to_text<T: serde::Serialize + ?Sized>(payload: &T) -> Result<String> {
    serde_json::to_string(payload).map_err(|e| Error::encode(e.to_string()))
}
