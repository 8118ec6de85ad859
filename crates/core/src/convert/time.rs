//! Time instant and epoch-count timestamp targets
//!
//! ## Precision
//!
//! Every target stores a full-precision `DateTime<FixedOffset>`. A
//! [`TimeUnit`] only decides how a bare number is interpreted on the way in
//! and rendered on the way out:
//!
//! | Unit | Count of | Range |
//! |------|----------|-------|
//! | `Seconds` | seconds since 1970-01-01T00:00:00Z | chrono's full range |
//! | `Milliseconds` | milliseconds since the epoch | chrono's full range |
//! | `Nanoseconds` | nanoseconds since the epoch | 1677-09-21 to 2262-04-11 |
//!
//! Counts are non-negative: an instant before the epoch can only enter as a
//! `Value::Time` or an RFC 3339 string.

use super::invalid;
use crate::error::Result;
use crate::value::Value;
use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone, Utc};

/// External granularity of an epoch-count timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Whole seconds
    Seconds,
    /// Milliseconds
    Milliseconds,
    /// Nanoseconds
    Nanoseconds,
}

impl TimeUnit {
    /// Convert a count of this unit since the epoch into an instant
    ///
    /// Returns `None` when the count is outside chrono's representable range.
    pub fn instant(self, count: i64) -> Option<DateTime<Utc>> {
        match self {
            TimeUnit::Seconds => DateTime::from_timestamp(count, 0),
            TimeUnit::Milliseconds => DateTime::from_timestamp_millis(count),
            TimeUnit::Nanoseconds => Some(DateTime::from_timestamp_nanos(count)),
        }
    }

    /// Count of this unit between the epoch and `t`, rounding toward negative infinity
    ///
    /// Returns `None` only for nanoseconds outside the `i64` range.
    pub fn count<Tz: TimeZone>(self, t: &DateTime<Tz>) -> Option<i64> {
        match self {
            TimeUnit::Seconds => Some(t.timestamp()),
            TimeUnit::Milliseconds => Some(t.timestamp_millis()),
            TimeUnit::Nanoseconds => t.timestamp_nanos_opt(),
        }
    }
}

/// Coerce a value to a time instant
///
/// Only `Value::Time` is accepted. Numbers and strings are rejected; any
/// instant, including the epoch or chrono's minimum, is valid.
pub fn as_time(x: &Value) -> Result<Option<DateTime<FixedOffset>>> {
    match x {
        Value::Null => Ok(None),
        Value::Time(t) => Ok(Some(*t)),
        _ => Err(invalid(x)),
    }
}

/// Coerce a value to a time instant, reading numbers as counts of `unit`
///
/// - `Value::Time` is accepted verbatim
/// - integers and floats are a count since the epoch; floats truncate toward
///   zero, and negative or out-of-range counts are rejected
/// - strings are parsed as RFC 3339, never as a numeric count
/// - booleans are rejected
pub fn as_timestamp(x: &Value, unit: TimeUnit) -> Result<Option<DateTime<FixedOffset>>> {
    let count = match x {
        Value::Null => return Ok(None),
        Value::Time(t) => return Ok(Some(*t)),
        Value::String(s) => return parse_rfc3339(s).map(Some).ok_or_else(|| invalid(x)),
        Value::Int(i) => *i,
        Value::Uint(u) => i64::try_from(*u).map_err(|_| invalid(x))?,
        Value::Float(f) => float_count(*f).ok_or_else(|| invalid(x))?,
        _ => return Err(invalid(x)),
    };
    if count < 0 {
        return Err(invalid(x));
    }
    unit.instant(count)
        .map(|t| Some(t.fixed_offset()))
        .ok_or_else(|| invalid(x))
}

/// Coerce a value to a time instant, reading numbers as seconds
pub fn as_timestamp_seconds(x: &Value) -> Result<Option<DateTime<FixedOffset>>> {
    as_timestamp(x, TimeUnit::Seconds)
}

/// Coerce a value to a time instant, reading numbers as milliseconds
pub fn as_timestamp_millis(x: &Value) -> Result<Option<DateTime<FixedOffset>>> {
    as_timestamp(x, TimeUnit::Milliseconds)
}

/// Coerce a value to a time instant, reading numbers as nanoseconds
pub fn as_timestamp_nanos(x: &Value) -> Result<Option<DateTime<FixedOffset>>> {
    as_timestamp(x, TimeUnit::Nanoseconds)
}

/// Parse RFC 3339 date-time text with optional fractional seconds
pub fn parse_rfc3339(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s).ok()
}

/// Render an instant as RFC 3339
///
/// UTC renders as `Z`; fractional seconds appear only when non-zero.
pub fn format_rfc3339<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    t.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Truncate a finite float inside the `i64` range
fn float_count(f: f64) -> Option<i64> {
    let truncated = f.trunc();
    if truncated.is_finite() && truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
        Some(truncated as i64)
    } else {
        None
    }
}
