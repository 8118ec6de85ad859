//! Coercion engine
//!
//! One pure function per target type. Every function accepts any [`Value`]
//! and returns exactly one of three outcomes:
//!
//! | Input | Result |
//! |-------|--------|
//! | `Value::Null` | `Ok(None)`, absence is not an error |
//! | coercible shape | `Ok(Some(v))` |
//! | anything else | `Err(Error::InvalidValue { type_name })` |
//!
//! The functions never panic and never allocate beyond the returned payload.
//!
//! ## Module Structure
//!
//! - `scalar`: bool, i64, u64, f64 and string targets
//! - `time`: time instants and the three epoch-count timestamp encodings
//! - `url`: URL references, absolute or relative (feature `url`)

mod scalar;
mod time;
#[cfg(feature = "url")]
mod url;

pub use self::scalar::{as_bool, as_float, as_int, as_string, as_uint, format_float, parse_bool};
pub use self::time::{
    as_time, as_timestamp, as_timestamp_millis, as_timestamp_nanos, as_timestamp_seconds,
    format_rfc3339, parse_rfc3339, TimeUnit,
};
#[cfg(feature = "url")]
pub use self::url::{as_url, UrlRef};

use crate::error::Error;
use crate::value::Value;

/// Rejection for an input shape the target type does not accept
#[inline]
pub(crate) fn invalid(x: &Value) -> Error {
    Error::invalid(x.type_name())
}
