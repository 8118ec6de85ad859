//! Core types for generic nullable values
//!
//! This crate defines the pieces every wrapper type is built from:
//! - Value: closed sum type of every accepted input shape
//! - Error: the coercion error taxonomy and the JSON boundary errors
//! - convert: the coercion engine, one `as_*` function per target type
//! - json: JSON text bridging and shared token rules
//! - traits: persistence hooks (Valuer, Scanner)
//!
//! # Features
//!
//! - `url` (default): `Value::Url`, [`UrlRef`] and [`as_url`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod convert;
pub mod error;
pub mod json;
pub mod traits;
pub mod value;

pub use convert::{
    as_bool, as_float, as_int, as_string, as_time, as_timestamp, as_timestamp_millis,
    as_timestamp_nanos, as_timestamp_seconds, as_uint, format_float, format_rfc3339, parse_bool,
    parse_rfc3339, TimeUnit,
};
#[cfg(feature = "url")]
pub use convert::{as_url, UrlRef};
pub use error::{Error, Result};
pub use traits::{Scanner, Valuer};
pub use value::Value;
