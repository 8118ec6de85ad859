//! Time instant and epoch-count timestamp payloads
//!
//! ## Representations
//!
//! | Wrapper | JSON token | Stored as |
//! |---------|------------|-----------|
//! | `Time` | quoted RFC 3339 | `Value::Time` |
//! | `Timestamp` | integer seconds | `Value::Time` |
//! | `TimestampMillis` | integer milliseconds | `Value::Int` |
//! | `TimestampNanos` | integer nanoseconds | `Value::Int` |
//!
//! Every timestamp keeps the full-precision instant; the unit only governs
//! how counts are read and written.

use crate::nullable::{Nullable, Scalar};
use chrono::{DateTime, FixedOffset, TimeZone};
use generic_core::json::{promote_time, serialize_time};
use generic_core::{as_time, as_timestamp, Error, Result, TimeUnit, Value};
use serde::ser::Error as _;
use serde::Serializer;
use std::fmt;
use std::marker::PhantomData;

impl Scalar for DateTime<FixedOffset> {
    fn coerce(x: &Value) -> Result<Option<Self>> {
        as_time(x)
    }

    fn store(&self) -> Result<Value> {
        Ok(Value::Time(*self))
    }

    fn encode<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_time(self, serializer)
    }

    fn from_node(node: Value) -> Value {
        promote_time(node)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Granularity marker for [`Epoch`]
pub trait Unit: sealed::Sealed {
    /// Unit used to read and write counts
    const UNIT: TimeUnit;

    /// Storable representation of an instant
    ///
    /// Defaults to the integer count.
    fn store(instant: &DateTime<FixedOffset>) -> Result<Value> {
        Self::UNIT
            .count(instant)
            .map(Value::Int)
            .ok_or_else(|| Error::encode("instant outside the representable count range"))
    }
}

/// Whole seconds since the epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Seconds;

/// Milliseconds since the epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Millis;

/// Nanoseconds since the epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nanos;

impl sealed::Sealed for Seconds {}
impl sealed::Sealed for Millis {}
impl sealed::Sealed for Nanos {}

impl Unit for Seconds {
    const UNIT: TimeUnit = TimeUnit::Seconds;

    fn store(instant: &DateTime<FixedOffset>) -> Result<Value> {
        Ok(Value::Time(*instant))
    }
}

impl Unit for Millis {
    const UNIT: TimeUnit = TimeUnit::Milliseconds;
}

impl Unit for Nanos {
    const UNIT: TimeUnit = TimeUnit::Nanoseconds;
}

/// An instant exchanged as a count of `U` since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Epoch<U> {
    instant: DateTime<FixedOffset>,
    unit: PhantomData<U>,
}

impl<U: Unit> Epoch<U> {
    /// Wrap an instant
    pub fn new<Tz: TimeZone>(instant: DateTime<Tz>) -> Self {
        Epoch {
            instant: instant.fixed_offset(),
            unit: PhantomData,
        }
    }

    /// Full-precision instant
    #[inline]
    pub fn instant(&self) -> DateTime<FixedOffset> {
        self.instant
    }

    /// Count of `U` since the epoch
    ///
    /// `None` only for nanoseconds outside the `i64` range.
    pub fn count(&self) -> Option<i64> {
        U::UNIT.count(&self.instant)
    }
}

impl<U: Unit> Scalar for Epoch<U> {
    fn coerce(x: &Value) -> Result<Option<Self>> {
        Ok(as_timestamp(x, U::UNIT)?.map(Epoch::<U>::new))
    }

    fn store(&self) -> Result<Value> {
        U::store(&self.instant)
    }

    fn encode<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.count() {
            Some(count) => serializer.serialize_i64(count),
            None => Err(S::Error::custom("instant outside the representable count range")),
        }
    }
}

impl<U: Unit> Nullable<Epoch<U>> {
    /// Count of `U` since the epoch, `0` when invalid or out of range
    pub fn unix(&self) -> i64 {
        self.get().and_then(Epoch::count).unwrap_or(0)
    }

    /// Full-precision instant, `None` when invalid
    pub fn time(&self) -> Option<DateTime<FixedOffset>> {
        self.get().map(Epoch::instant)
    }
}

/// Renders the count, `0` when invalid
impl<U: Unit> fmt::Display for Nullable<Epoch<U>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.unix())
    }
}
