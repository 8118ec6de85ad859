//! Primitive payloads: bool, i64, u64, f64 and String

use crate::nullable::{Nullable, Scalar};
use generic_core::json::serialize_float;
use generic_core::{as_bool, as_float, as_int, as_string, as_uint, Result, Value};
use serde::Serializer;
use std::fmt;

impl Scalar for bool {
    fn coerce(x: &Value) -> Result<Option<Self>> {
        as_bool(x)
    }

    fn store(&self) -> Result<Value> {
        Ok(Value::Bool(*self))
    }

    fn encode<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_bool(*self)
    }
}

impl Scalar for i64 {
    fn coerce(x: &Value) -> Result<Option<Self>> {
        as_int(x)
    }

    fn store(&self) -> Result<Value> {
        Ok(Value::Int(*self))
    }

    fn encode<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i64(*self)
    }
}

impl Scalar for u64 {
    fn coerce(x: &Value) -> Result<Option<Self>> {
        as_uint(x)
    }

    fn store(&self) -> Result<Value> {
        Ok(Value::Uint(*self))
    }

    fn encode<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u64(*self)
    }
}

impl Scalar for f64 {
    fn coerce(x: &Value) -> Result<Option<Self>> {
        as_float(x)
    }

    fn store(&self) -> Result<Value> {
        Ok(Value::Float(*self))
    }

    fn encode<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_float(*self, serializer)
    }
}

impl Scalar for String {
    fn coerce(x: &Value) -> Result<Option<Self>> {
        as_string(x)
    }

    fn store(&self) -> Result<Value> {
        Ok(Value::String(self.clone()))
    }

    fn encode<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self)
    }
}

impl Nullable<String> {
    /// Borrow the text, `None` when invalid
    pub fn as_str(&self) -> Option<&str> {
        self.get().map(String::as_str)
    }
}

/// Renders the text, or nothing when invalid
impl fmt::Display for Nullable<String> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or(""))
    }
}
