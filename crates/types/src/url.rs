//! URL reference payload

use crate::nullable::{Nullable, Scalar};
use generic_core::{as_url, Result, UrlRef, Value};
use serde::Serializer;
use std::fmt;

impl Scalar for UrlRef {
    fn coerce(x: &Value) -> Result<Option<Self>> {
        as_url(x)
    }

    fn store(&self) -> Result<Value> {
        Ok(Value::String(self.as_str().to_string()))
    }

    fn encode<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Nullable<UrlRef> {
    /// Serialized reference, `None` when invalid
    pub fn as_str(&self) -> Option<&str> {
        self.get().map(UrlRef::as_str)
    }

    /// Parsed URL when valid and absolute
    pub fn absolute(&self) -> Option<&url::Url> {
        self.get().and_then(UrlRef::absolute)
    }

    /// `false` when invalid or relative
    pub fn is_absolute(&self) -> bool {
        self.get().is_some_and(UrlRef::is_absolute)
    }

    /// Resolve against `base`, `None` when invalid
    pub fn resolve(&self, base: &url::Url) -> Option<url::Url> {
        self.get().and_then(|r| r.resolve(base))
    }
}

/// Renders the reference, or nothing when invalid
impl fmt::Display for Nullable<UrlRef> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or(""))
    }
}
