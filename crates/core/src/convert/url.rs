//! URL reference target
//!
//! Absolute URLs are parsed by the WHATWG parser in `url`. Relative
//! references (`/path?q`, `//host`, `a/b/c`, the empty string) are kept as
//! written once they resolve cleanly against a placeholder base.

use super::invalid;
use crate::error::Result;
use crate::value::Value;
use std::fmt;
use url::{ParseError, Url};

/// Base used only to validate relative references
const VALIDATION_BASE: &str = "http://reference.invalid/";

/// An absolute URL or a relative reference
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UrlRef {
    /// A URL with a scheme, in canonical form
    Absolute(Url),
    /// A reference without a scheme, kept verbatim
    Relative(String),
}

impl UrlRef {
    /// Parse a URL or a relative reference
    ///
    /// Returns `None` for malformed input, such as a bad host or a first path
    /// segment containing `:` without a valid scheme before it.
    pub fn parse(s: &str) -> Option<UrlRef> {
        match Url::parse(s) {
            Ok(u) => Some(UrlRef::Absolute(u)),
            Err(ParseError::RelativeUrlWithoutBase) => {
                let first_segment = s.split(['/', '?', '#']).next().unwrap_or("");
                if first_segment.contains(':') {
                    return None;
                }
                let base = Url::parse(VALIDATION_BASE).ok()?;
                base.join(s).ok()?;
                Some(UrlRef::Relative(s.to_string()))
            }
            Err(_) => None,
        }
    }

    /// Serialized form: canonical for absolute URLs, verbatim otherwise
    pub fn as_str(&self) -> &str {
        match self {
            UrlRef::Absolute(u) => u.as_str(),
            UrlRef::Relative(s) => s,
        }
    }

    /// Whether the reference carries a scheme
    pub fn is_absolute(&self) -> bool {
        matches!(self, UrlRef::Absolute(_))
    }

    /// The parsed URL, `None` for relative references
    pub fn absolute(&self) -> Option<&Url> {
        match self {
            UrlRef::Absolute(u) => Some(u),
            UrlRef::Relative(_) => None,
        }
    }

    /// Resolve against an absolute base
    ///
    /// Absolute URLs ignore the base.
    pub fn resolve(&self, base: &Url) -> Option<Url> {
        match self {
            UrlRef::Absolute(u) => Some(u.clone()),
            UrlRef::Relative(s) => base.join(s).ok(),
        }
    }
}

impl fmt::Display for UrlRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Url> for UrlRef {
    fn from(u: Url) -> Self {
        UrlRef::Absolute(u)
    }
}

/// Coerce a value to a URL reference
///
/// Accepts `Value::Url` verbatim and parses strings with [`UrlRef::parse`].
/// Every other shape is rejected.
pub fn as_url(x: &Value) -> Result<Option<UrlRef>> {
    match x {
        Value::Null => Ok(None),
        Value::Url(u) => Ok(Some(UrlRef::Absolute(u.clone()))),
        Value::String(s) => UrlRef::parse(s).map(Some).ok_or_else(|| invalid(x)),
        _ => Err(invalid(x)),
    }
}
