//! Generic nullable wrapper type
//!
//! Every wrapper in this crate is a `Nullable<T>` for some payload `T`.
//! The validity flag is the `Option` discriminant, so an invalid wrapper
//! never carries a stale payload.
//!
//! ## The Contract
//!
//! ```text
//! fn set(&mut self, x: impl Into<Value>) -> Result<()>
//! ```
//!
//! - success: the coerced payload is stored and the wrapper is valid
//! - absent input (`Value::Null`): the wrapper becomes invalid, no error
//! - rejected input: the wrapper becomes invalid and the error is returned,
//!   even if it was valid before
//!
//! JSON, serde and the persistence hooks all funnel through `set`, so the
//! three surfaces agree on what is accepted.

use generic_core::json::{parse_document, to_text};
use generic_core::{Result, Scanner, Value, Valuer};
use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, Serializer};

/// A payload type a [`Nullable`] can wrap
///
/// Ties a payload to its coercion, its storable representation and its JSON
/// token. Implemented for `bool`, `i64`, `u64`, `f64`, `String`,
/// `DateTime<FixedOffset>`, [`Epoch<U>`](crate::Epoch) and `UrlRef`.
pub trait Scalar: Sized {
    /// Coerce a dynamic value into the payload
    fn coerce(x: &Value) -> Result<Option<Self>>;

    /// Representation handed to a persistence layer
    fn store(&self) -> Result<Value>;

    /// Write the payload as its JSON token
    fn encode<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>;

    /// Adjust a decoded JSON node before coercion
    ///
    /// The default passes the node through unchanged.
    fn from_node(node: Value) -> Value {
        node
    }
}

/// A payload with a validity flag
///
/// The zero value is invalid:
///
/// ```
/// use generic_types::Int;
///
/// let mut v = Int::default();
/// assert!(!v.is_valid());
///
/// v.set("42").unwrap();
/// assert_eq!(v.get(), Some(&42));
///
/// assert!(v.set("x").is_err());
/// assert!(!v.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nullable<T> {
    inner: Option<T>,
}

impl<T> Nullable<T> {
    /// Create a valid wrapper
    pub const fn new(value: T) -> Self {
        Nullable { inner: Some(value) }
    }

    /// Create an invalid wrapper
    pub const fn null() -> Self {
        Nullable { inner: None }
    }

    /// Check whether a payload is present
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.inner.is_some()
    }

    /// Get a reference to the payload
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.inner.as_ref()
    }

    /// Consume and return the payload
    #[inline]
    pub fn into_inner(self) -> Option<T> {
        self.inner
    }

    /// Drop the payload and mark the wrapper invalid
    pub fn reset(&mut self) {
        self.inner = None;
    }
}

impl<T: Default + Clone> Nullable<T> {
    /// Payload, or the payload type's zero value when invalid
    pub fn value_or_default(&self) -> T {
        self.inner.clone().unwrap_or_default()
    }
}

impl<T: Scalar> Nullable<T> {
    /// Build a wrapper by coercing `x`
    ///
    /// # Errors
    ///
    /// Returns the coercion error when `x` is not accepted.
    pub fn from_value(x: impl Into<Value>) -> Result<Self> {
        let mut v = Self::null();
        v.set(x)?;
        Ok(v)
    }

    /// Coerce `x` and store the outcome
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`](generic_core::Error::InvalidValue)
    /// when `x` is not accepted; the wrapper is left invalid.
    pub fn set(&mut self, x: impl Into<Value>) -> Result<()> {
        match T::coerce(&x.into()) {
            Ok(inner) => {
                self.inner = inner;
                Ok(())
            }
            Err(e) => {
                self.inner = None;
                Err(e)
            }
        }
    }

    /// Storable representation, or `Value::Null` when invalid or unstorable
    pub fn weak(&self) -> Value {
        self.stored().ok().flatten().unwrap_or_default()
    }

    /// Render as JSON text, `null` when invalid
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`](generic_core::Error::Encode) when the payload
    /// has no JSON token (NaN, or a nanosecond count out of range).
    pub fn to_json(&self) -> Result<String> {
        to_text(self)
    }

    /// Decode JSON text and set the result
    ///
    /// Empty input leaves the wrapper untouched. Malformed text is returned as
    /// [`Error::Json`](generic_core::Error::Json) and also leaves it untouched.
    pub fn from_json(&mut self, text: &[u8]) -> Result<()> {
        match parse_document(text)? {
            Some(node) => self.set(T::from_node(node)),
            None => Ok(()),
        }
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(inner: Option<T>) -> Self {
        Nullable { inner }
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(v: Nullable<T>) -> Self {
        v.inner
    }
}

impl<T: Scalar> Valuer for Nullable<T> {
    fn stored(&self) -> Result<Option<Value>> {
        self.inner.as_ref().map(T::store).transpose()
    }
}

impl<T: Scalar> Scanner for Nullable<T> {
    fn scan(&mut self, src: Value) -> Result<()> {
        self.set(src)
    }
}

impl<T: Scalar> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match &self.inner {
            Some(v) => v.encode(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Scalar> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let node = T::from_node(Value::deserialize(deserializer)?);
        T::coerce(&node)
            .map(Nullable::from)
            .map_err(D::Error::custom)
    }
}
