//! Core traits for the persistence boundary
//!
//! A persistence layer talks to wrapper types through two hooks and never
//! sees the wrappers themselves:
//!
//! - [`Valuer`] hands out the storable representation, or `None` for a
//!   database NULL
//! - [`Scanner`] accepts whatever the driver read back and coerces it
//!
//! The storable representation is itself a [`Value`], so any driver able to
//! bind a `Value` can store every wrapper.

use crate::error::Result;
use crate::value::Value;

/// Produce the representation to persist
///
/// # Examples
///
/// ```
/// use generic_core::{Result, Value, Valuer};
///
/// struct Flag(Option<bool>);
///
/// impl Valuer for Flag {
///     fn stored(&self) -> Result<Option<Value>> {
///         Ok(self.0.map(Value::Bool))
///     }
/// }
///
/// assert_eq!(Flag(Some(true)).stored().unwrap(), Some(Value::Bool(true)));
/// assert_eq!(Flag(None).stored().unwrap(), None);
/// ```
pub trait Valuer {
    /// Storable representation, `None` when there is nothing to store
    ///
    /// # Errors
    ///
    /// Returns an error if the payload has no storable form.
    fn stored(&self) -> Result<Option<Value>>;
}

/// Accept a value read back from storage
pub trait Scanner {
    /// Coerce `src` into `self`
    ///
    /// A NULL source leaves `self` invalid without error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`](crate::Error::InvalidValue) when the
    /// source shape is not coercible; `self` is left invalid.
    fn scan(&mut self, src: Value) -> Result<()>;
}

impl<T: Valuer + ?Sized> Valuer for &T {
    fn stored(&self) -> Result<Option<Value>> {
        (**self).stored()
    }
}

impl<T: Valuer + ?Sized> Valuer for Box<T> {
    fn stored(&self) -> Result<Option<Value>> {
        (**self).stored()
    }
}

impl<T: Scanner + ?Sized> Scanner for Box<T> {
    fn scan(&mut self, src: Value) -> Result<()> {
        (**self).scan(src)
    }
}
