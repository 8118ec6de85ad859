//! Partial record decoding
//!
//! A derived `Deserialize` rejects a whole struct as soon as one field
//! fails. [`decode_record`] instead decodes every field on its own: a field
//! that cannot be coerced is left invalid while its siblings keep their
//! decoded values, and the first failure is reported once every field has
//! been visited.
//!
//! ```
//! use generic_types::{decode_record, Field, Int, Record, Text};
//!
//! #[derive(Default)]
//! struct User {
//!     id: Int,
//!     name: Text,
//! }
//!
//! impl Record for User {
//!     fn visit_fields(&mut self, visit: &mut dyn FnMut(&'static str, &mut dyn Field)) {
//!         visit("id", &mut self.id);
//!         visit("name", &mut self.name);
//!     }
//! }
//!
//! let mut user = User::default();
//! let err = decode_record(br#"{"id": "x", "name": "ann"}"#, &mut user);
//! assert!(err.is_err());
//! assert!(!user.id.is_valid());
//! assert_eq!(user.name.as_str(), Some("ann"));
//! ```

use crate::nullable::{Nullable, Scalar};
use generic_core::json::parse_document;
use generic_core::{Error, Result, Value};
use tracing::debug;

/// A decodable member of a [`Record`]
pub trait Field {
    /// Decode one JSON node into the field
    ///
    /// On failure the field is left invalid.
    fn decode_node(&mut self, node: Value) -> Result<()>;
}

impl<T: Scalar> Field for Nullable<T> {
    fn decode_node(&mut self, node: Value) -> Result<()> {
        self.set(T::from_node(node))
    }
}

/// A struct whose fields decode independently
pub trait Record {
    /// Call `visit` once per field with its JSON member name
    fn visit_fields(&mut self, visit: &mut dyn FnMut(&'static str, &mut dyn Field));
}

/// Decode a JSON object into `record`, field by field
///
/// - empty text is a no-op
/// - the document must be an object
/// - members without a matching field are ignored, fields without a
///   matching member are left untouched
///
/// # Errors
///
/// Returns [`Error::Json`] for malformed text, [`Error::InvalidValue`] when
/// the document is not an object, and otherwise the first field error.
pub fn decode_record<R: Record + ?Sized>(text: &[u8], record: &mut R) -> Result<()> {
    let Some(document) = parse_document(text)? else {
        return Ok(());
    };
    let mut members = match document {
        Value::Object(members) => members,
        other => return Err(Error::invalid(other.type_name())),
    };

    let mut first_error = None;
    record.visit_fields(&mut |name: &'static str, field: &mut dyn Field| {
        let Some(node) = members.remove(name) else {
            return;
        };
        if let Err(e) = field.decode_node(node) {
            debug!(target: "generic::record", field = name, error = %e, "Field rejected");
            first_error.get_or_insert(e);
        }
    });

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
