//! Nullable value wrappers
//!
//! One generic [`Nullable<T>`] instantiated per scalar payload:
//!
//! | Alias | Payload | Accepts |
//! |-------|---------|---------|
//! | [`Bool`] | `bool` | numbers, bools, boolean text |
//! | [`Int`] | `i64` | numbers, bools, decimal text |
//! | [`Uint`] | `u64` | non-negative numbers, bools, decimal text |
//! | [`Float`] | `f64` | numbers, bools, float text |
//! | [`Text`] | `String` | numbers, bools, text |
//! | [`Time`] | `DateTime<FixedOffset>` | instants |
//! | [`Timestamp`] | `Epoch<Seconds>` | instants, second counts, RFC 3339 |
//! | [`TimestampMillis`] | `Epoch<Millis>` | instants, millisecond counts, RFC 3339 |
//! | [`TimestampNanos`] | `Epoch<Nanos>` | instants, nanosecond counts, RFC 3339 |
//! | [`Url`] | `UrlRef` | URLs, absolute URL text, relative references (feature `url`) |
//!
//! Every wrapper serializes with serde, so it can sit in a derived struct:
//!
//! ```
//! use generic_types::{Float, Int, Text};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Item {
//!     id: Int,
//!     name: Text,
//!     price: Float,
//! }
//!
//! let item: Item = serde_json::from_str(r#"{"id": "7", "name": null, "price": 2}"#).unwrap();
//! assert_eq!(item.id.get(), Some(&7));
//! assert!(!item.name.is_valid());
//! assert_eq!(
//!     serde_json::to_string(&item).unwrap(),
//!     r#"{"id":7,"name":null,"price":2}"#
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod nullable;
pub mod record;
mod scalar;
pub mod time;
#[cfg(feature = "url")]
mod url;

pub use nullable::{Nullable, Scalar};
pub use record::{decode_record, Field, Record};
pub use time::{Epoch, Millis, Nanos, Seconds, Unit};

/// Nullable boolean
pub type Bool = Nullable<bool>;

/// Nullable signed 64-bit integer
pub type Int = Nullable<i64>;

/// Nullable unsigned 64-bit integer
pub type Uint = Nullable<u64>;

/// Nullable 64-bit float
pub type Float = Nullable<f64>;

/// Nullable string
pub type Text = Nullable<String>;

/// Nullable time instant, exchanged as RFC 3339
pub type Time = Nullable<chrono::DateTime<chrono::FixedOffset>>;

/// Nullable instant exchanged as whole seconds since the epoch
pub type Timestamp = Nullable<Epoch<Seconds>>;

/// Nullable instant exchanged as milliseconds since the epoch
pub type TimestampMillis = Nullable<Epoch<Millis>>;

/// Nullable instant exchanged as nanoseconds since the epoch
pub type TimestampNanos = Nullable<Epoch<Nanos>>;

/// Nullable URL reference, absolute or relative
#[cfg(feature = "url")]
pub type Url = Nullable<generic_core::UrlRef>;
