//! Generic - nullable scalar values with dynamic coercion
//!
//! Wrapper types that hold one primitive plus a validity flag, accept
//! loosely-typed input through a deterministic coercion engine, and plug
//! into JSON and persistence layers.
//!
//! # Quick Start
//!
//! ```
//! use generic::{Int, TimestampMillis, Value};
//!
//! let mut id = Int::default();
//! id.set("42")?;
//! assert_eq!(id.to_json()?, "42");
//!
//! let mut seen = TimestampMillis::default();
//! seen.from_json(b"1367059792")?;
//! assert_eq!(seen.unix(), 1367059792);
//!
//! assert!(id.set(Value::Bytes(vec![1])).is_err());
//! assert_eq!(id.to_json()?, "null");
//! # Ok::<(), generic::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `generic-core`: the dynamic [`Value`], the `as_*` coercion functions,
//!   the JSON bridge and the persistence traits
//! - `generic-types`: [`Nullable<T>`] and the per-type aliases
//!
//! Both crates are re-exported here; depend on this crate only.

pub use generic_core::*;
pub use generic_types::*;
