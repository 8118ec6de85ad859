//! Conformance Test Suite: Nullable Values
//!
//! Exercises the public surface of the `generic` facade end to end: the
//! coercion engine, the wrappers' JSON encoding, partial record decoding and
//! the persistence hooks against an in-memory row store.
//!
//! ## Test Organization
//!
//! - `coercion_tests.rs` - per-target acceptance and rejection through `set`
//! - `json_tests.rs` - JSON tokens, decoding, derived structs
//! - `record_tests.rs` - field-by-field decoding with partial failure
//! - `store_tests.rs` - Valuer/Scanner round trips through a row store
//! - `property_tests.rs` - totality, absence and round-trip properties
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test conformance
//!
//! # Run specific test categories
//! cargo test --test conformance co_   # Coercion
//! cargo test --test conformance je_   # JSON encoding
//! cargo test --test conformance jd_   # JSON decoding
//! cargo test --test conformance rd_   # Record decoding
//! cargo test --test conformance st_   # Store round trips
//! ```


mod json_tests;
mod record_tests;
