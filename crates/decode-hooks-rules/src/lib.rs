//! Decode hook coercion rules
//!
//! This crate provides the conversion rules a host decoder applies while
//! turning loosely-typed input into typed destination fields:
//!
//! - **Boolean**: `"true"`, `"F"`, `"1"` ... into `bool`
//! - **Numeric**: `"2Ki"`, `"1.5M"`, `"-3"` into any fixed-width integer or float
//! - **String list**: `"a,b,c"` into `["a", "b", "c"]`
//! - **URL**: `"s3://bucket/key"` or a relative path into a `UriRef`
//! - **Enumeration**: symbolic names into registered ordinals
//! - **Optional**: any value into an optional wrapper, via a JSON round-trip
//!
//! # Example
//!
//! ```
//! use decode_hooks_rules::Composer;
//! use decode_hooks_types::{Number, NumericKind, TypeDescriptor, Value};
//!
//! let composer = Composer::all();
//! let value = composer
//!     .apply(
//!         &TypeDescriptor::String,
//!         &TypeDescriptor::Numeric(NumericKind::U32),
//!         Value::from("2Ki"),
//!     )
//!     .unwrap();
//! assert_eq!(value, Value::Number(Number::U32(2048)));
//! ```
//!
//! # Architecture
//!
//! - `Composer`: ordered hook chain; first hook to claim a pair wins, errors abort
//! - `Hook`: one named rule, a pure function of (source, destination, value)
//! - `rules`: the built-in hooks, each also usable on its own

pub mod error;
pub mod registry;
pub mod rules;

pub use error::{CoerceError, CoerceResult};
pub use registry::{Composer, Hook, HookFn, Outcome};
pub use rules::{
    all, optional_hook, string_to_bool_hook, string_to_enum_hook, string_to_numeric_hook,
    string_to_string_list_hook, string_to_url_hook,
};
