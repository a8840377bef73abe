//! Typed-value coercion hooks
//!
//! This crate decodes loosely-typed input (strings from environment variables
//! or flags, JSON-like maps) into typed fields, applying a chain of coercion
//! hooks on the way:
//!
//! - `"true"`, `"F"`, `"1"` into `bool`
//! - `"2Ki"`, `"1.5M"` into any fixed-width integer or float
//! - `"a,b,c"` into a list of strings
//! - `"s3://bucket/key"` or `"/var/data"` into a `UriRef`
//! - symbolic enum names into their ordinals
//! - anything into an optional wrapper
//!
//! # Example
//!
//! ```
//! use decode_hooks::{Decoder, Schema, TypeDescriptor};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Limits {
//!     max_bytes: u64,
//!     tags: Vec<String>,
//! }
//!
//! let decoder = Decoder::new(
//!     Schema::new()
//!         .field("max_bytes", TypeDescriptor::of::<u64>())
//!         .field("tags", TypeDescriptor::of::<Vec<String>>()),
//! );
//! let input = serde_json::json!({"max_bytes": "4Mi", "tags": "a,b"});
//! let limits: Limits = decoder.decode_json_into(input).unwrap();
//! assert_eq!(limits.max_bytes, 4 * 1024 * 1024);
//! assert_eq!(limits.tags, vec!["a", "b"]);
//! ```

// Re-export the hook and type crates
pub use decode_hooks_rules as rules;
pub use decode_hooks_types as types;

pub mod config;
pub mod decoder;
pub mod error;

// Convenience re-exports
pub use config::DecoderConfig;
pub use decoder::{Decoder, Schema};
pub use decode_hooks_rules::{CoerceError, CoerceResult, Composer, Hook, Outcome};
pub use decode_hooks_types::{
    Describe, EnumDescriptor, Kind, Number, NumericKind, ProtoEnum, TypeDescriptor, UriRef, Value,
};
pub use error::{DecodeError, DecodeResult};
