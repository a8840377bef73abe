//! Decode hook type model
//!
//! This crate defines what the coercion hooks reason about:
//! - Type descriptors (`Kind`, `NumericKind`, `TypeDescriptor`)
//! - Enumeration descriptors (name <-> number tables)
//! - The dynamic `Value` tree and its assignment rules
//! - `UriRef`, an absolute URL or relative reference

pub mod descriptor;
pub mod enumeration;
pub mod uri;
pub mod value;

pub use descriptor::*;
pub use enumeration::*;
pub use uri::*;
pub use value::*;
