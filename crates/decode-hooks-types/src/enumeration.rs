//! Enumeration descriptors
//!
//! An `EnumDescriptor` is the name <-> number table of one enumeration. It is
//! built once, wrapped in an `Arc`, and never mutated afterwards, so the same
//! descriptor can be read from any number of concurrent decodes.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::TypeDescriptor;

/// Name and symbol table of an enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    name: String,
    values: IndexMap<String, i32>,
}

impl EnumDescriptor {
    /// Build a descriptor from `(symbol, number)` pairs
    ///
    /// Later duplicates of a symbol replace earlier ones, keeping the first position.
    pub fn new<N, I, S>(name: N, values: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(|(s, n)| (s.into(), n)).collect(),
        }
    }

    /// Build a shared descriptor
    pub fn shared<N, I, S>(name: N, values: I) -> Arc<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        Arc::new(Self::new(name, values))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number registered for a symbolic name (case-sensitive)
    pub fn by_name(&self, name: &str) -> Option<i32> {
        self.values.get(name).copied()
    }

    /// First symbolic name registered for a number
    pub fn by_number(&self, number: i32) -> Option<&str> {
        self.values
            .iter()
            .find(|(_, n)| **n == number)
            .map(|(s, _)| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Symbols in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.values.iter().map(|(s, n)| (s.as_str(), *n))
    }
}

/// A Rust enumeration that exposes its descriptor
pub trait ProtoEnum {
    fn descriptor() -> Arc<EnumDescriptor>;
}

impl TypeDescriptor {
    /// Descriptor of a `ProtoEnum` type
    pub fn of_enum<E: ProtoEnum>() -> Self {
        Self::Enum(E::descriptor())
    }
}
