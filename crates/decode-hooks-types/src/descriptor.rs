//! Type descriptors
//!
//! This module defines the shapes a decode destination (or a raw source value)
//! can take:
//! - `Kind`, the fieldless discriminant hooks dispatch on
//! - `NumericKind`, the width/signedness table for every fixed-width number
//! - `TypeDescriptor`, the full shape including enum descriptors and optional inners
//! - `Describe`, mapping static Rust types onto descriptors

use std::fmt;
use std::sync::Arc;

use url::Url;

use crate::{EnumDescriptor, UriRef};

/// Coarse shape of a type, as seen by a hook deciding whether it applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Unknown or heterogeneous (e.g. a null source)
    Any,
    Bool,
    /// Textual value
    String,
    /// Signed integer of any width
    Int,
    /// Unsigned integer of any width
    Uint,
    /// Floating point of any width
    Float,
    /// Ordered sequence of strings
    StringList,
    /// Absolute URL or relative reference
    Url,
    /// Enumeration backed by an `EnumDescriptor`
    Enum,
    /// Zero-or-one wrapper around an inner type
    Optional,
    /// Heterogeneous ordered sequence
    List,
    /// String-keyed map
    Map,
}

/// Numeric representation class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericClass {
    Signed,
    Unsigned,
    Float,
}

/// Every fixed-width numeric destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    I8,
    I16,
    I32,
    I64,
    /// Platform-native signed integer
    Isize,
    U8,
    U16,
    U32,
    U64,
    /// Platform-native unsigned integer
    Usize,
    F32,
    F64,
}

impl NumericKind {
    /// Bit width of the representation
    pub const fn bits(self) -> u32 {
        match self {
            Self::I8 | Self::U8 => 8,
            Self::I16 | Self::U16 => 16,
            Self::I32 | Self::U32 | Self::F32 => 32,
            Self::I64 | Self::U64 | Self::F64 => 64,
            Self::Isize | Self::Usize => usize::BITS,
        }
    }

    /// Signedness, or float
    pub const fn class(self) -> NumericClass {
        match self {
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::Isize => NumericClass::Signed,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::Usize => NumericClass::Unsigned,
            Self::F32 | Self::F64 => NumericClass::Float,
        }
    }

    /// Rust spelling of the type
    pub const fn name(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }

    pub const fn kind(self) -> Kind {
        match self.class() {
            NumericClass::Signed => Kind::Int,
            NumericClass::Unsigned => Kind::Uint,
            NumericClass::Float => Kind::Float,
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Full description of a source or destination shape
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescriptor {
    /// Accepts anything; also the shape of a null source
    Any,
    Bool,
    String,
    Numeric(NumericKind),
    StringList,
    Url,
    /// Enumeration resolved against a shared, immutable descriptor
    Enum(Arc<EnumDescriptor>),
    Optional(Box<TypeDescriptor>),
    List(Box<TypeDescriptor>),
    Map,
}

impl TypeDescriptor {
    // === Constructors ===

    /// Descriptor of a static Rust type
    pub fn of<T: Describe + ?Sized>() -> Self {
        T::describe()
    }

    pub fn numeric(kind: NumericKind) -> Self {
        Self::Numeric(kind)
    }

    pub fn enumeration(descriptor: Arc<EnumDescriptor>) -> Self {
        Self::Enum(descriptor)
    }

    pub fn optional(inner: TypeDescriptor) -> Self {
        Self::Optional(Box::new(inner))
    }

    pub fn list(element: TypeDescriptor) -> Self {
        Self::List(Box::new(element))
    }

    // === Properties ===

    pub fn kind(&self) -> Kind {
        match self {
            Self::Any => Kind::Any,
            Self::Bool => Kind::Bool,
            Self::String => Kind::String,
            Self::Numeric(n) => n.kind(),
            Self::StringList => Kind::StringList,
            Self::Url => Kind::Url,
            Self::Enum(_) => Kind::Enum,
            Self::Optional(_) => Kind::Optional,
            Self::List(_) => Kind::List,
            Self::Map => Kind::Map,
        }
    }

    /// Enumeration descriptor, for `Kind::Enum` only
    pub fn descriptor(&self) -> Option<&EnumDescriptor> {
        match self {
            Self::Enum(desc) => Some(desc),
            _ => None,
        }
    }

    pub fn is_textual(&self) -> bool {
        matches!(self, Self::String)
    }

    pub fn numeric_kind(&self) -> Option<NumericKind> {
        match self {
            Self::Numeric(n) => Some(*n),
            _ => None,
        }
    }

    /// Inner type of an optional wrapper
    pub fn optional_inner(&self) -> Option<&TypeDescriptor> {
        match self {
            Self::Optional(inner) => Some(inner),
            _ => None,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "any"),
            Self::Bool => write!(f, "bool"),
            Self::String => write!(f, "string"),
            Self::Numeric(n) => write!(f, "{}", n),
            Self::StringList => write!(f, "list<string>"),
            Self::Url => write!(f, "url"),
            Self::Enum(desc) => write!(f, "enum {}", desc.name()),
            Self::Optional(inner) => write!(f, "option<{}>", inner),
            Self::List(elem) => write!(f, "list<{}>", elem),
            Self::Map => write!(f, "map"),
        }
    }
}

/// Static Rust types that can act as decode destinations
pub trait Describe {
    fn describe() -> TypeDescriptor;
}

macro_rules! describe_numeric {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe() -> TypeDescriptor {
                    TypeDescriptor::Numeric(NumericKind::$kind)
                }
            }
        )*
    };
}

describe_numeric! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
}

impl Describe for bool {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::Bool
    }
}

impl Describe for String {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::String
    }
}

impl Describe for str {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::String
    }
}

impl Describe for Vec<String> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::StringList
    }
}

impl Describe for Url {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::Url
    }
}

impl Describe for UriRef {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::Url
    }
}

impl<T: Describe> Describe for Option<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::optional(T::describe())
    }
}
