//! Dynamic values
//!
//! `Value` is the tagged variant tree that flows through the decode hooks: raw
//! input enters as one of its variants, and each hook hands back another. It
//! serializes to plain JSON (no tags), which is the interchange form used when
//! a value has to be rebuilt under a different shape.

use std::fmt;

use indexmap::IndexMap;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use url::Url;

use crate::{NumericClass, NumericKind, TypeDescriptor, UriRef};

/// A number held in its exact width
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
}

impl Number {
    pub fn kind(&self) -> NumericKind {
        match self {
            Self::I8(_) => NumericKind::I8,
            Self::I16(_) => NumericKind::I16,
            Self::I32(_) => NumericKind::I32,
            Self::I64(_) => NumericKind::I64,
            Self::Isize(_) => NumericKind::Isize,
            Self::U8(_) => NumericKind::U8,
            Self::U16(_) => NumericKind::U16,
            Self::U32(_) => NumericKind::U32,
            Self::U64(_) => NumericKind::U64,
            Self::Usize(_) => NumericKind::Usize,
            Self::F32(_) => NumericKind::F32,
            Self::F64(_) => NumericKind::F64,
        }
    }

    /// Integer value widened losslessly, `None` for floats
    pub fn as_i128(&self) -> Option<i128> {
        match *self {
            Self::I8(v) => Some(v.into()),
            Self::I16(v) => Some(v.into()),
            Self::I32(v) => Some(v.into()),
            Self::I64(v) => Some(v.into()),
            Self::Isize(v) => Some(v as i128),
            Self::U8(v) => Some(v.into()),
            Self::U16(v) => Some(v.into()),
            Self::U32(v) => Some(v.into()),
            Self::U64(v) => Some(v.into()),
            Self::Usize(v) => Some(v as i128),
            Self::F32(_) | Self::F64(_) => None,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::F32(v) => v.into(),
            Self::F64(v) => v,
            // as_i128 is Some for every integer variant
            _ => self.as_i128().unwrap_or_default() as f64,
        }
    }

    /// Re-express this number in another width
    ///
    /// Integers move between widths only when the value is in range, and widen
    /// into floats. Floats never narrow into integers, and a finite value too
    /// large for a 32-bit float does not fit one.
    pub fn convert(self, kind: NumericKind) -> Option<Number> {
        if kind == self.kind() {
            return Some(self);
        }
        match (kind.class(), kind.bits()) {
            (NumericClass::Float, 32) => {
                let wide = self.as_f64();
                let narrow = wide as f32;
                (narrow.is_finite() || !wide.is_finite()).then_some(Self::F32(narrow))
            }
            (NumericClass::Float, _) => Some(Self::F64(self.as_f64())),
            (NumericClass::Signed | NumericClass::Unsigned, _) => {
                Self::from_i128(kind, self.as_i128()?)
            }
        }
    }

    fn from_i128(kind: NumericKind, v: i128) -> Option<Number> {
        match kind {
            NumericKind::I8 => i8::try_from(v).ok().map(Self::I8),
            NumericKind::I16 => i16::try_from(v).ok().map(Self::I16),
            NumericKind::I32 => i32::try_from(v).ok().map(Self::I32),
            NumericKind::I64 => i64::try_from(v).ok().map(Self::I64),
            NumericKind::Isize => isize::try_from(v).ok().map(Self::Isize),
            NumericKind::U8 => u8::try_from(v).ok().map(Self::U8),
            NumericKind::U16 => u16::try_from(v).ok().map(Self::U16),
            NumericKind::U32 => u32::try_from(v).ok().map(Self::U32),
            NumericKind::U64 => u64::try_from(v).ok().map(Self::U64),
            NumericKind::Usize => usize::try_from(v).ok().map(Self::Usize),
            NumericKind::F32 => Some(Self::F32(v as f32)),
            NumericKind::F64 => Some(Self::F64(v as f64)),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I8(v) => write!(f, "{}", v),
            Self::I16(v) => write!(f, "{}", v),
            Self::I32(v) => write!(f, "{}", v),
            Self::I64(v) => write!(f, "{}", v),
            Self::Isize(v) => write!(f, "{}", v),
            Self::U8(v) => write!(f, "{}", v),
            Self::U16(v) => write!(f, "{}", v),
            Self::U32(v) => write!(f, "{}", v),
            Self::U64(v) => write!(f, "{}", v),
            Self::Usize(v) => write!(f, "{}", v),
            Self::F32(v) => write!(f, "{}", v),
            Self::F64(v) => write!(f, "{}", v),
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // JSON has no NaN or infinity
        if !self.as_f64().is_finite() {
            return Err(S::Error::custom(format!("cannot encode {} as JSON", self)));
        }
        match *self {
            Self::I8(v) => serializer.serialize_i8(v),
            Self::I16(v) => serializer.serialize_i16(v),
            Self::I32(v) => serializer.serialize_i32(v),
            Self::I64(v) => serializer.serialize_i64(v),
            Self::Isize(v) => serializer.serialize_i64(v as i64),
            Self::U8(v) => serializer.serialize_u8(v),
            Self::U16(v) => serializer.serialize_u16(v),
            Self::U32(v) => serializer.serialize_u32(v),
            Self::U64(v) => serializer.serialize_u64(v),
            Self::Usize(v) => serializer.serialize_u64(v as u64),
            Self::F32(v) => serializer.serialize_f32(v),
            Self::F64(v) => serializer.serialize_f64(v),
        }
    }
}

/// A raw or coerced value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    String(String),
    Number(Number),
    StringList(Vec<String>),
    Url(UriRef),
    Optional(Option<Box<Value>>),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
}

impl Value {
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn some(value: Value) -> Self {
        Self::Optional(Some(Box::new(value)))
    }

    pub fn none() -> Self {
        Self::Optional(None)
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_uri(&self) -> Option<&UriRef> {
        match self {
            Self::Url(u) => Some(u),
            _ => None,
        }
    }

    /// Absolute URL held by this value, `None` for relative references
    pub fn as_url(&self) -> Option<&Url> {
        self.as_uri().and_then(UriRef::as_url)
    }

    /// Shape of this value when it is the source of a coercion
    pub fn type_descriptor(&self) -> TypeDescriptor {
        match self {
            Self::Null => TypeDescriptor::Any,
            Self::Bool(_) => TypeDescriptor::Bool,
            Self::String(_) => TypeDescriptor::String,
            Self::Number(n) => TypeDescriptor::Numeric(n.kind()),
            Self::StringList(_) => TypeDescriptor::StringList,
            Self::Url(_) => TypeDescriptor::Url,
            Self::Optional(inner) => TypeDescriptor::optional(
                inner
                    .as_deref()
                    .map_or(TypeDescriptor::Any, Value::type_descriptor),
            ),
            Self::List(_) => TypeDescriptor::list(TypeDescriptor::Any),
            Self::Map(_) => TypeDescriptor::Map,
        }
    }

    /// Assign this value to a destination of shape `ty`
    ///
    /// Returns `None` when the value does not fit. Numbers are re-expressed in
    /// the destination width (range-checked), null and bare values are wrapped
    /// for optional destinations, and enum destinations take an `i32` ordinal.
    pub fn fit(self, ty: &TypeDescriptor) -> Option<Value> {
        match (ty, self) {
            (TypeDescriptor::Any, v) => Some(v),
            (TypeDescriptor::Bool, v @ Self::Bool(_)) => Some(v),
            (TypeDescriptor::String, v @ Self::String(_)) => Some(v),
            (TypeDescriptor::Numeric(kind), Self::Number(n)) => n.convert(*kind).map(Self::Number),
            (TypeDescriptor::StringList, v @ Self::StringList(_)) => Some(v),
            (TypeDescriptor::StringList, Self::List(items)) => items
                .into_iter()
                .map(|item| match item {
                    Self::String(s) => Some(s),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(Self::StringList),
            (TypeDescriptor::Url, v @ Self::Url(_)) => Some(v),
            (TypeDescriptor::Enum(_), Self::Number(n)) => {
                n.convert(NumericKind::I32).map(Self::Number)
            }
            (TypeDescriptor::Optional(_), Self::Null | Self::Optional(None)) => Some(Self::none()),
            (TypeDescriptor::Optional(inner), Self::Optional(Some(v))) => (*v).fit(inner).map(Self::some),
            (TypeDescriptor::Optional(inner), v) => v.fit(inner).map(Self::some),
            (TypeDescriptor::List(elem), Self::List(items)) => items
                .into_iter()
                .map(|item| item.fit(elem))
                .collect::<Option<Vec<_>>>()
                .map(Self::List),
            (TypeDescriptor::List(elem), Self::StringList(items)) => items
                .into_iter()
                .map(|item| Self::String(item).fit(elem))
                .collect::<Option<Vec<_>>>()
                .map(Self::List),
            (TypeDescriptor::Map, v @ Self::Map(_)) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::String(s) => write!(f, "{:?}", s),
            Self::Number(n) => write!(f, "{}", n),
            Self::StringList(items) => write!(f, "{:?}", items),
            Self::Url(u) => write!(f, "{}", u),
            Self::Optional(None) => write!(f, "none"),
            Self::Optional(Some(v)) => write!(f, "some({})", v),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Self::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::String(s) => serializer.serialize_str(s),
            Self::Number(n) => n.serialize(serializer),
            Self::StringList(items) => items.serialize(serializer),
            Self::Url(u) => serializer.serialize_str(u.as_str()),
            Self::Optional(None) => serializer.serialize_none(),
            Self::Optional(Some(v)) => serializer.serialize_some(v.as_ref()),
            Self::List(items) => items.serialize(serializer),
            Self::Map(map) => map.serialize(serializer),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Number(Number::I64(i))
                } else if let Some(u) = n.as_u64() {
                    Self::Number(Number::U64(u))
                } else {
                    n.as_f64().map_or(Self::Null, |f| Self::Number(Number::F64(f)))
                }
            }
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            serde_json::Value::Object(map) => {
                Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

macro_rules! value_from_number {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::Number(Number::$variant(v))
                }
            }
        )*
    };
}

value_from_number! {
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

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Url> for Value {
    fn from(v: Url) -> Self {
        Self::Url(UriRef::Absolute(v))
    }
}

impl From<UriRef> for Value {
    fn from(v: UriRef) -> Self {
        Self::Url(v)
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Self::StringList(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        Self::Optional(v.map(|inner| Box::new(inner.into())))
    }
}
