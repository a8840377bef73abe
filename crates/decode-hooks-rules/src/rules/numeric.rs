//! String to number, with unit suffixes
//!
//! A literal may end in one multiplier suffix:
//!
//! | suffix | factor |
//! |---|---|
//! | `Ki` / `Mi` / `Gi` | 2^10 / 2^20 / 2^30 |
//! | `K` / `M` / `G` | 10^3 / 10^6 / 10^9 |
//!
//! The suffix is stripped, the rest is parsed in the destination width, and
//! the result is multiplied by the factor in that same width. The factor is
//! cast to the destination type first, so narrow destinations see it
//! truncated (`Ki` into `i8` multiplies by 0). Integer products wrap on
//! overflow; float products follow IEEE arithmetic.

use std::fmt;
use std::str::FromStr;

use decode_hooks_types::{Number, NumericKind, TypeDescriptor, Value};

use super::take_text;
use crate::error::{CoerceError, CoerceResult};
use crate::registry::{Hook, Outcome};

/// Multiplier suffixes, two-character ones first so `K` never shadows `Ki`
pub const SUFFIXES: [(&str, u64); 6] = [
    ("Ki", 1 << 10),
    ("Mi", 1 << 20),
    ("Gi", 1 << 30),
    ("K", 1_000),
    ("M", 1_000_000),
    ("G", 1_000_000_000),
];

/// Hook parsing a string into any fixed-width integer or float
pub fn string_to_numeric_hook() -> Hook {
    Hook::new("string_to_numeric", string_to_numeric)
}

fn string_to_numeric(
    source: &TypeDescriptor,
    dest: &TypeDescriptor,
    value: Value,
) -> CoerceResult<Outcome> {
    let Some(kind) = dest.numeric_kind() else {
        return Ok(Outcome::Passthrough(value));
    };
    match take_text(source, value) {
        Ok(text) => parse_number(kind, &text).map(|n| Outcome::Coerced(Value::Number(n))),
        Err(value) => Ok(Outcome::Passthrough(value)),
    }
}

/// Split a trailing multiplier suffix off a literal
///
/// Matching is exact and case-sensitive; at most one suffix is removed.
pub fn split_multiplier(literal: &str) -> (&str, u64) {
    SUFFIXES
        .iter()
        .find_map(|(suffix, factor)| literal.strip_suffix(suffix).map(|rest| (rest, *factor)))
        .unwrap_or((literal, 1))
}

/// Parse a suffixed literal into `kind`
pub fn parse_number(kind: NumericKind, literal: &str) -> CoerceResult<Number> {
    let (digits, factor) = split_multiplier(literal);
    let scaled = ScaledLiteral {
        literal,
        digits,
        factor,
        kind,
    };

    Ok(match kind {
        NumericKind::I8 => Number::I8(scaled.parse()?),
        NumericKind::I16 => Number::I16(scaled.parse()?),
        NumericKind::I32 => Number::I32(scaled.parse()?),
        NumericKind::I64 => Number::I64(scaled.parse()?),
        NumericKind::Isize => Number::Isize(scaled.parse()?),
        NumericKind::U8 => Number::U8(scaled.parse()?),
        NumericKind::U16 => Number::U16(scaled.parse()?),
        NumericKind::U32 => Number::U32(scaled.parse()?),
        NumericKind::U64 => Number::U64(scaled.parse()?),
        NumericKind::Usize => Number::Usize(scaled.parse()?),
        NumericKind::F32 => Number::F32(scaled.parse()?),
        NumericKind::F64 => Number::F64(scaled.parse()?),
    })
}

/// A literal split into digits and factor, bound for one destination width
struct ScaledLiteral<'a> {
    literal: &'a str,
    digits: &'a str,
    factor: u64,
    kind: NumericKind,
}

impl ScaledLiteral<'_> {
    fn parse<T>(&self) -> CoerceResult<T>
    where
        T: Scalable,
        <T as FromStr>::Err: fmt::Display,
    {
        let parsed: T = self
            .digits
            .parse()
            .map_err(|e: <T as FromStr>::Err| self.error(e.to_string()))?;
        if parsed.overflowed() && !is_infinity_literal(self.digits) {
            return Err(self.error("number out of range"));
        }
        Ok(parsed.scale(T::factor(self.factor)))
    }

    fn error(&self, reason: impl Into<String>) -> CoerceError {
        CoerceError::parse(self.kind.name(), self.literal, reason)
    }
}

/// Fixed-width numbers the suffix multiply is defined for
trait Scalable: FromStr + Copy {
    /// The factor expressed in this type (`as` semantics)
    fn factor(factor: u64) -> Self;

    /// Multiply in this type's own width
    fn scale(self, by: Self) -> Self;

    /// Parsed value saturated past the type's range
    fn overflowed(self) -> bool;
}

macro_rules! scalable_int {
    ($($ty:ty),*) => {
        $(
            impl Scalable for $ty {
                fn factor(factor: u64) -> Self {
                    factor as $ty
                }

                fn scale(self, by: Self) -> Self {
                    self.wrapping_mul(by)
                }

                fn overflowed(self) -> bool {
                    false
                }
            }
        )*
    };
}

macro_rules! scalable_float {
    ($($ty:ty),*) => {
        $(
            impl Scalable for $ty {
                fn factor(factor: u64) -> Self {
                    factor as $ty
                }

                fn scale(self, by: Self) -> Self {
                    self * by
                }

                fn overflowed(self) -> bool {
                    self.is_infinite()
                }
            }
        )*
    };
}

scalable_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
scalable_float!(f32, f64);

// Rust float parsing rounds out-of-range literals to infinity instead of failing
fn is_infinity_literal(digits: &str) -> bool {
    let unsigned = digits.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
