//! String to enumeration ordinal

use decode_hooks_types::{Number, TypeDescriptor, Value};

use super::take_text;
use crate::error::{CoerceError, CoerceResult};
use crate::registry::{Hook, Outcome};

/// Hook resolving a symbolic name against the destination's enum descriptor
///
/// The result is the registered `i32` ordinal, not a symbolic value; the
/// caller assigns it into the enum-typed destination.
pub fn string_to_enum_hook() -> Hook {
    Hook::new("string_to_enum", string_to_enum)
}

fn string_to_enum(
    source: &TypeDescriptor,
    dest: &TypeDescriptor,
    value: Value,
) -> CoerceResult<Outcome> {
    let Some(descriptor) = dest.descriptor() else {
        return Ok(Outcome::Passthrough(value));
    };
    let name = match take_text(source, value) {
        Ok(text) => text,
        Err(value) => return Ok(Outcome::Passthrough(value)),
    };

    match descriptor.by_name(&name) {
        Some(number) => Ok(Outcome::Coerced(Value::Number(Number::I32(number)))),
        None => Err(CoerceError::invalid_enum_value(descriptor.name(), name)),
    }
}
