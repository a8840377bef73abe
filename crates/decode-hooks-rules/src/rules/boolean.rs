//! String to bool

use decode_hooks_types::{Kind, TypeDescriptor, Value};

use super::take_text;
use crate::error::{CoerceError, CoerceResult};
use crate::registry::{Hook, Outcome};

/// Hook converting `1 t T TRUE true True` / `0 f F FALSE false False` into bools
pub fn string_to_bool_hook() -> Hook {
    Hook::new("string_to_bool", string_to_bool)
}

fn string_to_bool(
    source: &TypeDescriptor,
    dest: &TypeDescriptor,
    value: Value,
) -> CoerceResult<Outcome> {
    if dest.kind() != Kind::Bool {
        return Ok(Outcome::Passthrough(value));
    }
    let text = match take_text(source, value) {
        Ok(text) => text,
        Err(value) => return Ok(Outcome::Passthrough(value)),
    };

    parse_bool(&text)
        .map(|b| Outcome::Coerced(Value::Bool(b)))
        .ok_or_else(|| CoerceError::parse("bool", text, "not a boolean literal"))
}

/// Parse one of the recognised boolean literals
pub fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
