//! String to comma-separated list

use decode_hooks_types::{Kind, TypeDescriptor, Value};

use super::take_text;
use crate::error::CoerceResult;
use crate::registry::{Hook, Outcome};

/// Hook splitting a string on `,` into a list of strings
///
/// Empty segments are kept, and an empty string yields `[""]`.
pub fn string_to_string_list_hook() -> Hook {
    Hook::new("string_to_string_list", string_to_string_list)
}

fn string_to_string_list(
    source: &TypeDescriptor,
    dest: &TypeDescriptor,
    value: Value,
) -> CoerceResult<Outcome> {
    if dest.kind() != Kind::StringList {
        return Ok(Outcome::Passthrough(value));
    }
    match take_text(source, value) {
        Ok(text) => Ok(Outcome::Coerced(Value::StringList(
            text.split(',').map(str::to_string).collect(),
        ))),
        Err(value) => Ok(Outcome::Passthrough(value)),
    }
}
