//! Anything to an optional wrapper
//!
//! The raw value is encoded as a JSON document and rebuilt under the wrapper's
//! inner type: `null` becomes `none`, anything else is run back through the
//! shared composer against the inner type and wrapped in `some`. Values JSON
//! cannot hold (NaN, infinities) fail to encode.

use decode_hooks_types::{TypeDescriptor, Value};

use crate::error::{CoerceError, CoerceResult};
use crate::registry::{Composer, Hook, Outcome};

/// Hook wrapping any value into `Optional(T)` via a JSON round-trip
pub fn optional_hook() -> Hook {
    Hook::new("optional", optional)
}

fn optional(
    _source: &TypeDescriptor,
    dest: &TypeDescriptor,
    value: Value,
) -> CoerceResult<Outcome> {
    let Some(inner) = dest.optional_inner() else {
        return Ok(Outcome::Passthrough(value));
    };

    let document = serde_json::to_value(&value)
        .map_err(|e| CoerceError::serialization(e.to_string()))?;
    rebuild(document, inner).map(Outcome::Coerced)
}

fn rebuild(document: serde_json::Value, inner: &TypeDescriptor) -> CoerceResult<Value> {
    if document.is_null() {
        return Ok(Value::none());
    }

    let raw = Value::from(document);
    let source = raw.type_descriptor();
    let coerced = Composer::shared()
        .apply(&source, inner, raw)
        .map_err(|e| CoerceError::serialization(format!("cannot decode {}: {}", inner, e)))?;

    let found = coerced.type_descriptor();
    coerced
        .fit(inner)
        .map(Value::some)
        .ok_or_else(|| CoerceError::serialization(format!("cannot fit {} into {}", found, inner)))
}
