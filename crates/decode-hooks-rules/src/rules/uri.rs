//! String to URI
//!
//! Absolute URLs are parsed with `url`. Relative references (`/var/data`,
//! `google.fr`) are accepted and kept verbatim.

use decode_hooks_types::{Kind, TypeDescriptor, UriRef, Value};

use super::take_text;
use crate::error::{CoerceError, CoerceResult};
use crate::registry::{Hook, Outcome};

/// Hook parsing a string into an owned `UriRef`
pub fn string_to_url_hook() -> Hook {
    Hook::new("string_to_url", string_to_url)
}

fn string_to_url(
    source: &TypeDescriptor,
    dest: &TypeDescriptor,
    value: Value,
) -> CoerceResult<Outcome> {
    if dest.kind() != Kind::Url {
        return Ok(Outcome::Passthrough(value));
    }
    let text = match take_text(source, value) {
        Ok(text) => text,
        Err(value) => return Ok(Outcome::Passthrough(value)),
    };

    match UriRef::parse(&text) {
        Ok(uri) => Ok(Outcome::Coerced(Value::Url(uri))),
        Err(err) => Err(CoerceError::malformed_uri(text, err)),
    }
}
