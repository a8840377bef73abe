//! Built-in coercion hooks
//!
//! Each hook claims exactly one family of (source, destination) pairs and
//! passes every other pair through untouched:
//!
//! | hook | source | destination |
//! |---|---|---|
//! | `string_to_bool` | string | bool |
//! | `string_to_numeric` | string | any fixed-width integer or float |
//! | `string_to_string_list` | string | list of strings |
//! | `string_to_url` | string | URL |
//! | `string_to_enum` | string | enumeration |
//! | `optional` | anything | optional wrapper |

pub mod boolean;
pub mod enumeration;
pub mod numeric;
pub mod optional;
pub mod string_list;
pub mod uri;

pub use boolean::string_to_bool_hook;
pub use enumeration::string_to_enum_hook;
pub use numeric::string_to_numeric_hook;
pub use optional::optional_hook;
pub use string_list::string_to_string_list_hook;
pub use uri::string_to_url_hook;

use decode_hooks_types::{TypeDescriptor, Value};

use crate::registry::Hook;

/// Every built-in hook, in fixed registration order
pub fn all() -> Vec<Hook> {
    vec![
        string_to_bool_hook(),
        string_to_numeric_hook(),
        string_to_string_list_hook(),
        string_to_url_hook(),
        string_to_enum_hook(),
        optional_hook(),
    ]
}

/// Text of a textual source, or the value back for passthrough
fn take_text(source: &TypeDescriptor, value: Value) -> Result<String, Value> {
    match value {
        Value::String(text) if source.is_textual() => Ok(text),
        other => Err(other),
    }
}
