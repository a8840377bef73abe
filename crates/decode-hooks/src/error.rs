//! Decoder errors

use decode_hooks_rules::CoerceError;
use thiserror::Error;

/// Result type for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors raised while decoding a map into typed fields
#[derive(Debug, Clone, Error)]
pub enum DecodeError {
    /// A coercion hook rejected the field's value
    #[error("field '{field}': {source}")]
    Coerce {
        field: String,
        #[source]
        source: CoerceError,
    },

    /// The (possibly coerced) value does not fit the field's type
    #[error("field '{field}': expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: String,
        found: String,
    },

    /// Input key with no matching field, when unused keys are errors
    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    /// Input is not a map of fields
    #[error("expected a map of fields, found {found}")]
    NotAMap { found: String },

    /// Decoded map does not deserialize into the target type
    #[error("cannot deserialize decoded fields: {message}")]
    Deserialize { message: String },
}

impl DecodeError {
    /// Create a coercion error for a field
    pub fn coerce(field: impl Into<String>, source: CoerceError) -> Self {
        Self::Coerce {
            field: field.into(),
            source,
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an unknown field error
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }

    /// Create a deserialization error
    pub fn deserialize(message: impl Into<String>) -> Self {
        Self::Deserialize {
            message: message.into(),
        }
    }

    /// Name of the offending field, if the error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Coerce { field, .. }
            | Self::TypeMismatch { field, .. }
            | Self::UnknownField { field } => Some(field),
            Self::NotAMap { .. } | Self::Deserialize { .. } => None,
        }
    }
}
