//! Coercion errors

use thiserror::Error;

/// Result type for coercion operations
pub type CoerceResult<T> = Result<T, CoerceError>;

/// Errors a coercion hook can raise
///
/// Every variant is a data-validity failure; none is retried or recovered.
#[derive(Debug, Clone, Error)]
pub enum CoerceError {
    /// Literal is not a valid value of the target type
    #[error("cannot parse {literal:?} as {target}: {reason}")]
    Parse {
        target: String,
        literal: String,
        reason: String,
    },

    /// Symbolic name is not registered in the enumeration
    #[error("invalid {enum_name} value: {value}")]
    InvalidEnumValue { enum_name: String, value: String },

    /// Interchange round-trip failed
    #[error("serialization error: {message}")]
    Serialization { message: String },

    /// Literal is not a syntactically valid URI
    #[error("malformed URI {literal:?}: {source}")]
    MalformedUri {
        literal: String,
        source: url::ParseError,
    },
}

impl CoerceError {
    /// Create a parse error
    pub fn parse(
        target: impl Into<String>,
        literal: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Parse {
            target: target.into(),
            literal: literal.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid enum value error
    pub fn invalid_enum_value(enum_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidEnumValue {
            enum_name: enum_name.into(),
            value: value.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a malformed URI error
    pub fn malformed_uri(literal: impl Into<String>, source: url::ParseError) -> Self {
        Self::MalformedUri {
            literal: literal.into(),
            source,
        }
    }
}
