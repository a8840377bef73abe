//! Schema-driven field decoder
//!
//! The `Decoder` walks an input map key by key, runs the configured hook chain
//! for each field against the field's declared type, and checks the result
//! fits that type. `decode_into` then hands the typed map to serde.

use indexmap::IndexMap;
use log::debug;
use serde::de::DeserializeOwned;

use decode_hooks_types::{TypeDescriptor, Value};

use crate::config::DecoderConfig;
use crate::error::{DecodeError, DecodeResult};

/// Ordered field name -> type table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: IndexMap<String, TypeDescriptor>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field
    pub fn field(mut self, name: impl Into<String>, ty: TypeDescriptor) -> Self {
        self.fields.insert(name.into(), ty);
        self
    }

    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.fields.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeDescriptor)> {
        self.fields.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Decodes loosely-typed maps against a `Schema`
#[derive(Debug, Clone)]
pub struct Decoder {
    schema: Schema,
    config: DecoderConfig,
}

impl Decoder {
    /// Decoder with every built-in hook and unknown keys ignored
    pub fn new(schema: Schema) -> Self {
        Self::with_config(schema, DecoderConfig::default())
    }

    pub fn with_config(schema: Schema, config: DecoderConfig) -> Self {
        Self { schema, config }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode every known field of `input`
    ///
    /// Output keeps input order. The first failing field aborts the decode.
    pub fn decode(&self, input: IndexMap<String, Value>) -> DecodeResult<IndexMap<String, Value>> {
        let mut output = IndexMap::with_capacity(input.len());
        for (name, raw) in input {
            let Some(dest) = self.schema.get(&name) else {
                if self.config.error_unused {
                    return Err(DecodeError::unknown_field(name));
                }
                debug!("ignoring unknown field '{}'", name);
                continue;
            };
            let value = self.decode_field(&name, dest, raw)?;
            output.insert(name, value);
        }
        Ok(output)
    }

    /// Coerce one raw value into `dest`
    pub fn decode_field(&self, name: &str, dest: &TypeDescriptor, raw: Value) -> DecodeResult<Value> {
        let source = raw.type_descriptor();
        let coerced = self
            .config
            .composer
            .apply(&source, dest, raw)
            .map_err(|e| DecodeError::coerce(name, e))?;

        let found = coerced.type_descriptor();
        coerced
            .fit(dest)
            .ok_or_else(|| DecodeError::type_mismatch(name, dest.to_string(), found.to_string()))
    }

    /// Decode a JSON object
    pub fn decode_json(&self, input: serde_json::Value) -> DecodeResult<IndexMap<String, Value>> {
        match Value::from(input) {
            Value::Map(map) => self.decode(map),
            other => Err(DecodeError::NotAMap {
                found: other.type_descriptor().to_string(),
            }),
        }
    }

    /// Decode `input` and deserialize the typed fields into `T`
    pub fn decode_into<T: DeserializeOwned>(&self, input: IndexMap<String, Value>) -> DecodeResult<T> {
        into_typed(self.decode(input)?)
    }

    /// Decode a JSON object and deserialize the typed fields into `T`
    pub fn decode_json_into<T: DeserializeOwned>(&self, input: serde_json::Value) -> DecodeResult<T> {
        into_typed(self.decode_json(input)?)
    }
}

fn into_typed<T: DeserializeOwned>(decoded: IndexMap<String, Value>) -> DecodeResult<T> {
    let document =
        serde_json::to_value(&decoded).map_err(|e| DecodeError::deserialize(e.to_string()))?;
    serde_json::from_value(document).map_err(|e| DecodeError::deserialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use decode_hooks_types::NumericKind;

    fn input(pairs: &[(&str, Value)]) -> IndexMap<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_unknown_fields_are_ignored_by_default() {
        let decoder = Decoder::new(Schema::new().field("count", TypeDescriptor::of::<u32>()));
        let out = decoder
            .decode(input(&[("count", Value::from("1K")), ("extra", Value::Bool(true))]))
            .unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out["count"], Value::from(1000u32));
    }

    #[test]
    fn test_unknown_fields_can_be_rejected() {
        let decoder = Decoder::with_config(
            Schema::new().field("count", TypeDescriptor::Numeric(NumericKind::U32)),
            DecoderConfig::new().error_unused(true),
        );
        let err = decoder
            .decode(input(&[("extra", Value::Bool(true))]))
            .unwrap_err();
        assert_eq!(err.field(), Some("extra"));
        assert!(matches!(err, DecodeError::UnknownField { .. }));
    }

    #[test]
    fn test_decode_json_requires_object() {
        let decoder = Decoder::new(Schema::new());
        let err = decoder.decode_json(serde_json::json!([1, 2])).unwrap_err();
        assert!(matches!(err, DecodeError::NotAMap { .. }));
    }
}
