//! End-to-end decode tests
//!
//! Decodes JSON-like maps into a typed settings struct through the full hook
//! chain, the way a host reading env vars or flags would.

use std::sync::Arc;

use decode_hooks::{
    Composer, DecodeError, Decoder, DecoderConfig, EnumDescriptor, ProtoEnum, Schema,
    TypeDescriptor, UriRef, Value,
};
use once_cell::sync::Lazy;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::Deserialize;
use serde_json::json;
use url::Url;

// ============================================================================
// Test Helpers
// ============================================================================

static LEVEL: Lazy<Arc<EnumDescriptor>> = Lazy::new(|| {
    EnumDescriptor::shared("Level", [("LEVEL_UNSPECIFIED", 0), ("DEBUG", 1), ("INFO", 2), ("WARN", 3)])
});

struct Level;

impl ProtoEnum for Level {
    fn descriptor() -> Arc<EnumDescriptor> {
        Arc::clone(&LEVEL)
    }
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
struct Settings {
    is_ok: bool,
    name: String,
    count: i64,
    ratio: f64,
    target: Option<Url>,
    buffer: u32,
    hosts: Vec<String>,
    level: i32,
    retries: Option<u8>,
}

fn schema() -> Schema {
    Schema::new()
        .field("is_ok", TypeDescriptor::of::<bool>())
        .field("name", TypeDescriptor::of::<String>())
        .field("count", TypeDescriptor::of::<i64>())
        .field("ratio", TypeDescriptor::of::<f64>())
        .field("target", TypeDescriptor::of::<Url>())
        .field("buffer", TypeDescriptor::of::<u32>())
        .field("hosts", TypeDescriptor::of::<Vec<String>>())
        .field("level", TypeDescriptor::of_enum::<Level>())
        .field("retries", TypeDescriptor::of::<Option<u8>>())
}

fn decode(input: serde_json::Value) -> Result<Settings, DecodeError> {
    Decoder::new(schema()).decode_json_into(input)
}

// ============================================================================
// Bool
// ============================================================================

#[rstest]
#[case(json!({"is_ok": true}), true)]
#[case(json!({"is_ok": "true"}), true)]
#[case(json!({"is_ok": "false"}), false)]
#[case(json!({"is_ok": "True"}), true)]
fn test_decode_bool(#[case] input: serde_json::Value, #[case] expected: bool) {
    assert_eq!(decode(input).unwrap().is_ok, expected);
}

#[test]
fn test_decode_bool_rejects_garbage() {
    let err = decode(json!({"is_ok": "notaboolean"})).unwrap_err();
    assert!(matches!(err, DecodeError::Coerce { .. }), "unexpected error: {err}");
    assert_eq!(err.field(), Some("is_ok"));
}

// ============================================================================
// Numeric
// ============================================================================

#[test]
fn test_decode_numeric() {
    assert_eq!(decode(json!({"count": 123})).unwrap().count, 123);
    assert_eq!(decode(json!({"count": "123"})).unwrap().count, 123);
    assert_eq!(decode(json!({"ratio": 2.5})).unwrap().ratio, 2.5);
    assert_eq!(decode(json!({"ratio": "2.5"})).unwrap().ratio, 2.5);
    assert_eq!(decode(json!({"buffer": "64Ki"})).unwrap().buffer, 65_536);
    assert_eq!(decode(json!({"ratio": "1.5M"})).unwrap().ratio, 1_500_000.0);
}

#[rstest]
#[case(json!({"count": true}))]
#[case(json!({"ratio": true}))]
#[case(json!({"count": 1.5}))]
#[case(json!({"buffer": -1}))]
fn test_decode_numeric_type_mismatch(#[case] input: serde_json::Value) {
    let err = decode(input).unwrap_err();
    assert!(matches!(err, DecodeError::TypeMismatch { .. }), "unexpected error: {err}");
}

#[rstest]
#[case(json!({"count": "notanint"}))]
#[case(json!({"ratio": "notafloat"}))]
#[case(json!({"buffer": "Ki"}))]
fn test_decode_numeric_parse_failure(#[case] input: serde_json::Value) {
    let err = decode(input).unwrap_err();
    assert!(matches!(err, DecodeError::Coerce { .. }), "unexpected error: {err}");
}

// ============================================================================
// URL
// ============================================================================

#[test]
fn test_decode_url() {
    let settings = decode(json!({"target": "http://google.fr/coco?123=456"})).unwrap();
    assert_eq!(settings.target.as_ref().and_then(Url::host_str), Some("google.fr"));

    let settings = decode(json!({"target": "file:///tmp/example.json"})).unwrap();
    assert_eq!(settings.target.map(|u| u.path().to_string()).as_deref(), Some("/tmp/example.json"));

    let settings = decode(json!({"target": "s3://mu-bucket/deep/nested/file.json"})).unwrap();
    assert_eq!(settings.target.as_ref().map(Url::scheme), Some("s3"));
}

#[test]
fn test_decode_url_rejects_number() {
    let err = decode(json!({"target": 1000})).unwrap_err();
    match err {
        DecodeError::TypeMismatch { field, expected, found } => {
            assert_eq!(field, "target");
            assert_eq!(expected, "url");
            assert_eq!(found, "i64");
        }
        other => panic!("Expected TypeMismatch, got: {other:?}"),
    }
}

#[test]
fn test_decode_relative_reference() {
    #[derive(Debug, Deserialize)]
    struct Source {
        location: UriRef,
    }

    let decoder = Decoder::new(Schema::new().field("location", TypeDescriptor::of::<UriRef>()));
    for input in ["/var/data/file.json", "google.fr"] {
        let source: Source = decoder.decode_json_into(json!({"location": input})).unwrap();
        assert_eq!(source.location, UriRef::Relative(input.to_string()));
    }

    let source: Source = decoder.decode_json_into(json!({"location": "https://example.com/a"})).unwrap();
    assert_eq!(source.location.as_url().map(Url::scheme), Some("https"));
}

#[test]
fn test_decode_infinite_optional_fails() {
    let decoder = Decoder::new(Schema::new().field("ratio", TypeDescriptor::of::<Option<f64>>()));
    let mut input = indexmap::IndexMap::new();
    input.insert("ratio".to_string(), Value::from(f64::INFINITY));
    let err = decoder.decode(input).unwrap_err();
    assert!(matches!(err, DecodeError::Coerce { .. }), "unexpected error: {err}");
}

// ============================================================================
// Lists, enums, optionals
// ============================================================================

#[test]
fn test_decode_string_list() {
    assert_eq!(decode(json!({"hosts": "a,b,,c"})).unwrap().hosts, vec!["a", "b", "", "c"]);
    assert_eq!(decode(json!({"hosts": ["x", "y"]})).unwrap().hosts, vec!["x", "y"]);
}

#[test]
fn test_decode_enum() {
    assert_eq!(decode(json!({"level": "WARN"})).unwrap().level, 3);
    assert_eq!(decode(json!({"level": 2})).unwrap().level, 2);

    let err = decode(json!({"level": "TRACE"})).unwrap_err();
    assert_eq!(err.to_string(), "field 'level': invalid Level value: TRACE");
}

#[test]
fn test_decode_optional() {
    assert_eq!(decode(json!({"retries": "3"})).unwrap().retries, Some(3));
    assert_eq!(decode(json!({"retries": 7})).unwrap().retries, Some(7));
    assert_eq!(decode(json!({"retries": null})).unwrap().retries, None);
    assert!(decode(json!({"retries": "1Ki"})).is_ok());
    assert!(matches!(
        decode(json!({"retries": 1000})).unwrap_err(),
        DecodeError::Coerce { .. }
    ));
}

#[test]
fn test_decode_full_settings() {
    let settings = decode(json!({
        "is_ok": "T",
        "name": "primary",
        "count": "2K",
        "ratio": "0.25",
        "target": "https://example.com/api",
        "buffer": "1Mi",
        "hosts": "db1,db2",
        "level": "INFO",
        "retries": "5",
        "unused": "ignored",
    }))
    .unwrap();

    assert_eq!(
        settings,
        Settings {
            is_ok: true,
            name: "primary".to_string(),
            count: 2_000,
            ratio: 0.25,
            target: Some(Url::parse("https://example.com/api").unwrap()),
            buffer: 1 << 20,
            hosts: vec!["db1".to_string(), "db2".to_string()],
            level: 2,
            retries: Some(5),
        }
    );
}

#[test]
fn test_decode_without_hooks_is_strict() {
    let decoder = Decoder::with_config(schema(), DecoderConfig::new().with_composer(Composer::new()));
    let err = decoder.decode_json(json!({"count": "123"})).unwrap_err();
    assert!(matches!(err, DecodeError::TypeMismatch { .. }));

    let out = decoder.decode_json(json!({"count": 123})).unwrap();
    assert_eq!(out["count"], Value::from(123i64));
}
