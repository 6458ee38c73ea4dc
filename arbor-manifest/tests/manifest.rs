//! arbor.toml parsing tests.

use std::path::{Path, PathBuf};

use arbor_manifest::{ArborToml, Error, Manifest};

const VALID: &str = r#"
[client]
language = "java"
namespace = "com.contoso.graph"
model = "model.json"
output = "generated"
"#;

#[test]
fn test_parse_valid() {
    let manifest = Manifest::parse_str(VALID).unwrap();
    assert_eq!(manifest.client.language, "java");
    assert_eq!(manifest.client.namespace, "com.contoso.graph");
    assert_eq!(manifest.client.model, PathBuf::from("model.json"));
    assert_eq!(manifest.client.output, PathBuf::from("generated"));
}

#[test]
fn test_invalid_namespace_points_at_value() {
    let src = VALID.replace("com.contoso.graph", "com..graph");
    let err = Manifest::parse_str(&src).unwrap_err();

    match *err {
        Error::InvalidNamespace {
            ref name, ref span, ref reason, ..
        } => {
            assert_eq!(name, "com..graph");
            assert_eq!(reason, "segments cannot be empty");
            let span = span.expect("span should be located");
            assert_eq!(&src[span.offset()..span.offset() + span.len()], "\"com..graph\"");
        }
        ref other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_output_rejected() {
    let src = VALID.replace("\"generated\"", "\"\"");
    let err = Manifest::parse_str(&src).unwrap_err();
    assert_eq!(err.to_string(), "'output' must not be empty");
}

#[test]
fn test_unknown_field_is_a_parse_error() {
    let src = format!("{VALID}flavor = \"spicy\"\n");
    let err = Manifest::parse_str(&src).unwrap_err();
    assert!(matches!(*err, Error::Parse { .. }));
}

#[test]
fn test_missing_client_table() {
    let err = Manifest::parse_str("").unwrap_err();
    assert!(matches!(*err, Error::Parse { .. }));
}

#[test]
fn test_open_resolves_model_against_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("arbor.toml");
    std::fs::write(&path, VALID).unwrap();

    let file = ArborToml::open(&path).unwrap();
    assert_eq!(file.base_dir(), temp.path());
    assert_eq!(file.model_path(), temp.path().join("model.json"));
    assert_eq!(file.content(), VALID);
}

#[test]
fn test_open_missing_file() {
    let err = ArborToml::open(Path::new("does/not/exist/arbor.toml")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}
