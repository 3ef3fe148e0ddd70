//! Tests for DocumentStore loading, editing and persistence

use std::fs;

use jspm_document::{DocumentStore, Error, KeyOrder};
use jspm_fs::NormalizedPath;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Map, Value, json};
use tempfile::TempDir;

fn manifest_order() -> KeyOrder {
    let directories = KeyOrder::new().key("baseURL").key("packages").key("lib");
    KeyOrder::new()
        .key("name")
        .nested("directories", directories)
        .key("registry")
        .key("dependencies")
}

fn parse(source: &str) -> DocumentStore {
    DocumentStore::parse(
        NormalizedPath::new("/project/package.json"),
        source,
        manifest_order(),
    )
    .unwrap()
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn test_has_and_get_value() {
    let doc = parse(r#"{"jspm": {"directories": {"baseURL": "public"}}, "private": null}"#);

    assert!(doc.has(&["jspm", "directories"]));
    assert!(doc.has(&["private"]));
    assert!(!doc.has(&["jspm", "registry"]));
    assert_eq!(
        doc.get_value(&["jspm", "directories", "baseURL"]).unwrap(),
        Some(json!("public"))
    );
    assert_eq!(doc.get_value(&["private"]).unwrap(), None);
}

#[rstest]
#[case(r#"{"v": "x"}"#, Some(json!("x")))]
#[case(r#"{"v": 3}"#, Some(json!(3)))]
#[case(r#"{"v": false}"#, Some(json!(false)))]
#[case(r#"{"v": null}"#, None)]
#[case("{}", None)]
fn test_get_value_scalars(#[case] source: &str, #[case] expected: Option<Value>) {
    assert_eq!(parse(source).get_value(&["v"]).unwrap(), expected);
}

#[test]
fn test_get_value_on_object_is_type_error() {
    let doc = parse(r#"{"jspm": {"registry": "npm"}}"#);
    let err = doc.get_value(&["jspm"]).unwrap_err();
    assert!(matches!(err, Error::NotAScalar { ref path, .. } if path == "jspm"));
}

#[test]
fn test_get_object_rejects_nested_members_unless_allowed() {
    let doc = parse(r#"{"overrides": {"npm:lodash": {"main": "index.js"}}}"#);

    let err = doc.get_object(&["overrides"], false).unwrap_err();
    assert!(matches!(err, Error::NestedValue { ref path } if path == "overrides.npm:lodash"));

    let overrides = doc.get_object(&["overrides"], true).unwrap().unwrap();
    assert_eq!(overrides["npm:lodash"], json!({"main": "index.js"}));
}

#[test]
fn test_get_object_on_scalar_is_type_error() {
    let doc = parse(r#"{"dependencies": "lodash"}"#);
    let err = doc.get_object(&["dependencies"], false).unwrap_err();
    assert!(matches!(err, Error::NotAnObject { found: "a string", .. }));
}

#[test]
fn test_set_value_inserts_by_schema_order() {
    let mut doc = parse(r#"{"name": "app", "dependencies": {}}"#);
    doc.set_value(&["directories", "baseURL"], json!("public"));

    let rendered: serde_json::Value = serde_json::from_str(&doc.render().unwrap()).unwrap();
    let keys: Vec<_> = rendered.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["name", "directories", "dependencies"]);
}

#[test]
fn test_set_object_keeps_existing_member_order() {
    let mut doc = parse(r#"{"dependencies": {"react": "^15.0.0", "lodash": "^3.0.0"}}"#);

    doc.set_object(
        &["dependencies"],
        object(json!({"jquery": "2", "lodash": "^4.0.0", "react": "^15.0.0"})),
        false,
    );

    let deps = doc.get_object(&["dependencies"], false).unwrap().unwrap();
    let keys: Vec<_> = deps.keys().cloned().collect();
    assert_eq!(keys, vec!["react", "lodash", "jquery"]);
    assert_eq!(deps["lodash"], json!("^4.0.0"));
}

#[test]
fn test_set_object_clear_if_empty_removes_key() {
    let mut doc = parse(r#"{"devDependencies": {"mocha": "^2.0.0"}, "name": "app"}"#);

    doc.set_object(&["devDependencies"], Map::new(), true);

    assert!(!doc.has(&["devDependencies"]));
    assert!(doc.has(&["name"]));
}

#[test]
fn test_set_object_empty_without_clear_writes_empty_object() {
    let mut doc = parse("{}");
    doc.set_object(&["jspm"], Map::new(), false);
    assert_eq!(doc.get(&["jspm"]), Some(&json!({})));
}

#[test]
fn test_rejects_non_object_root() {
    let result = DocumentStore::parse(NormalizedPath::new("/p/package.json"), "[1, 2]", KeyOrder::new());
    assert!(matches!(result, Err(Error::RootNotObject { .. })));
}

#[test]
fn test_rejects_malformed_json() {
    let result = DocumentStore::parse(NormalizedPath::new("/p/package.json"), "{\"name\": ", KeyOrder::new());
    assert!(matches!(result, Err(Error::Parse { .. })));
}

#[test]
fn test_render_preserves_indentation() {
    let mut doc = parse("{\n    \"name\": \"app\"\n}\n");
    doc.set_value(&["registry"], json!("npm"));

    insta::assert_snapshot!(doc.render().unwrap().trim_end(), @r#"
{
    "name": "app",
    "registry": "npm"
}
"#);
}

#[test]
fn test_load_missing_file_starts_empty_and_write_creates_it() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("package.json");

    let mut doc = DocumentStore::load(&path, KeyOrder::new()).unwrap();
    assert!(!doc.has(&["name"]));

    doc.set_value(&["name"], json!("app"));
    assert!(doc.write().unwrap());

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "{\n  \"name\": \"app\"\n}\n");
}

#[test]
fn test_write_skips_unchanged_document() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("package.json");
    fs::write(&path, "{\n  \"name\": \"app\",\n  \"version\": \"1.0.0\"\n}\n").unwrap();

    let mut doc = DocumentStore::load(&path, KeyOrder::new()).unwrap();
    assert!(!doc.is_modified().unwrap());
    assert!(!doc.write().unwrap());

    doc.set_value(&["version"], json!("1.0.1"));
    assert!(doc.is_modified().unwrap());
    assert!(doc.write().unwrap());
    assert!(!doc.write().unwrap());

    let reloaded = DocumentStore::load(&path, KeyOrder::new()).unwrap();
    assert_eq!(reloaded.get_value(&["version"]).unwrap(), Some(json!("1.0.1")));
}

#[test]
fn test_load_resolves_absolute_file_name() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("package.json");
    fs::write(&path, "{}").unwrap();

    let doc = DocumentStore::load(&path, KeyOrder::new()).unwrap();
    assert!(doc.file_name().is_absolute());
    assert_eq!(doc.file_name().file_name(), Some("package.json"));
}
