//! Tests for reading and writing jspm settings in package.json

use std::fs;
use std::path::{Path, PathBuf};

use jspm_document::DocumentStore;
use jspm_fs::NormalizedPath;
use jspm_manifest::constants::manifest_key_order;
use jspm_manifest::{
    DependencyDescriptor, Error, ManifestConfig, ManifestWarning, Settings, parse_target,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use tempfile::TempDir;

fn settings() -> Settings {
    Settings::with_registry("npm")
}

fn parse(source: &str) -> ManifestConfig {
    let document = DocumentStore::parse(
        NormalizedPath::new("/project/package.json"),
        source,
        manifest_key_order(),
    )
    .unwrap();
    ManifestConfig::from_document(document, &settings()).unwrap()
}

fn rendered(config: &ManifestConfig) -> Value {
    serde_json::from_str(&config.render().unwrap()).unwrap()
}

fn manifest_file(source: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("package.json");
    fs::write(&path, source).unwrap();
    (temp, path)
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_public_base_url_with_lodash() {
    let source = r#"{
  "jspm": {
    "directories": {
      "baseURL": "public"
    },
    "dependencies": {
      "lodash": "^3.0.0"
    }
  }
}
"#;
    let (temp, path) = manifest_file(source);
    let mut config = ManifestConfig::load(&path, &settings()).unwrap();

    let root = NormalizedPath::absolute(temp.path()).unwrap();
    assert_eq!(config.base_url, root.join("public"));
    assert_eq!(config.packages, root.join("public/jspm_packages"));
    assert_eq!(
        config.dependencies["lodash"],
        Some(DependencyDescriptor::new("npm", "lodash", Some("^3.0.0".into())))
    );

    assert!(!config.write().unwrap(), "unmodified manifest must not be rewritten");
    assert_eq!(fs::read_to_string(&path).unwrap(), source);
}

#[test]
fn test_is_modified_tracks_pending_changes() {
    let (_temp, path) = manifest_file("{\n  \"jspm\": {}\n}\n");
    let mut config = ManifestConfig::load(&path, &settings()).unwrap();
    assert!(!config.is_modified().unwrap());

    config.lib = Some(config.document_root().resolve("src"));
    assert!(config.is_modified().unwrap());

    assert!(config.write().unwrap());
    assert!(!config.is_modified().unwrap());
}

#[test]
fn test_top_level_value_wins_over_namespace() {
    let config = parse(
        r#"{"directories": {"baseURL": "site"}, "jspm": {"directories": {"baseURL": "public"}}}"#,
    );
    assert_eq!(config.base_url.as_str(), "/project/site");
}

#[test]
fn test_legacy_config_file_is_read() {
    let config = parse(r#"{"jspm": {"configFile": "www/config.js"}}"#);
    assert_eq!(config.config_file().unwrap().as_str(), "/project/www/config.js");
}

#[test]
fn test_config_files_entry_wins_over_legacy_key() {
    let config = parse(r#"{"jspm": {"configFile": "old.js", "configFiles": {"jspm": "new.js"}}}"#);
    assert_eq!(config.config_file().unwrap().as_str(), "/project/new.js");
}

#[test]
fn test_overrides_are_opaque() {
    let config = parse(
        r#"{"jspm": {"overrides": {"npm:lodash@3.10.1": {"main": "index", "map": {"./x": "./y"}}}}}"#,
    );
    assert_eq!(
        config.overrides["npm:lodash@3.10.1"],
        json!({"main": "index", "map": {"./x": "./y"}})
    );
}

#[test]
fn test_malformed_manifest_fails_to_load() {
    let (_temp, path) = manifest_file("{\"jspm\": ");
    let err = ManifestConfig::load(&path, &settings()).unwrap_err();
    assert!(matches!(err, Error::Document(jspm_document::Error::Parse { .. })));
}

#[test]
fn test_invalid_dependency_target_fails_to_load() {
    let (_temp, path) = manifest_file(r#"{"jspm": {"dependencies": {"lodash": true}}}"#);
    let err = ManifestConfig::load(&path, &settings()).unwrap_err();
    assert!(matches!(err, Error::InvalidDependency { ref name, .. } if name == "lodash"));
}

// ============================================================================
// Path validation
// ============================================================================

#[rstest]
#[case("/var/www")]
#[case("https://cdn.example.com/app")]
#[case("C:\\www")]
#[case("assets//public")]
fn test_invalid_base_url_reverts_to_project_dir(#[case] value: &str) {
    let source = json!({"jspm": {"directories": {"baseURL": value}}}).to_string();
    let config = parse(&source);

    assert_eq!(config.base_url.as_str(), "/project");
    assert_eq!(
        config.warnings(),
        &[ManifestWarning::InvalidBaseUrl {
            value: value.to_string()
        }]
    );
    assert_eq!(
        rendered(&config),
        json!({"jspm": {"directories": {"baseURL": "."}}})
    );
}

#[test]
fn test_packages_outside_base_url_is_kept_with_warning() {
    let config = parse(
        r#"{"jspm": {"directories": {"baseURL": "public", "packages": "jspm_packages"}}}"#,
    );

    assert_eq!(config.packages.as_str(), "/project/jspm_packages");
    assert_eq!(
        config.warnings(),
        &[ManifestWarning::PackagesOutsideBaseUrl {
            packages: "jspm_packages".into(),
            base_url: "public".into(),
        }]
    );
}

// ============================================================================
// Default suppression
// ============================================================================

#[test]
fn test_defaults_are_not_added() {
    let config = parse(r#"{"registry": "npm"}"#);
    assert_eq!(rendered(&config), json!({"registry": "npm"}));
}

#[test]
fn test_explicit_default_is_kept() {
    let config = parse(r#"{"jspm": {"directories": {"packages": "jspm_packages"}}}"#);
    assert_eq!(
        rendered(&config),
        json!({"jspm": {"directories": {"packages": "jspm_packages"}}})
    );
}

#[test]
fn test_changed_value_is_written() {
    let mut config = parse(r#"{"jspm": {}}"#);
    config.packages = NormalizedPath::new("/project/vendor");

    assert_eq!(
        rendered(&config),
        json!({"jspm": {"directories": {"packages": "vendor"}}})
    );
}

#[test]
fn test_new_fields_follow_schema_order() {
    let mut config = parse(r#"{"jspm": {"registry": "npm", "dependencies": {}}}"#);
    config.name = Some("app".into());
    config.base_url = NormalizedPath::new("/project/www");
    config.packages = NormalizedPath::new("/project/www/jspm_packages");
    config.config_files.insert("jspm".into(), NormalizedPath::new("/project/www/jspm.js"));

    insta::assert_snapshot!(config.render().unwrap().trim_end(), @r#"
{
  "jspm": {
    "name": "app",
    "directories": {
      "baseURL": "www"
    },
    "registry": "npm",
    "dependencies": {}
  }
}
"#);
}

// ============================================================================
// Namespace convention
// ============================================================================

#[test]
fn test_namespaced_manifest_stays_namespaced() {
    let (temp, path) = manifest_file(r#"{"jspm": {"registry": "npm"}}"#);
    let mut config = ManifestConfig::load(&path, &settings()).unwrap();
    assert!(config.uses_namespace());

    config.base_url = config.document_root().resolve("public");
    config.packages = config.base_url.join("jspm_packages");
    let config_file = config.base_url.join("jspm.js");
    config.config_files.insert("jspm".into(), config_file);
    assert!(config.write().unwrap());

    assert_eq!(
        read_json(&path),
        json!({"jspm": {"registry": "npm", "directories": {"baseURL": "public"}}})
    );

    let reloaded = ManifestConfig::load(&path, &settings()).unwrap();
    assert!(reloaded.uses_namespace());
    assert_eq!(
        reloaded.base_url,
        NormalizedPath::absolute(temp.path()).unwrap().join("public")
    );
}

#[test]
fn test_top_level_manifest_stays_top_level() {
    let mut config = parse(r#"{"registry": "npm", "dependencies": {"lodash": "^3.0.0"}}"#);
    assert!(!config.uses_namespace());

    config.dependencies.insert(
        "jquery".into(),
        Some(parse_target("jquery", "github:components/jquery@2.1", "npm").unwrap()),
    );
    config.lib = Some(NormalizedPath::new("/project/src"));

    assert_eq!(
        rendered(&config),
        json!({
            "registry": "npm",
            "directories": {"lib": "src"},
            "dependencies": {"lodash": "^3.0.0", "jquery": "github:components/jquery@2.1"}
        })
    );
}

#[test]
fn test_existing_location_wins_over_convention() {
    let mut config = parse(r#"{"jspm": {}, "directories": {"baseURL": "www"}}"#);
    config.base_url = NormalizedPath::new("/project/public");
    config.packages = NormalizedPath::new("/project/public/jspm_packages");
    config.config_files.insert("jspm".into(), NormalizedPath::new("/project/public/jspm.js"));

    assert_eq!(
        rendered(&config),
        json!({"jspm": {}, "directories": {"baseURL": "public"}})
    );
}

#[test]
fn test_quirk_true_namespace_flag_keeps_fields_top_level() {
    let mut config = parse(r#"{"jspm": true, "directories": {"baseURL": "www"}}"#);
    assert!(!config.uses_namespace());
    assert!(config.namespace_aware());
    assert_eq!(config.base_url.as_str(), "/project/www");

    config.overrides.insert("npm:lodash".into(), json!({"main": "lodash.js"}));

    assert_eq!(
        rendered(&config),
        json!({
            "jspm": true,
            "directories": {"baseURL": "www"},
            "overrides": {"npm:lodash": {"main": "lodash.js"}}
        })
    );
}

#[test]
fn test_quirk_false_namespace_flag_still_nests_new_fields() {
    let mut config = parse(r#"{"jspm": false}"#);
    assert!(config.uses_namespace());

    config.overrides.insert("npm:lodash".into(), json!({"main": "lodash.js"}));

    assert_eq!(
        rendered(&config),
        json!({"jspm": {"overrides": {"npm:lodash": {"main": "lodash.js"}}}})
    );
}

// ============================================================================
// Namespace-unaware manifests
// ============================================================================

#[test]
fn test_quirk_unaware_manifest_drops_top_level_dev_dependencies() {
    let source = r#"{
  "name": "app",
  "dependencies": {
    "express": "^4.0.0"
  },
  "devDependencies": {
    "mocha": "^2.0.0"
  }
}
"#;
    let (_temp, path) = manifest_file(source);
    let mut config = ManifestConfig::load(&path, &settings()).unwrap();

    assert!(!config.namespace_aware());
    assert!(config.dependencies.is_empty());
    assert!(config.dev_dependencies.is_empty());

    // Groups are never read from unaware manifests, so the empty dev group
    // clears the top-level one while `dependencies` is left untouched.
    assert!(config.write().unwrap());
    assert_eq!(
        read_json(&path),
        json!({
            "name": "app",
            "dependencies": {"express": "^4.0.0"},
            "jspm": {}
        })
    );
}

#[test]
fn test_quirk_unaware_manifest_stores_new_dependencies_at_top_level() {
    let mut config = parse(r#"{"name": "app", "devDependencies": {"mocha": "^2.0.0"}}"#);
    config.dependencies.insert(
        "lodash".into(),
        Some(parse_target("lodash", "^4.0.0", config.registry()).unwrap()),
    );

    assert_eq!(
        rendered(&config),
        json!({
            "name": "app",
            "dependencies": {"lodash": "^4.0.0"},
            "jspm": {}
        })
    );
}

#[test]
fn test_missing_manifest_is_created() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("package.json");

    let mut config = ManifestConfig::load(&path, &settings()).unwrap();
    assert!(!config.namespace_aware());
    assert!(config.write().unwrap());

    assert_eq!(fs::read_to_string(&path).unwrap(), "{\n  \"jspm\": {}\n}\n");
}

// ============================================================================
// Dependencies
// ============================================================================

#[test]
fn test_dependency_forms_round_trip_through_file() {
    let (_temp, path) = manifest_file(r#"{"jspm": {"registry": "npm", "dependencies": {}}}"#);
    let mut config = ManifestConfig::load(&path, &settings()).unwrap();

    let deps = [
        ("lodash", DependencyDescriptor::new("npm", "lodash", Some("^3.0.0".into()))),
        ("lo", DependencyDescriptor::new("npm", "lodash", Some("^4.0.0".into()))),
        ("any", DependencyDescriptor::new("npm", "anything", None)),
        ("jquery", DependencyDescriptor::new("github", "components/jquery", Some("2.1".into()))),
    ];
    for (name, dep) in &deps {
        config.dependencies.insert(name.to_string(), Some(dep.clone()));
    }
    config.write().unwrap();

    assert_eq!(
        read_json(&path)["jspm"]["dependencies"],
        json!({
            "any": "anything@*",
            "jquery": "github:components/jquery@2.1",
            "lo": "lodash@^4.0.0",
            "lodash": "^3.0.0"
        })
    );

    let reloaded = ManifestConfig::load(&path, &settings()).unwrap();
    assert_eq!(reloaded.dependencies, config.dependencies);
}

#[test]
fn test_settings_registry_applies_without_document_registry() {
    let config = parse(r#"{"jspm": {"dependencies": {"jquery": "^2.1.0"}}}"#);
    assert_eq!(config.dependencies["jquery"].as_ref().unwrap().registry, "npm");

    let document = DocumentStore::parse(
        NormalizedPath::new("/project/package.json"),
        r#"{"jspm": {"dependencies": {"jquery": "^2.1.0"}}}"#,
        manifest_key_order(),
    )
    .unwrap();
    let config = ManifestConfig::from_document(document, &Settings::default()).unwrap();
    assert_eq!(
        config.dependencies["jquery"].as_ref().unwrap().exact_name(),
        "jspm:jquery@^2.1.0"
    );
}

// ============================================================================
// Clear-if-empty
// ============================================================================

#[test]
fn test_empty_groups_are_removed() {
    let mut config = parse(
        r#"{"jspm": {
            "dependencies": {"lodash": "^3.0.0"},
            "devDependencies": {"mocha": "^2.0.0"},
            "peerDependencies": {"react": "^15.0.0"},
            "overrides": {"npm:lodash": {"main": "x"}}
        }}"#,
    );

    config.dev_dependencies.clear();
    config.peer_dependencies.insert("react".into(), None);
    config.overrides.clear();

    assert_eq!(
        rendered(&config),
        json!({"jspm": {"dependencies": {"lodash": "^3.0.0"}}})
    );
}

#[test]
fn test_removed_last_dependency_leaves_empty_group() {
    let mut config = parse(r#"{"jspm": {"dependencies": {"lodash": "^3.0.0"}}}"#);
    config.dependencies.insert("lodash".into(), None);

    assert_eq!(rendered(&config), json!({"jspm": {"dependencies": {}}}));
}

#[test]
fn test_cleared_dependencies_leave_group_untouched() {
    let mut config = parse(r#"{"jspm": {"dependencies": {"lodash": "^3.0.0"}}}"#);
    config.dependencies.clear();

    assert_eq!(
        rendered(&config),
        json!({"jspm": {"dependencies": {"lodash": "^3.0.0"}}})
    );
}

#[test]
fn test_absent_dependencies_group_is_not_created() {
    let config = parse(r#"{"jspm": {"devDependencies": {"mocha": "^2.0.0"}}}"#);
    assert_eq!(
        rendered(&config),
        json!({"jspm": {"devDependencies": {"mocha": "^2.0.0"}}})
    );
}

// ============================================================================
// Config file location
// ============================================================================

#[test]
fn test_legacy_config_file_key_is_written_back() {
    let mut config = parse(r#"{"jspm": {"configFile": "config.js"}}"#);
    config.config_files.insert("jspm".into(), NormalizedPath::new("/project/www/config.js"));

    assert_eq!(
        rendered(&config),
        json!({"jspm": {"configFile": "www/config.js"}})
    );
}

#[test]
fn test_custom_config_file_uses_config_files() {
    let mut config = parse(r#"{"jspm": {}}"#);
    config.config_files.insert("jspm".into(), NormalizedPath::new("/project/loader.js"));

    assert_eq!(
        rendered(&config),
        json!({"jspm": {"configFiles": {"jspm": "loader.js"}}})
    );
}
