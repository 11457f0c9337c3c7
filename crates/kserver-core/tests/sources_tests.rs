//! Tests for layered option sources

use kserver_core::{ConfigResolver, Error, Library, OptionSources, RawOptions};
use std::fs;
use tempfile::TempDir;

fn write(path: &std::path::Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_project_file_is_discovered() {
    let temp = TempDir::new().unwrap();
    write(
        &temp.path().join("kserver.toml"),
        r#"
[options]
library = "jaxrs-spec"
interfaceOnly = true
"#,
    );

    let raw = OptionSources::new(temp.path())
        .without_user_defaults()
        .load()
        .unwrap();

    assert_eq!(raw.get("library"), Some("jaxrs-spec"));
    assert_eq!(raw.get("interfaceOnly"), Some("true"));
}

#[test]
fn test_layers_override_in_order() {
    let temp = TempDir::new().unwrap();
    let user_dir = temp.path().join("user");
    let project_dir = temp.path().join("project");

    write(
        &user_dir.join("config.toml"),
        r#"
[options]
packageName = "com.user"
featureCORS = true
featureMetrics = false
"#,
    );
    write(
        &project_dir.join("kserver.toml"),
        r#"
[options]
packageName = "com.project"
featureCORS = false
"#,
    );

    let raw = OptionSources::new(&project_dir)
        .with_user_config_dir(&user_dir)
        .with_overrides(&RawOptions::new().with("featureCORS", "true"))
        .load()
        .unwrap();

    // User-only value survives
    assert_eq!(raw.get("featureMetrics"), Some("false"));
    // Project overrides user
    assert_eq!(raw.get("packageName"), Some("com.project"));
    // Command line overrides project
    assert_eq!(raw.get("featureCORS"), Some("true"));
}

#[test]
fn test_explicit_project_file_replaces_discovery() {
    let temp = TempDir::new().unwrap();
    write(
        &temp.path().join("kserver.toml"),
        "[options]\nlibrary = \"ktor\"\n",
    );
    let explicit = temp.path().join("alt").join("spec.toml");
    write(&explicit, "[options]\nlibrary = \"spec-only\"\n");

    let raw = OptionSources::new(temp.path())
        .without_user_defaults()
        .with_project_file(&explicit)
        .load()
        .unwrap();

    let resolution = ConfigResolver::new().resolve(&raw);
    assert_eq!(resolution.library(), Library::JaxrsSpec);
}

#[test]
fn test_invalid_project_file_is_reported() {
    let temp = TempDir::new().unwrap();
    write(&temp.path().join("kserver.toml"), "[options\nlibrary = 1");

    let result = OptionSources::new(temp.path())
        .without_user_defaults()
        .load();

    assert!(matches!(result, Err(Error::TomlDe(_))));
}

#[test]
fn test_nested_table_value_is_rejected() {
    let temp = TempDir::new().unwrap();
    write(
        &temp.path().join("kserver.toml"),
        "[options.library]\nname = \"ktor\"\n",
    );

    let err = OptionSources::new(temp.path())
        .without_user_defaults()
        .load()
        .unwrap_err();

    assert!(err.to_string().contains("library"));
}
