//! Integration tests for the kserver binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a Command for the kserver binary, isolated from user config
fn kserver_cmd() -> Command {
    let mut cmd = Command::cargo_bin("kserver").expect("Failed to find kserver binary");
    cmd.env_remove("KSERVER_CONFIG").env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// plan Command Tests
// ============================================================================

#[test]
fn test_plan_defaults_to_ktor() {
    let temp = TempDir::new().unwrap();
    kserver_cmd()
        .current_dir(temp.path())
        .args(["plan", "--no-user-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ktor"))
        .stdout(predicate::str::contains("Dockerfile"))
        .stdout(predicate::str::contains("ApiKeyAuth.kt"))
        .stdout(predicate::str::contains("11 artifacts planned"))
        .stderr(predicate::str::contains("Default to ktor"));
}

#[test]
fn test_plan_spec_only() {
    let temp = TempDir::new().unwrap();
    kserver_cmd()
        .current_dir(temp.path())
        .args(["plan", "--no-user-config", "-l", "jaxrs-spec"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jaxrs-spec"))
        .stdout(predicate::str::contains("Dockerfile").not())
        .stdout(predicate::str::contains("4 artifacts planned"));
}

#[test]
fn test_plan_json_output() {
    let temp = TempDir::new().unwrap();
    let output = kserver_cmd()
        .current_dir(temp.path())
        .args([
            "plan",
            "--no-user-config",
            "--json",
            "-o",
            "library=ktor",
            "-o",
            "featureResources=false",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["options"]["library"], "ktor");
    assert_eq!(json["options"]["configuration"]["featureResources"], false);
    let templates: Vec<_> = json["plan"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["template"].as_str().unwrap().to_string())
        .collect();
    assert!(!templates.contains(&"Paths.kt.mustache".to_string()));
    assert_eq!(templates.len(), 10);
}

#[test]
fn test_plan_reads_project_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("kserver.toml"),
        "[options]\nlibrary = \"jaxrs-spec\"\ninterfaceOnly = true\n",
    )
    .unwrap();

    kserver_cmd()
        .args(["plan", "--no-user-config", "-C"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("interfaceOnly"))
        .stdout(predicate::str::contains("4 artifacts planned"));
}

#[test]
fn test_plan_invalid_boolean_warns_but_succeeds() {
    let temp = TempDir::new().unwrap();
    kserver_cmd()
        .current_dir(temp.path())
        .args(["plan", "--no-user-config", "-o", "featureCORS=yes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not a boolean"));
}

#[test]
fn test_plan_reports_each_warning_once() {
    let temp = TempDir::new().unwrap();
    let output = kserver_cmd()
        .current_dir(temp.path())
        .args(["plan", "--no-user-config", "-o", "featureCORS=maybe"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("not a boolean").count(), 1, "stderr: {stderr}");
    assert!(!stderr.contains("Some("));
}

#[test]
fn test_plan_missing_config_file_fails() {
    let temp = TempDir::new().unwrap();
    kserver_cmd()
        .current_dir(temp.path())
        .args(["plan", "--no-user-config", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_plan_malformed_override_is_rejected() {
    kserver_cmd()
        .args(["plan", "-o", "featureCORS"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("key=value"));
}

// ============================================================================
// options / libraries Command Tests
// ============================================================================

#[test]
fn test_options_lists_feature_flags() {
    kserver_cmd()
        .arg("options")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recognized Options"))
        .stdout(predicate::str::contains("featureAutoHead"))
        .stdout(predicate::str::contains("interfaceOnly"))
        .stdout(predicate::str::contains("packageName"));
}

#[test]
fn test_options_json_is_array() {
    let output = kserver_cmd().args(["options", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items[0]["key"], "library");
    assert_eq!(items[0]["default"], "ktor");
}

#[test]
fn test_libraries_shows_support_matrix() {
    kserver_cmd()
        .arg("libraries")
        .assert()
        .success()
        .stdout(predicate::str::contains("ktor"))
        .stdout(predicate::str::contains("jaxrs-spec"))
        .stdout(predicate::str::contains("featureCORS"))
        .stdout(predicate::str::contains("useCoroutines"));
}

#[test]
fn test_no_command_shows_hint() {
    kserver_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("kserver --help"));
}
