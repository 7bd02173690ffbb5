use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn flutterpath() -> Command {
    Command::cargo_bin("flutterpath").unwrap()
}

#[test]
fn resolve_prints_sdk_root() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("local.properties"),
        "flutter.sdk=/opt/flutter\n",
    )
    .unwrap();

    flutterpath()
        .current_dir(tmp.path())
        .args(["resolve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/opt/flutter"));
}

#[test]
fn resolve_gradle_prints_flutter_tools_project() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("local.properties"),
        "flutter.sdk=/opt/flutter\n",
    )
    .unwrap();

    flutterpath()
        .current_dir(tmp.path())
        .args(["resolve", "--gradle"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "/opt/flutter/packages/flutter_tools/gradle",
        ));
}

#[test]
fn resolve_json_emits_all_paths() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("local.properties"),
        "flutter.sdk=/opt/flutter\n",
    )
    .unwrap();

    flutterpath()
        .current_dir(tmp.path())
        .args(["resolve", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"root\""))
        .stdout(predicate::str::contains("\"flutter_tools_gradle_dir\""));
}

#[test]
fn resolve_from_nested_directory() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("local.properties"),
        "flutter.sdk=/opt/flutter\n",
    )
    .unwrap();
    let nested = tmp.path().join("app").join("src");
    fs::create_dir_all(&nested).unwrap();

    flutterpath()
        .current_dir(&nested)
        .args(["resolve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/opt/flutter"));
}

#[test]
fn resolve_explicit_properties_flag() {
    let tmp = TempDir::new().unwrap();
    let store = tmp.path().join("ci.properties");
    fs::write(&store, "flutter.sdk=/ci/flutter\n").unwrap();

    flutterpath()
        .args(["resolve", "--properties", store.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("/ci/flutter"));
}

#[test]
fn resolve_without_store_fails_with_guidance() {
    let tmp = TempDir::new().unwrap();
    let store = tmp.path().join("local.properties");

    flutterpath()
        .args(["resolve", "--properties", store.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn resolve_without_property_fails() {
    let tmp = TempDir::new().unwrap();
    let store = tmp.path().join("local.properties");
    fs::write(&store, "sdk.dir=/home/dev/Android/Sdk\n").unwrap();

    flutterpath()
        .args(["resolve", "--properties", store.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("flutter.sdk property not set"));
}

#[test]
fn resolve_blank_property_fails() {
    let tmp = TempDir::new().unwrap();
    let store = tmp.path().join("local.properties");
    fs::write(&store, "flutter.sdk=   \n").unwrap();

    flutterpath()
        .args(["resolve", "--properties", store.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("flutter.sdk property not set"));
}

#[test]
fn resolve_unknown_format_fails() {
    let tmp = TempDir::new().unwrap();
    let store = tmp.path().join("local.properties");
    fs::write(&store, "flutter.sdk=/opt/flutter\n").unwrap();

    flutterpath()
        .args([
            "resolve",
            "--properties",
            store.to_str().unwrap(),
            "--format",
            "yaml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}
