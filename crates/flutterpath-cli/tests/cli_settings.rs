use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn flutterpath() -> Command {
    Command::cargo_bin("flutterpath").unwrap()
}

#[test]
fn settings_lists_plugins_and_includes() {
    flutterpath()
        .args(["settings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dev.flutter.flutter-plugin-loader 1.0.0"))
        .stdout(predicate::str::contains(
            "com.android.application 8.9.1 (apply false)",
        ))
        .stdout(predicate::str::contains(":app"))
        .stdout(predicate::str::contains("gradlePluginPortal"));
}

#[test]
fn settings_json_output() {
    flutterpath()
        .args(["settings", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"plugins\""))
        .stdout(predicate::str::contains("\"org.jetbrains.kotlin.android\""));
}

#[test]
fn settings_unknown_format_fails() {
    flutterpath()
        .args(["settings", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}

#[test]
fn help_lists_commands() {
    flutterpath()
        .args(["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("doctor"))
        .stdout(predicate::str::contains("settings"));
}
