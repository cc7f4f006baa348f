//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn typedrop_bin() -> Command {
    Command::cargo_bin("typedrop").expect("binary builds")
}

#[test]
fn help_output() {
    typedrop_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("insert"))
        .stdout(predicate::str::contains("listen"))
        .stdout(predicate::str::contains("permission"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_output() {
    typedrop_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("typedrop"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn insert_help_lists_options() {
    typedrop_bin()
        .args(["insert", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--delay-ms"))
        .stdout(predicate::str::contains("--no-fallback"))
        .stdout(predicate::str::contains("--notify"));
}

#[test]
fn insert_without_text_is_a_usage_error() {
    typedrop_bin().arg("insert").assert().failure();
}

#[test]
fn config_help() {
    typedrop_bin()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn config_path_command() {
    typedrop_bin()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("typedrop"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_get_unknown_key() {
    typedrop_bin()
        .args(["config", "get", "unknown_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_set_unknown_key() {
    typedrop_bin()
        .args(["config", "set", "unknown_key", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid keys"));
}

#[test]
fn config_set_invalid_boolean() {
    typedrop_bin()
        .args(["config", "set", "fallback", "maybe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("true").or(predicate::str::contains("false")));
}

#[test]
fn config_set_invalid_delay() {
    typedrop_bin()
        .args(["config", "set", "delay_ms", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("milliseconds"));
}

#[test]
fn config_set_invalid_hotkey() {
    typedrop_bin()
        .args(["config", "set", "hotkey", "definitely not a chord"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid hotkey"));
}

#[test]
fn config_set_get_round_trip() {
    let dir = tempfile::tempdir().expect("temp config dir");

    typedrop_bin()
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "set", "snippet", "kind regards"])
        .assert()
        .success();

    typedrop_bin()
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "get", "snippet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kind regards"));
}

#[test]
fn config_list_with_no_file() {
    typedrop_bin()
        .args(["config", "list"])
        .env("HOME", "/nonexistent")
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .assert()
        .success()
        .stdout(predicate::str::contains("snippet"))
        .stdout(predicate::str::contains("not set"));
}

#[test]
fn config_init_then_init_again_fails() {
    let dir = tempfile::tempdir().expect("temp config dir");

    typedrop_bin()
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success();

    typedrop_bin()
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn listen_without_snippet_is_a_usage_error() {
    typedrop_bin()
        .arg("listen")
        .env("HOME", "/nonexistent")
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .assert()
        .failure()
        .stderr(predicate::str::contains("snippet"));
}

#[test]
fn listen_with_invalid_hotkey_is_a_usage_error() {
    typedrop_bin()
        .args(["listen", "--snippet", "hi", "--hotkey", "garbage"])
        .env("HOME", "/nonexistent")
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid hotkey"));
}
