use assert_cmd::Command;
use predicates::prelude::*;

fn simroom() -> Command {
    let mut cmd = Command::cargo_bin("simroom").unwrap();
    cmd.env_remove("SIMROOM_FORMAT").env_remove("SIMROOM_CONFIG");
    cmd
}

#[test]
fn test_help_exits_zero() {
    simroom()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("simroom"));
}

#[test]
fn test_describe_ipad_text() {
    simroom()
        .args(["describe", "iPad Air (5th generation)", "--udid", "ABC-123", "--state", "Shutdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("platform:        iPad"))
        .stdout(predicate::str::contains("state:           Shutdown"))
        .stdout(predicate::str::contains("com.apple.ipad-pro-12point9-2"));
}

#[test]
fn test_describe_json() {
    let assert = simroom()
        .args(["-f", "json", "describe", "iPhone 11 Pro Max", "--udid", "ABC-123", "--state", "Booted"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(value["name"], "iPhone 11 Pro Max");
    assert_eq!(value["udid"], "ABC-123");
    assert_eq!(value["platform"], "iphone");
    assert_eq!(value["state"], "booted");
    assert_eq!(value["type_identifier"], "com.apple.iphone-11-1");
}

#[test]
fn test_describe_model_overrides_name() {
    simroom()
        .args(["describe", "Kiosk", "--udid", "K", "--model", "com.apple.apple-tv-4k-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("platform:        Apple TV"))
        .stdout(predicate::str::contains("icon:            appletv"))
        .stdout(predicate::str::contains("state:           Unknown"));
}

#[test]
fn test_describe_uses_configured_udid() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    simroom()
        .args(["--config", config.to_str().unwrap(), "config", "set-default-udid", "PINNED-UDID"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PINNED-UDID"));

    simroom()
        .args(["--config", config.to_str().unwrap(), "describe", "iPhone 15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("udid:            PINNED-UDID"));

    simroom()
        .args(["--config", config.to_str().unwrap(), "config", "clear-default-udid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(none)"));

    simroom()
        .args(["--config", config.to_str().unwrap(), "describe", "iPhone 15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("udid:            booted"));
}

#[test]
fn test_state_classification() {
    simroom()
        .args(["state", "ShuttingDown"])
        .assert()
        .success()
        .stdout("Shutting Down\n");

    simroom()
        .args(["state", "booted"])
        .assert()
        .success()
        .stdout("Unknown\n");
}

#[test]
fn test_sort_names() {
    simroom()
        .args(["sort", "iPhone 15", "Apple TV", "iPad mini"])
        .assert()
        .success()
        .stdout("Apple TV\niPad mini\niPhone 15\n");
}

#[test]
fn test_sort_requires_names() {
    simroom().arg("sort").assert().failure();
}

#[test]
fn test_platforms_json() {
    let assert = simroom().args(["--format", "json", "platforms"]).assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let list = value.as_array().unwrap();

    assert_eq!(list.len(), 4);
    assert_eq!(list[2]["platform"], "watch");
    assert_eq!(list[2]["display_name"], "Apple Watch");
}
