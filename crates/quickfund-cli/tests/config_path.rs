use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("quickfund")
        .env("QUICKFUND_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    assert!(!config_path.exists());

    cargo_bin_cmd!("quickfund")
        .env("QUICKFUND_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("language = \"en\""));
    assert!(contents.contains("# base_url ="));
}

#[test]
fn test_config_init_fails_if_exists() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "# existing config").unwrap();

    cargo_bin_cmd!("quickfund")
        .env("QUICKFUND_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_configured_language_drives_translate() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "language = \"hi\"\n").unwrap();

    cargo_bin_cmd!("quickfund")
        .env("QUICKFUND_HOME", dir.path())
        .args(["translate", "nav.home"])
        .assert()
        .success()
        .stdout(predicate::str::contains("होम"));

    cargo_bin_cmd!("quickfund")
        .env("QUICKFUND_HOME", dir.path())
        .args(["translate", "nav.home", "--lang", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Home"));
}

#[test]
fn test_languages_marks_active_language() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("quickfund")
        .env("QUICKFUND_HOME", dir.path())
        .args(["--lang", "ta", "languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* ta"))
        .stdout(predicate::str::contains("  en"));
}

#[test]
fn test_invalid_base_url_fails_to_load() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[auth]\nbase_url = \"ftp://example.com\"\n",
    )
    .unwrap();

    cargo_bin_cmd!("quickfund")
        .env("QUICKFUND_HOME", dir.path())
        .arg("languages")
        .assert()
        .failure()
        .stderr(predicate::str::contains("scheme must be http or https"));
}
