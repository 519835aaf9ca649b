//! Tests for error handling, suggestions and exit codes.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn reactor(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("reactor").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("REACTOR_TEMPLATES_DIR");
    cmd
}

#[test]
fn test_store_without_architecture_suggests_init() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();

    reactor(home.path())
        .current_dir(project.path())
        .args(["generate", "store", "Test"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Suggestions:"));

    assert!(!project.path().join("src").exists());
}

#[test]
fn test_invalid_artifact_name() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();

    reactor(home.path())
        .current_dir(project.path())
        .args(["generate", "class", "../Escape"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid name"));
}

#[test]
fn test_subdir_cannot_leave_the_project() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();

    reactor(home.path())
        .current_dir(project.path())
        .args(["generate", "class", "Foo", "--subdir", "../../outside"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("leaves the project directory"));

    assert!(!project.path().join("src").exists());
}

#[test]
fn test_init_rejects_path_like_app_name() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();

    reactor(home.path())
        .current_dir(project.path())
        .args(["init", "foo/bar", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("app-name"));

    reactor(home.path())
        .current_dir(project.path())
        .args(["init", "foo/bar", "--yes", "--dry-run"])
        .assert()
        .code(2);

    assert!(!project.path().join(".yo-rc.json").exists());
    assert!(!project.path().join("package.json").exists());
}

#[test]
fn test_config_set_rejects_escaping_app_path() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();

    reactor(home.path())
        .current_dir(project.path())
        .args(["config", "set", "appPath", "../elsewhere"])
        .assert()
        .code(2);

    reactor(home.path())
        .current_dir(project.path())
        .args(["config", "set", "app-name", "2048"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("app-name"));

    assert!(!project.path().join(".yo-rc.json").exists());
}

#[test]
fn test_unknown_config_key_is_not_found() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();

    reactor(home.path())
        .current_dir(project.path())
        .args(["config", "get", "lang"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown config key 'lang'"));
}

#[test]
fn test_invalid_config_value_is_rejected() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();

    reactor(home.path())
        .current_dir(project.path())
        .args(["config", "set", "architecture", "redux"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("redux"));

    assert!(!project.path().join(".yo-rc.json").exists());
}

#[test]
fn test_init_twice_requires_force() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();

    reactor(home.path())
        .current_dir(project.path())
        .args(["init", "app", "--yes"])
        .assert()
        .success();

    reactor(home.path())
        .current_dir(project.path())
        .args(["init", "app", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    reactor(home.path())
        .current_dir(project.path())
        .args(["init", "app", "--architecture", "flux", "--yes", "--force"])
        .assert()
        .success();
}

#[test]
fn test_broken_project_config_is_configuration_error() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    std::fs::write(project.path().join(".yo-rc.json"), "{ not json").unwrap();

    reactor(home.path())
        .current_dir(project.path())
        .args(["generate", "class", "Util"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains(".yo-rc.json"));
}

#[test]
fn test_missing_user_config_file() {
    let home = TempDir::new().unwrap();

    reactor(home.path())
        .args(["--config"])
        .arg(home.path().join("absent.toml"))
        .arg("list")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let home = TempDir::new().unwrap();
    reactor(home.path())
        .arg("scaffold")
        .assert()
        .code(2);
}
