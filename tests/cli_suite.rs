use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

// Helper function to initialize the command to test.
fn themeloc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_themeloc"))
}

// Helper to lay out a config file plus a module resource tree.
fn write_fixture(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let base = dir.join("base");
    fs::create_dir_all(base.join("Resources/themes/dark")).unwrap();
    fs::create_dir_all(base.join("Resources/views")).unwrap();
    fs::write(base.join("Resources/themes/dark/template"), b"").unwrap();
    fs::write(base.join("Resources/views/template"), b"").unwrap();

    let config = dir.join("themeloc.kdl");
    fs::write(
        &config,
        format!(
            r#"themes active="dark" {{
    theme "default"
    theme "dark"
}}

modules {{
    module "Mod" "{}"
}}

default-dir "{}"
"#,
            base.display(),
            base.display()
        ),
    )
    .unwrap();

    (config, base)
}

#[test]
fn test_help_command() {
    let mut cmd = themeloc();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Resolves symbolic module resources",
        ));
}

#[test]
fn test_version_flag() {
    let mut cmd = themeloc();

    let version = env!("CARGO_PKG_VERSION");
    let expected = format!("themeloc {}", version);

    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn test_unknown_command_fails() {
    let mut cmd = themeloc();

    cmd.arg("unknown-command-xyz")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: themeloc"));
}

#[test]
fn test_locate_resolves_themed_template() {
    let tmp = tempfile::tempdir().unwrap();
    let (config, _base) = write_fixture(tmp.path());

    themeloc()
        .arg("--config")
        .arg(&config)
        .args(["locate", "@Mod/Resources/views/template"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resources/themes/dark/template"));
}

#[test]
fn test_locate_theme_override_flag() {
    let tmp = tempfile::tempdir().unwrap();
    let (config, _base) = write_fixture(tmp.path());

    // "default" has no themed variant, so the stock view wins
    themeloc()
        .arg("--config")
        .arg(&config)
        .args(["locate", "@Mod/Resources/views/template", "--theme", "default"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resources/views/template"));
}

#[test]
fn test_locate_json_output() {
    let tmp = tempfile::tempdir().unwrap();
    let (config, _base) = write_fixture(tmp.path());

    themeloc()
        .arg("--config")
        .arg(&config)
        .args(["locate", "@Mod/Resources/views/template", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\": \"v1\""))
        .stdout(predicate::str::contains("\"ok\": true"))
        .stdout(predicate::str::contains("\"theme\": \"dark\""));
}

#[test]
fn test_locate_rejects_traversal() {
    let tmp = tempfile::tempdir().unwrap();
    let (config, _base) = write_fixture(tmp.path());

    themeloc()
        .arg("--config")
        .arg(&config)
        .args(["locate", "@Mod/Resources/../views/template"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parent directory segment"));
}

#[test]
fn test_locate_missing_config() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("nope.kdl");

    themeloc()
        .arg("--config")
        .arg(&missing)
        .args(["locate", "@Mod/Resources/views/template"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_info_lists_themes_and_modules() {
    let tmp = tempfile::tempdir().unwrap();
    let (config, _base) = write_fixture(tmp.path());

    themeloc()
        .arg("--config")
        .arg(&config)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Active"))
        .stdout(predicate::str::contains("dark"))
        .stdout(predicate::str::contains("Mod"));
}

#[test]
fn test_init_writes_starter_config() {
    let tmp = tempfile::tempdir().unwrap();
    let config = tmp.path().join("fresh/themeloc.kdl");

    themeloc()
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .success();

    let written = fs::read_to_string(&config).unwrap();
    assert!(written.contains("themes active="));

    // A second init without --force leaves the file alone
    themeloc()
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
}
