use assert_cmd::Command;
use predicates::prelude::*;

// These tests only exercise the dispatch surface; nothing here runs a
// plugin's execute phase, so the live keyring and network stay untouched.

fn toolkit() -> Command {
    Command::cargo_bin("translator-toolkit").unwrap()
}

#[test]
fn list_shows_the_shipped_plugins() {
    toolkit()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available plugins:"))
        .stdout(predicate::str::contains(
            "SetCredentials - Sets the credentials for use with the Translator service.",
        ));
}

#[test]
fn no_plugin_name_prints_the_catalog_and_fails() {
    toolkit()
        .assert()
        .code(2)
        .stdout(predicate::str::contains("SetCredentials"));
}

#[test]
fn unknown_plugin_reports_an_error_and_the_catalog() {
    toolkit()
        .arg("Nonexistent")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown plugin 'Nonexistent'."))
        .stdout(predicate::str::contains("Available plugins:"));
}
