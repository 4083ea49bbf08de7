use assert_cmd::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn script_prints_embedded_awk_verbatim() {
    let tmp = tempdir().unwrap();
    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("../core/assets/help.awk");
    let expected = fs::read_to_string(source).unwrap();

    Command::new(assert_cmd::cargo::cargo_bin!("mkhelp"))
        .env("XDG_CONFIG_HOME", tmp.path())
        .arg("script")
        .assert()
        .success()
        .stdout(expected);
}
