use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn project_makefile() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../Makefile")
}

fn mkhelp(xdg: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mkhelp"));
    cmd.env("XDG_CONFIG_HOME", xdg); // no user config
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn docs_prints_text_help_for_project_makefile() {
    let tmp = tempdir().unwrap();
    mkhelp(tmp.path())
        .arg("docs")
        .arg(project_makefile())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Verbs:\n help: Print help message\n"))
        .stdout(predicate::str::contains("    check_all: Run all checks"))
        .stdout(predicate::str::contains("   fix_lint: Fix lint"));
}

#[test]
fn docs_renders_every_format() {
    let tmp = tempdir().unwrap();
    for format in ["text", "markdown", "html", "json"] {
        mkhelp(tmp.path())
            .args(["docs", "--format", format])
            .arg(project_makefile())
            .assert()
            .success()
            .stdout(predicate::str::contains("check_tests"));
    }
}

#[test]
fn bare_invocation_reads_makefile_in_current_dir() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("Makefile"), "## Build everything\nall:\n").unwrap();

    mkhelp(tmp.path())
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(" all: Build everything\n");
}

#[test]
fn bare_invocation_takes_makefile_path() {
    let tmp = tempdir().unwrap();
    let makefile = tmp.path().join("path").join("to").join("Makefile");
    fs::create_dir_all(makefile.parent().unwrap()).unwrap();
    fs::write(&makefile, "## Ship it\nrelease:\n").unwrap();

    mkhelp(tmp.path()).arg(&makefile).assert().success().stdout(" release: Ship it\n");

    mkhelp(tmp.path())
        .args(["-f", "markdown"])
        .arg(&makefile)
        .assert()
        .success()
        .stdout("- `release`: Ship it\n");
}

#[test]
fn configured_defaults_apply() {
    let tmp = tempdir().unwrap();
    let makefile = tmp.path().join("project").join("GNUmakefile");
    fs::create_dir_all(makefile.parent().unwrap()).unwrap();
    fs::write(&makefile, "## Tools\n## =====\n\n## Run the linter\nlint:\n").unwrap();

    let cfg = tmp.path().join("mkhelp").join("config.toml");
    fs::create_dir_all(cfg.parent().unwrap()).unwrap();
    fs::write(
        &cfg,
        format!(
            "version = 1\n[defaults]\nmakefile = \"{}\"\nformat = \"markdown\"\n",
            makefile.display()
        ),
    )
    .unwrap();

    mkhelp(tmp.path())
        .arg("docs")
        .assert()
        .success()
        .stdout("## Tools\n\n- `lint`: Run the linter\n");
}

#[test]
fn unknown_format_fails() {
    let tmp = tempdir().unwrap();
    mkhelp(tmp.path())
        .args(["docs", "--format", "troff"])
        .arg(project_makefile())
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL mkhelp docs"))
        .stdout(predicate::str::contains("unknown format 'troff'"));
}

#[test]
fn missing_makefile_fails() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("Makefile");
    mkhelp(tmp.path())
        .arg("docs")
        .arg(&missing)
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL mkhelp docs"))
        .stdout(predicate::str::contains("failed to read makefile"));
}
