use mkhelp_core::Format;
use mkhelp_core::config::loader::ConfigLoader;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn load_defaults_and_logging_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1

[defaults]
makefile = "/tmp/project/Makefile"
format = "markdown"

[logging]
level = "debug"
file = "/tmp/mkhelp.log"
"#;

    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path)).expect("should load");
    assert_eq!(rc.source.as_deref(), Some(cfg_path.as_path()));
    assert_eq!(rc.makefile.display().to_string(), "/tmp/project/Makefile");
    assert_eq!(rc.format, Format::Markdown);
    assert_eq!(rc.logging.level, "debug");
    assert_eq!(rc.logging.file, Some(PathBuf::from("/tmp/mkhelp.log")));
    assert_eq!(rc.logging.file_level, None);
}

#[test]
fn sections_are_optional() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("mkhelp/config.toml");
    write_file(&cfg_path, "version = 1\n");

    let rc = ConfigLoader::load(Some(&cfg_path)).expect("should load");
    assert_eq!(rc.makefile, PathBuf::from("Makefile"));
    assert_eq!(rc.format, Format::Text);
    assert_eq!(rc.logging.level, "warn");
}

#[test]
fn missing_default_file_uses_builtin_defaults() {
    let tmp = tempdir().unwrap();
    // SAFETY: the only test in this binary that touches the environment.
    unsafe { std::env::set_var("XDG_CONFIG_HOME", tmp.path()) };

    let rc = ConfigLoader::load(None).expect("defaults");
    assert!(rc.source.is_none());
    assert_eq!(rc.format, Format::Text);
}
