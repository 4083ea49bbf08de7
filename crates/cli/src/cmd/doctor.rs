use mkhelp_core::config::loader::default_config_path;
use mkhelp_core::Document;
use std::fs;
use std::path::Path;

pub fn run(config: Option<&Path>) {
    let (rc, _log) = super::init(config, "doctor");

    println!("OK   mkhelp doctor");
    match &rc.source {
        Some(p) => println!("path: {}", p.display()),
        None => println!("path: (none, looked for {})", default_config_path().display()),
    }
    println!("version: {}", mkhelp_core::version());
    match fs::read_to_string(&rc.makefile) {
        Ok(content) => println!(
            "makefile: {} ({} documented targets)",
            rc.makefile.display(),
            Document::parse(&content).targets().count()
        ),
        Err(_) => println!("makefile: {} (not readable)", rc.makefile.display()),
    }
    println!("format: {}", rc.format);
    println!("logging.level: {}", rc.logging.level);
    if let Some(file) = &rc.logging.file {
        println!("logging.file: {}", file.display());
    }
}
