pub mod docs;
pub mod doctor;
pub mod formats;
pub mod script;

use mkhelp_core::config::loader::{default_config_path, ConfigLoader};
use mkhelp_core::config::types::ResolvedConfig;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;

/// Load configuration and start logging, or report the failure and exit.
///
/// Keep the guard alive for the rest of the command so file logs get flushed.
pub fn init(config: Option<&Path>, command: &str) -> (ResolvedConfig, Option<WorkerGuard>) {
    let rc = match ConfigLoader::load(config) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL mkhelp {command}");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };

    match crate::logging::init(&rc.logging) {
        Ok(guard) => (rc, guard),
        Err(e) => {
            println!("FAIL mkhelp {command}");
            if let Some(file) = &rc.logging.file {
                println!("cannot open log file {}: {e}", file.display());
            }
            std::process::exit(1);
        }
    }
}
