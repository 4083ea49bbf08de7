//! Log to stderr, and to a file when `logging.file` is set.
//!
//! `RUST_LOG` overrides both configured levels.

use mkhelp_core::config::types::LoggingConfig;
use std::fs::File;
use std::io;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Install the global subscriber.
///
/// Hold the returned guard until the command finishes: dropping it flushes
/// the file writer.
pub fn init(cfg: &LoggingConfig) -> io::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .with_target(false)
        .with_filter(env_filter(stderr_level(cfg)));

    let (file_layer, guard) = match &cfg.file {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(File::create(path)?);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_filter(env_filter(file_level(cfg)));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry().with(stderr_layer).with(file_layer).init();
    Ok(guard)
}

fn env_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::builder().with_default_directive(level.into()).from_env_lossy()
}

fn stderr_level(cfg: &LoggingConfig) -> LevelFilter {
    parse_level(&cfg.level).unwrap_or(LevelFilter::WARN)
}

/// `file_level` falls back to `level`.
fn file_level(cfg: &LoggingConfig) -> LevelFilter {
    let name = cfg.file_level.as_deref().unwrap_or(&cfg.level);
    parse_level(name).unwrap_or(LevelFilter::DEBUG)
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
