use std::path::PathBuf;

use serde::Deserialize;

use crate::formats::Format;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values used when the command line leaves them out.
#[derive(Debug, Deserialize, Clone)]
pub struct Defaults {
    #[serde(default = "default_makefile")]
    pub makefile: String,
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self { makefile: default_makefile(), format: default_format() }
    }
}

fn default_makefile() -> String {
    "Makefile".to_string()
}

fn default_format() -> String {
    Format::default().as_str().to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Config file the values came from, `None` when running on built-in defaults.
    pub source: Option<PathBuf>,
    pub makefile: PathBuf,
    pub format: Format,
    pub logging: LoggingConfig,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            source: None,
            makefile: PathBuf::from(default_makefile()),
            format: Format::default(),
            logging: LoggingConfig::default(),
        }
    }
}
