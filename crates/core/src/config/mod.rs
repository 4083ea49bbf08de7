//! Optional user configuration (`~/.config/mkhelp/config.toml`).

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path};
pub use types::{ConfigFile, Defaults, LoggingConfig, ResolvedConfig};
