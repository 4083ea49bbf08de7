//! Render help and reference documentation from annotated Makefiles.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let help = mkhelp_core::docs(Path::new("Makefile"), "text")?;
//! print!("{help}");
//! # Ok::<(), mkhelp_core::DocsError>(())
//! ```

pub mod config;
pub mod docs;
pub mod document;
pub mod formats;
pub mod script;

pub use docs::{DocsError, docs, render_file};
pub use document::Document;
pub use formats::{Format, Formatter, formatters};
pub use script::{BASE_SCRIPT, script};

/// Package version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version() -> &'static str {
    VERSION
}
