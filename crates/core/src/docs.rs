//! Render documentation for a Makefile on disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::document::Document;
use crate::formats::Format;

#[derive(Debug, Error)]
pub enum DocsError {
    #[error("failed to read makefile {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown format '{0}'")]
    UnknownFormat(String),
}

/// Read the makefile at `path` and render its documentation as `format`.
///
/// `format` must be a key of [`crate::formats::formatters`].
pub fn docs(path: &Path, format: &str) -> Result<String, DocsError> {
    let format: Format = format.parse()?;
    render_file(path, format)
}

/// Same as [`docs`] with an already resolved format.
pub fn render_file(path: &Path, format: Format) -> Result<String, DocsError> {
    let content = fs::read_to_string(path)
        .map_err(|e| DocsError::Io { path: path.to_path_buf(), source: e })?;

    debug!(path = %path.display(), %format, "rendering makefile docs");
    Ok(format.render(&Document::parse(&content)))
}
