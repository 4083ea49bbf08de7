//! Output formats and the registry that maps format names to renderers.

pub mod html;
pub mod json;
pub mod markdown;
pub mod text;

use std::collections::BTreeMap;

use crate::docs::DocsError;
use crate::document::Document;

/// A renderer turns a parsed document into output text.
pub type Formatter = fn(&Document) -> String;

/// Supported documentation formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// Grouped help listing for terminals.
    #[default]
    Text,
    /// Markdown reference page.
    Markdown,
    /// HTML converted from the markdown rendering.
    Html,
    /// The parsed document as pretty-printed JSON.
    Json,
}

impl Format {
    pub const ALL: [Format; 4] = [Self::Text, Self::Markdown, Self::Html, Self::Json];

    /// Registry key for this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Markdown => "markdown",
            Self::Html => "html",
            Self::Json => "json",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Text => "Grouped help listing, as printed by `make help`",
            Self::Markdown => "Markdown reference with one heading per group",
            Self::Html => "HTML rendering of the markdown reference",
            Self::Json => "Parsed targets and groups as JSON",
        }
    }

    pub fn formatter(&self) -> Formatter {
        match self {
            Self::Text => text::render,
            Self::Markdown => markdown::render,
            Self::Html => html::render,
            Self::Json => json::render,
        }
    }

    pub fn render(&self, doc: &Document) -> String {
        (self.formatter())(doc)
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Format {
    type Err = DocsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| DocsError::UnknownFormat(s.to_string()))
    }
}

/// Every registered format name mapped to its renderer.
pub fn formatters() -> BTreeMap<&'static str, Formatter> {
    Format::ALL.into_iter().map(|f| (f.as_str(), f.formatter())).collect()
}
