//! Document model extracted from an annotated Makefile.

use serde::Serialize;

/// All documented targets of a Makefile, grouped by heading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub modules: Vec<Module>,
}

/// Top-level group, introduced by a `## Title` / `## =====` heading.
///
/// Targets documented before the first heading land in a module with no name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Module {
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<String>,
    pub targets: Vec<Target>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub submodules: Vec<Submodule>,
}

/// Second-level group, introduced by a `## Title` / `## -----` heading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Submodule {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<String>,
    pub targets: Vec<Target>,
}

/// A documented make target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    pub name: String,
    /// First line of the doc block.
    pub summary: String,
    /// Remaining doc lines, verbatim.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

/// A titled list of targets, as rendered by the listing formats.
///
/// Modules and submodules flatten into a sequence of sections in source order.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    pub title: Option<&'a str>,
    /// 1 for modules, 2 for submodules.
    pub depth: u8,
    pub description: &'a [String],
    pub targets: &'a [Target],
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.targets().next().is_none()
    }

    /// Every documented `(name, summary)` pair in source order.
    pub fn targets(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sections()
            .flat_map(|s| s.targets.iter())
            .map(|t| (t.name.as_str(), t.summary.as_str()))
    }

    pub fn sections(&self) -> impl Iterator<Item = Section<'_>> {
        self.modules.iter().flat_map(|module| {
            let head = Section {
                title: module.name.as_deref(),
                depth: 1,
                description: &module.description,
                targets: &module.targets,
            };
            std::iter::once(head).chain(module.submodules.iter().map(|sub| Section {
                title: Some(sub.name.as_str()).filter(|t| !t.is_empty()),
                depth: 2,
                description: &sub.description,
                targets: &sub.targets,
            }))
        })
    }
}
