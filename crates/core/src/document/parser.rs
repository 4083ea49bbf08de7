//! Line-oriented parser for `##` doc comments in Makefiles.
//!
//! A doc block is a run of lines starting with `## ` (or a bare `##`).
//! A block whose second line is all `=` is a module heading, all `-` a
//! submodule heading. Any other block documents the rule on the line
//! right after it:
//!
//! ```makefile
//! ## Checks
//! ## ======
//!
//! ## Run all checks
//! check_all: check_format check_lint
//! ```

use std::convert::Infallible;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::types::{Document, Module, Submodule, Target};

const PREFIX: &str = "## ";
const BARE: &str = "##";

/// Summary placeholder that stands for the prettified target name.
const DERIVED_SUMMARY: &str = "_";

// Rule lines: `name: deps`, `name::`. Rejects `X := 1`, `X ::= 1` and recipes.
static RULE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^\s#:=][^:=]*?)\s*::?(?:[^:=]|$)").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeadingKind {
    Module,
    Submodule,
}

#[derive(Debug)]
enum Block<'a> {
    Heading { kind: HeadingKind, title: &'a str, description: Vec<String> },
    Target(Target),
}

fn doc_text(line: &str) -> Option<&str> {
    if line == BARE {
        return Some("");
    }
    line.strip_prefix(PREFIX)
}

fn heading_kind(underline: &str) -> Option<HeadingKind> {
    if underline.is_empty() {
        None
    } else if underline.chars().all(|c| c == '=') {
        Some(HeadingKind::Module)
    } else if underline.chars().all(|c| c == '-') {
        Some(HeadingKind::Submodule)
    } else {
        None
    }
}

/// Extract the target name from a rule line.
fn rule_name(line: &str) -> Option<&str> {
    RULE_RE.captures(line).and_then(|caps| caps.get(1)).map(|m| m.as_str().trim())
}

/// `check_all` becomes `Check all`.
fn derive_summary(name: &str) -> String {
    let mut chars = name.chars();
    let titled = match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    };
    titled.replace('_', " ")
}

fn trim_blank(lines: &[&str]) -> Vec<String> {
    let start = lines.iter().position(|l| !l.trim().is_empty()).unwrap_or(lines.len());
    let end = lines.iter().rposition(|l| !l.trim().is_empty()).map_or(start, |i| i + 1);
    lines[start..end].iter().map(|l| (*l).to_string()).collect()
}

/// Split the input into heading and target blocks, in source order.
fn blocks(content: &str) -> Vec<Block<'_>> {
    let lines: Vec<&str> = content.lines().collect();
    let mut out = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if doc_text(lines[i]).is_none() {
            i += 1;
            continue;
        }

        let start = i;
        let mut texts = Vec::new();
        while let Some(text) = lines.get(i).copied().and_then(doc_text) {
            texts.push(text);
            i += 1;
        }

        if let Some(kind) = texts.get(1).copied().and_then(heading_kind) {
            out.push(Block::Heading {
                kind,
                title: texts[0],
                description: trim_blank(&texts[2..]),
            });
            continue;
        }

        let Some(name) = lines.get(i).copied().and_then(rule_name) else {
            debug!(line = start + 1, "doc block is not followed by a rule, skipping");
            continue;
        };

        let summary = match texts[0] {
            DERIVED_SUMMARY => derive_summary(name),
            s => s.to_string(),
        };
        out.push(Block::Target(Target {
            name: name.to_string(),
            summary,
            details: trim_blank(&texts[1..]),
        }));
    }

    out
}

impl Document {
    /// Parse every documented target and heading out of Makefile source.
    pub fn parse(content: &str) -> Self {
        let mut modules: Vec<Module> = Vec::new();

        for block in blocks(content) {
            match block {
                Block::Heading { kind: HeadingKind::Module, title, description } => {
                    modules.push(Module {
                        name: Some(title.to_string()).filter(|t| !t.is_empty()),
                        description,
                        ..Module::default()
                    });
                }
                Block::Heading { kind: HeadingKind::Submodule, title, description } => {
                    if modules.is_empty() {
                        modules.push(Module::default());
                    }
                    if let Some(module) = modules.last_mut() {
                        module.submodules.push(Submodule {
                            name: title.to_string(),
                            description,
                            targets: Vec::new(),
                        });
                    }
                }
                Block::Target(target) => {
                    if modules.is_empty() {
                        modules.push(Module::default());
                    }
                    let Some(module) = modules.last_mut() else { continue };
                    match module.submodules.last_mut() {
                        Some(sub) => sub.targets.push(target),
                        None => module.targets.push(target),
                    }
                }
            }
        }

        let doc = Self { modules };
        debug!(
            modules = doc.modules.len(),
            targets = doc.targets().count(),
            "parsed makefile documentation"
        );
        doc
    }
}

impl FromStr for Document {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
