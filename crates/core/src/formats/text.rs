//! Plain-text help listing.
//!
//! ```text
//! Checks:
//!    check_all: Run all checks
//!  check_tests: Check that unit tests pass
//! ```
//!
//! The awk script in `assets/help.awk` produces the same output.

use crate::document::{Document, Target};

fn push_targets(out: &mut String, targets: &[Target]) {
    let Some(width) = targets.iter().map(|t| t.name.chars().count()).max() else {
        return;
    };
    for target in targets {
        out.push_str(&format!(
            "{:>width$}: {}\n",
            target.name,
            target.summary,
            width = width + 1
        ));
    }
}

pub fn render(doc: &Document) -> String {
    let mut out = String::new();
    for section in doc.sections().filter(|s| !s.targets.is_empty()) {
        if !out.is_empty() {
            out.push('\n');
        }
        if let Some(title) = section.title {
            out.push_str(title);
            out.push_str(":\n");
        }
        push_targets(&mut out, section.targets);
    }
    out
}
