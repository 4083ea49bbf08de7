//! Markdown reference page.

use crate::document::{Document, Target};

fn target_item(target: &Target) -> String {
    let mut item = format!("- `{}`: {}", target.name, target.summary);
    for line in &target.details {
        item.push('\n');
        if !line.is_empty() {
            item.push_str("  ");
            item.push_str(line);
        }
    }
    item
}

pub fn render(doc: &Document) -> String {
    let mut blocks: Vec<String> = Vec::new();

    for section in doc.sections() {
        if let Some(title) = section.title {
            let level = "#".repeat(usize::from(section.depth) + 1);
            blocks.push(format!("{level} {title}"));
        }
        if !section.description.is_empty() {
            blocks.push(section.description.join("\n"));
        }
        if !section.targets.is_empty() {
            let items: Vec<String> = section.targets.iter().map(target_item).collect();
            blocks.push(items.join("\n"));
        }
    }

    if blocks.is_empty() {
        return String::new();
    }
    let mut out = blocks.join("\n\n");
    out.push('\n');
    out
}
