use comrak::{Options, markdown_to_html};

use crate::document::Document;

use super::markdown;

pub fn render(doc: &Document) -> String {
    markdown_to_html(&markdown::render(doc), &Options::default())
}
