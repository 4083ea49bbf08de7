use crate::document::Document;

pub fn render(doc: &Document) -> String {
    serde_json::to_string_pretty(doc).unwrap_or_default()
}
