//! Plain-text renderer — underlined title followed by a dash list.

use crate::model::ReportData;
use crate::render::Renderer;

pub struct PlainTextRenderer;

impl Renderer for PlainTextRenderer {
    fn render(&self, data: &ReportData) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(data.len() + 2);

        lines.push(data.title().to_string());
        lines.push(underline(data.title()));

        for item in data.items() {
            lines.push(format!("- {}", item));
        }

        lines.join("\n")
    }
}

/// One `=` per character of the title.
pub(crate) fn underline(title: &str) -> String {
    "=".repeat(title.chars().count())
}
