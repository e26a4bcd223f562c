//! HTML renderers — a fixed document skeleton with one paragraph per item.

use crate::model::ReportData;
use crate::render::Renderer;
use std::borrow::Cow;

/// Inserts title and items verbatim.
///
/// Known limitation: markup in the report text is not escaped and ends up in
/// the document as-is. Use [`EscapedHtmlRenderer`] for untrusted text.
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, data: &ReportData) -> String {
        render_document(data, |s| Cow::Borrowed(s))
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

/// Same skeleton as [`HtmlRenderer`], with title and items entity-escaped.
pub struct EscapedHtmlRenderer;

impl Renderer for EscapedHtmlRenderer {
    fn render(&self, data: &ReportData) -> String {
        render_document(data, |s| Cow::Owned(html_escape(s)))
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn render_document<'a, F>(data: &'a ReportData, text: F) -> String
where
    F: Fn(&'a str) -> Cow<'a, str>,
{
    let mut lines: Vec<String> = Vec::with_capacity(data.len() + 7);

    lines.push("<html>".to_string());
    lines.push("  <head>".to_string());
    lines.push(format!("    <title>{}</title>", text(data.title())));
    lines.push("  </head>".to_string());
    lines.push("  <body>".to_string());

    for item in data.items() {
        lines.push(format!("    <p>{}</p>", text(item.as_str())));
    }

    lines.push("  </body>".to_string());
    lines.push("</html>".to_string());

    lines.join("\n")
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
