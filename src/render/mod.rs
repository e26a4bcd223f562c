//! Renderer module — trait-based format strategies.
//!
//! A renderer turns a [`ReportData`] into one block of text. Renderers are
//! stateless: the same instance can back any number of reports, from any
//! thread. Format names are not known here; see [`crate::registry`].

pub mod html;
pub mod plain;

use crate::model::ReportData;

pub use html::{EscapedHtmlRenderer, HtmlRenderer};
pub use plain::PlainTextRenderer;

/// Trait for rendering a report into a specific output format.
///
/// `render` must be total over valid reports: no I/O, no panics, and the same
/// input always yields the same output.
pub trait Renderer: Send + Sync {
    fn render(&self, data: &ReportData) -> String;

    /// Extension used when the output is written to a file.
    fn file_extension(&self) -> &str {
        "txt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Reversed;

    impl Renderer for Reversed {
        fn render(&self, data: &ReportData) -> String {
            data.title().chars().rev().collect()
        }
    }

    #[test]
    fn render_is_the_only_required_method() {
        let data = ReportData::new("abc", ["x"]).unwrap();
        assert_eq!(Reversed.render(&data), "cba");
        assert_eq!(Reversed.file_extension(), "txt");
    }

    #[test]
    fn builtin_extensions() {
        assert_eq!(PlainTextRenderer.file_extension(), "txt");
        assert_eq!(HtmlRenderer.file_extension(), "html");
        assert_eq!(EscapedHtmlRenderer.file_extension(), "html");
    }
}
