//! Report facade — one report bound to one renderer.

use crate::model::ReportData;
use crate::render::Renderer;

/// Bundles report data with the renderer chosen by the caller.
///
/// The renderer is borrowed, so one instance can serve many reports.
pub struct Report<'r> {
    data: ReportData,
    renderer: &'r dyn Renderer,
}

impl<'r> Report<'r> {
    pub fn new(data: ReportData, renderer: &'r dyn Renderer) -> Self {
        Self { data, renderer }
    }

    pub fn data(&self) -> &ReportData {
        &self.data
    }

    pub fn render(&self) -> String {
        self.renderer.render(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{HtmlRenderer, PlainTextRenderer};

    fn groceries() -> ReportData {
        ReportData::new("Groceries", ["Milk", "Eggs"]).unwrap()
    }

    #[test]
    fn forwards_to_renderer() {
        let report = Report::new(groceries(), &PlainTextRenderer);
        assert_eq!(report.render(), PlainTextRenderer.render(&groceries()));
    }

    #[test]
    fn render_is_repeatable() {
        let report = Report::new(groceries(), &HtmlRenderer);
        let first = report.render();
        let second = report.render();
        assert_eq!(first, second);
        assert_eq!(report.data(), &groceries());
    }

    #[test]
    fn one_renderer_shared_by_many_reports() {
        let renderer = PlainTextRenderer;
        let a = Report::new(ReportData::new("A", ["1"]).unwrap(), &renderer);
        let b = Report::new(ReportData::new("B", ["2"]).unwrap(), &renderer);
        assert_eq!(a.render(), "A\n=\n- 1");
        assert_eq!(b.render(), "B\n=\n- 2");
    }

    #[test]
    fn custom_renderer_plugs_in() {
        struct Csv;
        impl Renderer for Csv {
            fn render(&self, data: &ReportData) -> String {
                std::iter::once(data.title())
                    .chain(data.items().iter().map(String::as_str))
                    .collect::<Vec<_>>()
                    .join(",")
            }
        }

        let report = Report::new(groceries(), &Csv);
        assert_eq!(report.render(), "Groceries,Milk,Eggs");
    }
}
