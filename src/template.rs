//! Step-hook rendering: a fixed skeleton with overridable steps.
//!
//! The skeleton is `start`, `head`, `body_start`, `per_item` for every item,
//! `body_end`, `end`. Each hook returns the lines it contributes; a hook that
//! returns nothing, or only empty strings, adds no line at all. This path exists to cross-check the
//! [`Renderer`] implementations, which must produce byte-identical output.

use crate::model::ReportData;
use crate::render::plain::underline;
use crate::render::Renderer;

/// A report layout expressed as six optional steps.
pub trait ReportTemplate {
    fn start(&self, _data: &ReportData) -> Vec<String> {
        Vec::new()
    }

    fn head(&self, _data: &ReportData) -> Vec<String> {
        Vec::new()
    }

    fn body_start(&self, _data: &ReportData) -> Vec<String> {
        Vec::new()
    }

    fn per_item(&self, _item: &str) -> Vec<String> {
        Vec::new()
    }

    fn body_end(&self, _data: &ReportData) -> Vec<String> {
        Vec::new()
    }

    fn end(&self, _data: &ReportData) -> Vec<String> {
        Vec::new()
    }
}

/// Run the skeleton and join every produced line with `\n`.
pub fn render_template<T: ReportTemplate + ?Sized>(template: &T, data: &ReportData) -> String {
    let mut lines = template.start(data);
    lines.extend(template.head(data));
    lines.extend(template.body_start(data));
    for item in data.items() {
        lines.extend(template.per_item(item));
    }
    lines.extend(template.body_end(data));
    lines.extend(template.end(data));
    lines.retain(|l| !l.is_empty());
    lines.join("\n")
}

pub struct PlainTextTemplate;

impl ReportTemplate for PlainTextTemplate {
    fn head(&self, data: &ReportData) -> Vec<String> {
        vec![data.title().to_string(), underline(data.title())]
    }

    fn per_item(&self, item: &str) -> Vec<String> {
        vec![format!("- {}", item)]
    }
}

pub struct HtmlTemplate;

impl ReportTemplate for HtmlTemplate {
    fn start(&self, _data: &ReportData) -> Vec<String> {
        vec!["<html>".to_string()]
    }

    fn head(&self, data: &ReportData) -> Vec<String> {
        vec![
            "  <head>".to_string(),
            format!("    <title>{}</title>", data.title()),
            "  </head>".to_string(),
        ]
    }

    fn body_start(&self, _data: &ReportData) -> Vec<String> {
        vec!["  <body>".to_string()]
    }

    fn per_item(&self, item: &str) -> Vec<String> {
        vec![format!("    <p>{}</p>", item)]
    }

    fn body_end(&self, _data: &ReportData) -> Vec<String> {
        vec!["  </body>".to_string()]
    }

    fn end(&self, _data: &ReportData) -> Vec<String> {
        vec!["</html>".to_string()]
    }
}

/// Exposes a [`ReportTemplate`] through the [`Renderer`] trait.
pub struct Templated<T> {
    template: T,
    extension: &'static str,
}

impl<T: ReportTemplate> Templated<T> {
    pub fn new(template: T, extension: &'static str) -> Self {
        Self { template, extension }
    }
}

impl<T: ReportTemplate + Send + Sync> Renderer for Templated<T> {
    fn render(&self, data: &ReportData) -> String {
        render_template(&self.template, data)
    }

    fn file_extension(&self) -> &str {
        self.extension
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{HtmlRenderer, PlainTextRenderer};

    fn samples() -> Vec<ReportData> {
        vec![
            ReportData::new("Shopping List", ["Hot Pockets", "Frozen Pizza", "Pop Tarts"]).unwrap(),
            ReportData::new("Empty", Vec::<String>::new()).unwrap(),
            ReportData::new("Ünïcödé", ["", "  padded  ", "<raw> & text"]).unwrap(),
        ]
    }

    #[test]
    fn plain_template_matches_strategy() {
        let templated = Templated::new(PlainTextTemplate, "txt");
        for data in samples() {
            assert_eq!(templated.render(&data), PlainTextRenderer.render(&data));
        }
    }

    #[test]
    fn html_template_matches_strategy() {
        let templated = Templated::new(HtmlTemplate, "html");
        for data in samples() {
            assert_eq!(templated.render(&data), HtmlRenderer.render(&data));
        }
    }

    #[test]
    fn silent_hooks_add_no_blank_lines() {
        struct TitleOnly;
        impl ReportTemplate for TitleOnly {
            fn end(&self, data: &ReportData) -> Vec<String> {
                vec![data.title().to_string()]
            }
        }

        let data = ReportData::new("Only", ["ignored"]).unwrap();
        assert_eq!(render_template(&TitleOnly, &data), "Only");
    }

    #[test]
    fn empty_string_hooks_add_no_blank_lines() {
        struct EmptyStart;
        impl ReportTemplate for EmptyStart {
            fn start(&self, _: &ReportData) -> Vec<String> {
                vec![String::new()]
            }
            fn per_item(&self, item: &str) -> Vec<String> {
                vec![item.to_string()]
            }
            fn end(&self, _: &ReportData) -> Vec<String> {
                vec![String::new(), String::new()]
            }
        }

        let data = ReportData::new("T", ["a"]).unwrap();
        assert_eq!(render_template(&EmptyStart, &data), "a");
    }

    #[test]
    fn hooks_run_in_skeleton_order() {
        struct Trace;
        impl ReportTemplate for Trace {
            fn start(&self, _: &ReportData) -> Vec<String> {
                vec!["start".into()]
            }
            fn head(&self, _: &ReportData) -> Vec<String> {
                vec!["head".into()]
            }
            fn body_start(&self, _: &ReportData) -> Vec<String> {
                vec!["body_start".into()]
            }
            fn per_item(&self, item: &str) -> Vec<String> {
                vec![format!("item:{}", item)]
            }
            fn body_end(&self, _: &ReportData) -> Vec<String> {
                vec!["body_end".into()]
            }
            fn end(&self, _: &ReportData) -> Vec<String> {
                vec!["end".into()]
            }
        }

        let data = ReportData::new("T", ["a", "b"]).unwrap();
        assert_eq!(
            render_template(&Trace, &data),
            "start\nhead\nbody_start\nitem:a\nitem:b\nbody_end\nend"
        );
    }

    #[test]
    fn templated_reports_extension() {
        assert_eq!(Templated::new(HtmlTemplate, "html").file_extension(), "html");
    }
}
