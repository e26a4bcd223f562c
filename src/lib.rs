//! reportgen — render a titled list of items into interchangeable output formats.
//!
//! - [`render`] holds the [`Renderer`] trait and the plain-text and HTML renderers.
//! - [`Report`] binds report data to a renderer chosen by the caller.
//! - [`RendererRegistry`] looks renderers up by format name.
//! - [`template`] is the step-hook variant, kept to cross-check the renderers.

pub mod error;
pub mod model;
pub mod registry;
pub mod render;
pub mod report;
pub mod source;
pub mod template;

pub use error::{Error, Result};
pub use model::ReportData;
pub use registry::{RendererFactory, RendererRegistry};
pub use render::{EscapedHtmlRenderer, HtmlRenderer, PlainTextRenderer, Renderer};
pub use report::Report;
