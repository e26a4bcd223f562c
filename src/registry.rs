//! Format registry — maps a format name to a renderer factory.
//!
//! Replaces string-matching dispatch: adding a format means registering a
//! factory, never editing an existing renderer.

use crate::error::{Error, Result};
use crate::render::{EscapedHtmlRenderer, HtmlRenderer, PlainTextRenderer, Renderer};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

/// Builds a fresh renderer for each lookup.
pub type RendererFactory = Box<dyn Fn() -> Box<dyn Renderer> + Send + Sync>;

/// Registry of output formats, keyed by case-sensitive name.
///
/// Meant to be filled once at startup and then shared read-only; `resolve`
/// takes `&self` and may be called from many threads.
#[derive(Default)]
pub struct RendererRegistry {
    factories: HashMap<String, RendererFactory>,
}

impl RendererRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in formats: `plain`, `html`, `html-escaped`
    pub fn with_defaults() -> Result<Self> {
        let mut registry = Self::new();
        registry.register("plain", || Box::new(PlainTextRenderer))?;
        registry.register("html", || Box::new(HtmlRenderer))?;
        registry.register("html-escaped", || Box::new(EscapedHtmlRenderer))?;
        Ok(registry)
    }

    /// Register a format. Fails if the name is taken; the existing entry is kept.
    pub fn register<F>(&mut self, id: impl Into<String>, factory: F) -> Result<()>
    where
        F: Fn() -> Box<dyn Renderer> + Send + Sync + 'static,
    {
        match self.factories.entry(id.into()) {
            Entry::Occupied(entry) => Err(Error::DuplicateFormat(entry.key().clone())),
            Entry::Vacant(entry) => {
                tracing::debug!(format = %entry.key(), "registered renderer");
                entry.insert(Box::new(factory));
                Ok(())
            }
        }
    }

    /// Build a renderer for the given format name.
    pub fn resolve(&self, id: &str) -> Result<Box<dyn Renderer>> {
        match self.factories.get(id) {
            Some(factory) => {
                tracing::debug!(format = id, "resolved renderer");
                Ok(factory())
            }
            None => Err(Error::UnknownFormat {
                format: id.to_string(),
                known: self.formats().into_iter().map(str::to_string).collect(),
            }),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// Registered format names, sorted.
    pub fn formats(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererRegistry")
            .field("formats", &self.formats())
            .finish()
    }
}
