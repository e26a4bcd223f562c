//! Data model for a report — format-agnostic.

use crate::error::{Error, Result};

/// A titled, ordered list of items. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportData {
    title: String,
    items: Vec<String>,
}

impl ReportData {
    /// Build a report. The title must be non-empty; `items` may be empty.
    pub fn new<T, I, S>(title: T, items: I) -> Result<Self>
    where
        T: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let title = title.into();
        if title.is_empty() {
            return Err(Error::InvalidArgument(
                "report title must not be empty".to_string(),
            ));
        }
        Ok(Self {
            title,
            items: items.into_iter().map(Into::into).collect(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
