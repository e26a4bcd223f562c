//! Report sources — read report data from text or JSON, dispatched by file extension.

use crate::error::{Error, Result};
use crate::model::ReportData;
use serde::Deserialize;
use std::path::Path;

/// File extensions recognized as report sources.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "list", "json"];

/// Whether `path` has one of the [`SUPPORTED_EXTENSIONS`].
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}

/// Parse a source file into report data based on its extension.
pub fn parse_file(path: &Path, content: &str) -> Result<ReportData> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => parse_json(content),
        Some("txt" | "list") | None => parse_text(content),
        _ => Err(Error::Source(format!(
            "unsupported file type: {}",
            path.display()
        ))),
    }
}

/// Line-oriented format: the first non-blank line is the title, every
/// following non-blank line is an item.
///
/// A leading `- ` on an item is dropped, so plain-text output reads back in.
/// The `=` underline directly after the title is skipped for the same reason,
/// and a bare `-` reads as an empty item (what `- ` becomes once trimmed).
///
/// Lines are trimmed at the end, so trailing whitespace inside an item does
/// not survive, and items that are empty in a file without `- ` markers are
/// indistinguishable from blank lines and are dropped.
pub fn parse_text(content: &str) -> Result<ReportData> {
    let mut lines = content
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.trim().is_empty());

    let title = lines
        .next()
        .map(str::trim)
        .ok_or_else(|| Error::InvalidArgument("report source has no title line".to_string()))?;

    let mut lines = lines.peekable();
    if lines.peek().is_some_and(|l| is_underline(l, title)) {
        lines.next();
    }

    let items: Vec<&str> = lines
        .map(|l| match l {
            "-" => "",
            _ => l.strip_prefix("- ").unwrap_or(l),
        })
        .collect();

    ReportData::new(title, items)
}

fn is_underline(line: &str, title: &str) -> bool {
    line.chars().all(|c| c == '=') && line.chars().count() == title.chars().count()
}

#[derive(Deserialize)]
struct JsonReport {
    title: String,
    #[serde(default)]
    items: Vec<String>,
}

/// `{"title": "...", "items": ["...", ...]}`; `items` may be omitted.
pub fn parse_json(content: &str) -> Result<ReportData> {
    let raw: JsonReport =
        serde_json::from_str(content).map_err(|e| Error::Source(e.to_string()))?;
    ReportData::new(raw.title, raw.items)
}
