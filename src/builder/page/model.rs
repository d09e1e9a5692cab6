use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// Format of [`Page::date`]
pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d";

/// A published page. Built once per document, never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub title: String,
    pub description: String,
    /// Publish date formatted with [`DISPLAY_DATE_FORMAT`]
    pub date: String,
    pub raw_date: DateTime<Utc>,
    /// Sanitized HTML body
    pub content: String,
    pub slug: String,
    pub output_path: PathBuf,
    pub source_path: PathBuf,
    pub layout: Option<String>,
}
