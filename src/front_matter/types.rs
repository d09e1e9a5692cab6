use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::deserializers::deserialize_date;

/// Metadata block at the top of every content document
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FrontMatter {
    /// Document title
    #[serde(default)]
    pub title: String,

    /// Publish date; drives ordering and is required
    #[serde(deserialize_with = "deserialize_date")]
    pub date: DateTime<Utc>,

    /// Short summary used in listings
    #[serde(default)]
    pub description: String,

    /// Drafts are parsed but never published
    #[serde(default)]
    pub draft: bool,

    /// Template variant to render the page with
    #[serde(default)]
    pub layout: Option<String>,
}
