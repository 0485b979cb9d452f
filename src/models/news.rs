//! News item data structure.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Date sentinel used by the pinned statistics item.
pub const AUTO_DATE: &str = "auto";

/// Date format used by the news document.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single entry of `news.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsItem {
    /// Unique identifier
    pub id: String,

    /// `YYYY-MM-DD`, or `"auto"` for the pinned statistics item
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,

    /// Display string, may embed simple emphasis markup
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: String,

    /// Open-ended tag
    #[serde(
        rename = "type",
        alias = "category",
        default,
        deserialize_with = "lenient_category"
    )]
    pub category: NewsCategory,

    /// Back-reference to a publication, dataset or award
    #[serde(
        default,
        alias = "relatedId",
        skip_serializing_if = "Option::is_none"
    )]
    pub related_id: Option<String>,

    /// Pinned items are kept out of the paged feed
    #[serde(default)]
    pub pinned: bool,

    /// Provenance flag only
    #[serde(default, alias = "autoGenerated")]
    pub auto_generated: bool,
}

impl NewsItem {
    /// Parse the calendar date. `"auto"` and malformed values yield `None`.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }

    /// Whether the item carries the "always current" sentinel.
    pub fn is_auto_dated(&self) -> bool {
        self.date.trim().eq_ignore_ascii_case(AUTO_DATE)
    }

    /// The related entity id, treating an empty string as absent.
    pub fn related(&self) -> Option<&str> {
        self.related_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// Strings pass through, `null` becomes empty, other scalars keep their
/// JSON text. A bad field never rejects the whole entry.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
        other => other.to_string(),
    })
}

fn lenient_category<'de, D>(deserializer: D) -> Result<NewsCategory, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(tag) if !tag.trim().is_empty() => NewsCategory::from(tag),
        _ => NewsCategory::default(),
    })
}

/// Category tag of a news item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NewsCategory {
    Publication,
    Dataset,
    Award,
    Statistics,
    Other(String),
}

impl NewsCategory {
    pub fn as_str(&self) -> &str {
        match self {
            NewsCategory::Publication => "publication",
            NewsCategory::Dataset => "dataset",
            NewsCategory::Award => "award",
            NewsCategory::Statistics => "statistics",
            NewsCategory::Other(tag) => tag,
        }
    }
}

impl Default for NewsCategory {
    fn default() -> Self {
        NewsCategory::Other("other".to_string())
    }
}

impl From<String> for NewsCategory {
    fn from(tag: String) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "publication" => NewsCategory::Publication,
            "dataset" => NewsCategory::Dataset,
            "award" => NewsCategory::Award,
            "statistics" => NewsCategory::Statistics,
            _ => NewsCategory::Other(tag),
        }
    }
}

impl From<NewsCategory> for String {
    fn from(category: NewsCategory) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
