//! Content entities of the homepage documents.
//!
//! Every entity is lenient: missing fields fall back to defaults and
//! unknown keys are kept in `extra` so documents pass through unmodified.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Items per page used when the site document does not say otherwise.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Badge marker counted towards the "highly cited" banner statistic.
pub const HIGHLY_CITED_BADGE: &str = "highly cited";

/// `config.json`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    #[serde(default)]
    pub news_config: NewsConfig,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsConfig {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

/// Named links of an entity (`pdf`, `doi`, `github`, ...).
pub type Links = Map<String, Value>;

/// A paper from `publications.json`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Publication {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub author_note: String,
    pub venue: String,
    pub year: Option<i32>,
    pub volume: String,
    pub pages: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub badges: Vec<String>,
    pub image: String,
    pub links: Links,
    pub citation_key: String,
    pub added_date: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Publication {
    /// Whether one of the badges marks the paper as highly cited.
    pub fn is_highly_cited(&self) -> bool {
        self.badges
            .iter()
            .any(|badge| badge.to_lowercase().contains(HIGHLY_CITED_BADGE))
    }

    /// Key into the citation statistics document, falling back to the id.
    pub fn stats_key(&self) -> &str {
        if self.citation_key.trim().is_empty() {
            &self.id
        } else {
            &self.citation_key
        }
    }
}

/// A released dataset from `datasets.json`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Dataset {
    pub id: String,
    pub name: String,
    pub description: String,
    pub downloads: u64,
    pub icon: String,
    pub links: Links,
    pub related_paper: String,
    pub added_date: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A software package from `code-tools.json`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CodeTool {
    pub id: String,
    pub name: String,
    pub description: String,
    pub language: String,
    pub links: Links,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An award from `awards.json`. Awards carry no id of their own.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Award {
    pub year: Option<i32>,
    pub name: String,
    pub organization: String,
    pub level: String,
    pub added_date: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An academic service entry from `activities.json`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub role: String,
    pub organization: String,
    pub year: Option<i32>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_config_defaults() {
        let config: SiteConfig = serde_json::from_str(r#"{"name": "Dr. Example"}"#).unwrap();
        assert_eq!(config.news_config.items_per_page, DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(config.extra["name"], "Dr. Example");
    }

    #[test]
    fn test_site_config_items_per_page() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"news_config": {"items_per_page": 5}}"#).unwrap();
        assert_eq!(config.news_config.items_per_page, 5);
    }

    #[test]
    fn test_publication_passthrough() {
        let publication: Publication = serde_json::from_str(
            r#"{
                "id": "ocean_heat_2023",
                "title": "Ocean heat",
                "type": "journal",
                "badges": ["[AWARD] ESI Highly Cited Paper"],
                "links": {"doi": "https://doi.org/10.1/x"},
                "cover_color": "blue"
            }"#,
        )
        .unwrap();
        assert_eq!(publication.kind, "journal");
        assert!(publication.is_highly_cited());
        assert_eq!(publication.stats_key(), "ocean_heat_2023");
        assert_eq!(publication.extra["cover_color"], "blue");

        let json = serde_json::to_value(&publication).unwrap();
        assert_eq!(json["cover_color"], "blue");
        assert_eq!(json["type"], "journal");
    }

    #[test]
    fn test_stats_key_prefers_citation_key() {
        let publication = Publication {
            id: "a".into(),
            citation_key: "scholar_a".into(),
            ..Default::default()
        };
        assert_eq!(publication.stats_key(), "scholar_a");
    }
}
