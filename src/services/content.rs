// src/services/content.rs

//! Content store.
//!
//! Loads the fixed set of homepage documents concurrently and fails fast:
//! one missing or malformed document aborts the whole load.

use std::collections::{HashMap, HashSet};
use std::fmt;

use futures::future::try_join_all;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::{AppError, Result};
use crate::models::{
    Activity, Award, BannerStats, CodeTool, DEFAULT_ITEMS_PER_PAGE, Dataset, NewsItem,
    Publication, SiteConfig,
};
use crate::storage::ContentSource;

/// The documents that make up the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Config,
    Publications,
    Datasets,
    CodeTools,
    Awards,
    Activities,
    News,
}

impl ContentKind {
    pub const ALL: [ContentKind; 7] = [
        ContentKind::Config,
        ContentKind::Publications,
        ContentKind::Datasets,
        ContentKind::CodeTools,
        ContentKind::Awards,
        ContentKind::Activities,
        ContentKind::News,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            ContentKind::Config => "config.json",
            ContentKind::Publications => "publications.json",
            ContentKind::Datasets => "datasets.json",
            ContentKind::CodeTools => "code-tools.json",
            ContentKind::Awards => "awards.json",
            ContentKind::Activities => "activities.json",
            ContentKind::News => "news.json",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PublicationsDocument {
    #[serde(default)]
    pub publications: Vec<Publication>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DatasetsDocument {
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CodeToolsDocument {
    #[serde(default, alias = "tools")]
    pub code_tools: Vec<CodeTool>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AwardsDocument {
    #[serde(default)]
    pub awards: Vec<Award>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ActivitiesDocument {
    #[serde(default)]
    pub activities: Vec<Activity>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NewsDocument {
    #[serde(default)]
    pub news: Vec<NewsItem>,
}

/// All site documents, typed.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    pub site: SiteConfig,
    pub publications: Vec<Publication>,
    pub datasets: Vec<Dataset>,
    pub code_tools: Vec<CodeTool>,
    pub awards: Vec<Award>,
    pub activities: Vec<Activity>,
    pub news: Vec<NewsItem>,
}

impl ContentStore {
    /// Fetch every document concurrently, then parse.
    pub async fn load(source: &dyn ContentSource) -> Result<Self> {
        log::info!("Loading content from {}", source.describe());

        let fetches = ContentKind::ALL.iter().map(|&kind| async move {
            let name = kind.file_name();
            log::debug!("Fetching {}", name);
            match source.read_document(name).await {
                Ok(Some(bytes)) => Ok((kind, bytes)),
                Ok(None) => Err(AppError::load(name, "document not found")),
                Err(e) => Err(AppError::load(name, e)),
            }
        });
        let mut raw: HashMap<ContentKind, Vec<u8>> =
            try_join_all(fetches).await?.into_iter().collect();

        let mut take = |kind: ContentKind| raw.remove(&kind).unwrap_or_default();

        let store = Self {
            site: parse(ContentKind::Config, &take(ContentKind::Config))?,
            publications: parse::<PublicationsDocument>(
                ContentKind::Publications,
                &take(ContentKind::Publications),
            )?
            .publications,
            datasets: parse::<DatasetsDocument>(ContentKind::Datasets, &take(ContentKind::Datasets))?
                .datasets,
            code_tools: parse::<CodeToolsDocument>(
                ContentKind::CodeTools,
                &take(ContentKind::CodeTools),
            )?
            .code_tools,
            awards: parse::<AwardsDocument>(ContentKind::Awards, &take(ContentKind::Awards))?.awards,
            activities: parse::<ActivitiesDocument>(
                ContentKind::Activities,
                &take(ContentKind::Activities),
            )?
            .activities,
            news: parse::<NewsDocument>(ContentKind::News, &take(ContentKind::News))?.news,
        };

        log::info!(
            "Loaded {} publications, {} datasets, {} code tools, {} awards, {} activities, {} news items",
            store.publications.len(),
            store.datasets.len(),
            store.code_tools.len(),
            store.awards.len(),
            store.activities.len(),
            store.news.len()
        );
        Ok(store)
    }

    /// `news_config.items_per_page`, with 0 replaced by the default.
    pub fn items_per_page(&self) -> usize {
        match self.site.news_config.items_per_page {
            0 => {
                log::warn!(
                    "news_config.items_per_page is 0, using {}",
                    DEFAULT_ITEMS_PER_PAGE
                );
                DEFAULT_ITEMS_PER_PAGE
            }
            n => n,
        }
    }

    /// Banner figures derivable without the citation statistics document.
    pub fn banner_stats(&self) -> BannerStats {
        BannerStats {
            total_downloads: Some(self.datasets.iter().map(|d| d.downloads).sum()),
            total_citations: None,
            highly_cited_count: Some(
                self.publications
                    .iter()
                    .filter(|p| p.is_highly_cited())
                    .count(),
            ),
        }
    }

    pub fn publication(&self, id: &str) -> Option<&Publication> {
        self.publications.iter().find(|p| p.id == id)
    }

    pub fn dataset(&self, id: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.id == id)
    }

    /// Awards carry no id; they are addressed by position in `awards.json`.
    pub fn award_by_index(&self, index: usize) -> Option<&Award> {
        self.awards.get(index)
    }

    /// Entry count of every list document, in load order.
    pub fn counts(&self) -> Vec<(ContentKind, usize)> {
        ContentKind::ALL
            .iter()
            .filter_map(|&kind| {
                let count = match kind {
                    ContentKind::Config => return None,
                    ContentKind::Publications => self.publications.len(),
                    ContentKind::Datasets => self.datasets.len(),
                    ContentKind::CodeTools => self.code_tools.len(),
                    ContentKind::Awards => self.awards.len(),
                    ContentKind::Activities => self.activities.len(),
                    ContentKind::News => self.news.len(),
                };
                Some((kind, count))
            })
            .collect()
    }

    /// Check the documents for problems that do not stop rendering.
    pub fn validate(&self) -> Vec<String> {
        let mut findings = Vec::new();

        let mut seen = HashSet::new();
        for item in &self.news {
            if !seen.insert(item.id.as_str()) {
                findings.push(format!("Duplicate news id '{}'", item.id));
            }
        }

        for item in self.news.iter().filter(|n| !n.pinned) {
            if item.is_auto_dated() {
                findings.push(format!(
                    "News '{}' is dated 'auto' but not pinned and will sort last",
                    item.id
                ));
            } else if item.parsed_date().is_none() {
                findings.push(format!(
                    "News '{}' has unparseable date '{}' and will sort last",
                    item.id, item.date
                ));
            }
        }

        let pinned: Vec<&str> = self
            .news
            .iter()
            .filter(|n| n.pinned)
            .map(|n| n.id.as_str())
            .collect();
        if pinned.len() > 1 {
            findings.push(format!(
                "{} pinned news items ({}); only '{}' is shown in the banner",
                pinned.len(),
                pinned.join(", "),
                pinned[0]
            ));
        }

        let known: HashSet<&str> = self
            .publications
            .iter()
            .map(|p| p.id.as_str())
            .chain(self.datasets.iter().map(|d| d.id.as_str()))
            .collect();
        for item in &self.news {
            if let Some(related) = item.related() {
                if !known.contains(related) {
                    findings.push(format!(
                        "News '{}' refers to unknown entity '{}'",
                        item.id, related
                    ));
                }
            }
        }

        findings
    }
}

fn parse<T: DeserializeOwned>(kind: ContentKind, bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|e| AppError::load(kind.file_name(), e))
}
