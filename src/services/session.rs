//! Session context.
//!
//! Built once per run and passed to whatever needs it: configuration,
//! the content source, the loaded documents and the news feed state.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::error::Result;
use crate::feed::{NewsFeed, RenderFrame};
use crate::models::{BannerStats, CitationStats, Config};
use crate::services::content::ContentStore;
use crate::services::stats::{banner_patch, fetch_citation_stats};
use crate::storage::ContentSource;

pub struct Session {
    config: Arc<Config>,
    source: Arc<dyn ContentSource>,
    content: ContentStore,
    feed: NewsFeed,
}

impl Session {
    /// Load all documents and build the feed on page 1.
    pub async fn open(config: Arc<Config>, source: Arc<dyn ContentSource>) -> Result<Self> {
        let content = ContentStore::load(source.as_ref()).await?;
        let feed = Self::build_feed(&config, &content);
        Ok(Self {
            config,
            source,
            content,
            feed,
        })
    }

    fn build_feed(config: &Config, content: &ContentStore) -> NewsFeed {
        let items_per_page = config
            .news
            .items_per_page
            .unwrap_or_else(|| content.items_per_page());
        NewsFeed::new(content.news.clone(), items_per_page, config.news.max_buttons)
            .with_placeholder(config.stats.placeholder.clone())
            .with_stats(content.banner_stats())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn feed(&self) -> &NewsFeed {
        &self.feed
    }

    pub fn feed_mut(&mut self) -> &mut NewsFeed {
        &mut self.feed
    }

    /// Start the statistics fetch on its own task.
    ///
    /// Returns `None` when statistics are disabled.
    pub fn spawn_stats(&self) -> Option<JoinHandle<Option<CitationStats>>> {
        if !self.config.stats.enabled {
            log::debug!("Citation stats disabled");
            return None;
        }
        let source = Arc::clone(&self.source);
        let document = self.config.stats.document.clone();
        let timeout = Duration::from_secs(self.config.stats.timeout_secs);
        Some(tokio::spawn(async move {
            fetch_citation_stats(source.as_ref(), &document, timeout).await
        }))
    }

    /// Merge fetched statistics into the banner; pagination is untouched.
    pub fn apply_stats(&mut self, stats: &CitationStats) -> Option<String> {
        self.feed.patch_stats(banner_patch(stats))
    }

    /// Re-read every document and rebuild the feed on page 1.
    ///
    /// Page size and content-derived banner figures follow the new
    /// documents; citations already patched in are kept. On failure the
    /// previous content stays in place.
    pub async fn reload(&mut self) -> Result<RenderFrame> {
        let content = ContentStore::load(self.source.as_ref()).await?;
        let citations = self.feed.stats().total_citations;

        let mut feed = Self::build_feed(&self.config, &content);
        if citations.is_some() {
            feed.patch_stats(BannerStats {
                total_citations: citations,
                ..Default::default()
            });
        }

        self.feed = feed;
        self.content = content;
        Ok(self.feed.frame())
    }
}

/// Wait for a spawned stats fetch. A failed task counts as no stats.
pub async fn join_stats(
    task: Option<JoinHandle<Option<CitationStats>>>,
) -> Option<CitationStats> {
    match task?.await {
        Ok(stats) => stats,
        Err(e) => {
            log::warn!("Citation stats task failed: {}", e);
            None
        }
    }
}
