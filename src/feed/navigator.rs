//! Page navigation state for the news feed.
//!
//! `NewsFeed` is constructed once per session and owns everything the
//! renderer needs. Each transition returns a fresh `RenderFrame`; the
//! renderer never reaches back into the state.

use serde::Serialize;

use crate::models::{BannerStats, NewsItem};

use super::aggregator::NewsAggregator;
use super::pagination::{self, ButtonSpec};

/// What the renderer draws for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    /// Current page, 1-indexed
    pub page: usize,
    pub total_pages: usize,
    /// Feed items of the current page, newest first
    pub items: Vec<NewsItem>,
    pub buttons: Vec<ButtonSpec>,
    /// Pagination controls are hidden for a single page
    pub controls_visible: bool,
    /// Filled pinned banner, if any item is pinned
    pub banner: Option<String>,
    /// Set when the transition came from explicit navigation
    pub scroll_to_top: bool,
}

/// The news feed state machine.
#[derive(Debug, Clone)]
pub struct NewsFeed {
    news: NewsAggregator,
    items_per_page: usize,
    max_buttons: usize,
    current_page: usize,
    stats: BannerStats,
    placeholder: String,
}

impl NewsFeed {
    /// Build the feed, starting on page 1.
    pub fn new(items: Vec<NewsItem>, items_per_page: usize, max_buttons: usize) -> Self {
        Self {
            news: NewsAggregator::load(items),
            items_per_page: items_per_page.max(1),
            max_buttons,
            current_page: 1,
            stats: BannerStats::default(),
            placeholder: "...".to_string(),
        }
    }

    /// Text shown for unresolved banner figures.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Banner figures known before the first render.
    pub fn with_stats(mut self, stats: BannerStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.news.feed().len(), self.items_per_page)
    }

    pub fn news(&self) -> &NewsAggregator {
        &self.news
    }

    pub fn stats(&self) -> BannerStats {
        self.stats
    }

    /// The current view without side effects.
    pub fn frame(&self) -> RenderFrame {
        self.build_frame(false)
    }

    /// Navigate to page `n`; out-of-range values are clamped.
    pub fn go_to(&mut self, n: i64) -> RenderFrame {
        let total = self.total_pages();
        let page = pagination::clamp_page(n, total);
        if i64::try_from(page).ok() != Some(n) {
            log::debug!("Page {} clamped to {} (of {})", n, page, total);
        }
        self.current_page = page;
        self.build_frame(true)
    }

    /// Replace the news items and return to page 1.
    pub fn reload(&mut self, items: Vec<NewsItem>) -> RenderFrame {
        self.news = NewsAggregator::load(items);
        self.current_page = 1;
        self.build_frame(false)
    }

    /// Merge late-arriving statistics and return the re-filled banner.
    ///
    /// The current page and pagination are left alone.
    pub fn patch_stats(&mut self, patch: BannerStats) -> Option<String> {
        self.stats = self.stats.merge(patch);
        self.banner()
    }

    /// The pinned banner with the known figures filled in.
    pub fn banner(&self) -> Option<String> {
        self.news
            .pinned_banner()
            .map(|template| self.stats.fill(template, &self.placeholder))
    }

    fn build_frame(&self, scroll_to_top: bool) -> RenderFrame {
        let total_pages = self.total_pages();
        let items = pagination::slice(
            self.news.feed(),
            self.current_page as i64,
            self.items_per_page,
        )
        .to_vec();

        RenderFrame {
            page: self.current_page,
            total_pages,
            items,
            buttons: pagination::compute_window(self.current_page, total_pages, self.max_buttons),
            controls_visible: total_pages > 1,
            banner: self.banner(),
            scroll_to_top,
        }
    }
}
