// src/models/mod.rs

//! Domain models for the homepage tooling.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod content;
mod news;
mod stats;

// Re-export all public types
pub use config::{
    Config, ENV_ITEMS_PER_PAGE, ENV_SOURCE, ENV_STATS_DOCUMENT, HttpConfig, NewsSettings,
    RenderConfig, SiteSettings, StatsConfig,
};
pub use content::{
    Activity, Award, CodeTool, DEFAULT_ITEMS_PER_PAGE, Dataset, Links, NewsConfig, Publication,
    SiteConfig,
};
pub use news::{AUTO_DATE, DATE_FORMAT, NewsCategory, NewsItem};
pub use stats::{BannerStats, CitationStats, PublicationStats};
