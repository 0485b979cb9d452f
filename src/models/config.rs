//! Tool configuration structures (`homepage.toml`).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Environment variable overriding `site.source`.
pub const ENV_SOURCE: &str = "HOMEPAGE_SOURCE";
/// Environment variable overriding `news.items_per_page`.
pub const ENV_ITEMS_PER_PAGE: &str = "HOMEPAGE_ITEMS_PER_PAGE";
/// Environment variable overriding `stats.document`.
pub const ENV_STATS_DOCUMENT: &str = "HOMEPAGE_STATS_DOCUMENT";

/// Root tool configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Where the content documents live
    #[serde(default)]
    pub site: SiteSettings,

    /// HTTP client settings for remote sources
    #[serde(default)]
    pub http: HttpConfig,

    /// News feed pagination settings
    #[serde(default)]
    pub news: NewsSettings,

    /// Citation statistics settings
    #[serde(default)]
    pub stats: StatsConfig,

    /// Terminal rendering settings
    #[serde(default)]
    pub render: RenderConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(source) = lookup(ENV_SOURCE) {
            self.site.source = source;
        }
        if let Some(raw) = lookup(ENV_ITEMS_PER_PAGE) {
            let value = raw.trim().parse::<usize>().map_err(|_| {
                AppError::config(format!("{ENV_ITEMS_PER_PAGE} is not a number: {raw}"))
            })?;
            self.news.items_per_page = Some(value);
        }
        if let Some(document) = lookup(ENV_STATS_DOCUMENT) {
            self.stats.document = document;
        }
        Ok(())
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.site.source.trim().is_empty() {
            return Err(AppError::validation("site.source is empty"));
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.news.items_per_page == Some(0) {
            return Err(AppError::validation("news.items_per_page must be > 0"));
        }
        if self.stats.timeout_secs == 0 {
            return Err(AppError::validation("stats.timeout_secs must be > 0"));
        }
        if self.stats.document.trim().is_empty() {
            return Err(AppError::validation("stats.document is empty"));
        }
        if self.render.width == 0 {
            return Err(AppError::validation("render.width must be > 0"));
        }
        Ok(())
    }
}

/// Content location settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Directory path or `http(s)://` base URL holding the JSON documents
    #[serde(default = "defaults::source")]
    pub source: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            source: defaults::source(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// News pagination settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsSettings {
    /// Upper bound on page buttons before the window is compressed
    #[serde(default = "defaults::max_buttons")]
    pub max_buttons: usize,

    /// Overrides `news_config.items_per_page` from the site document
    #[serde(default)]
    pub items_per_page: Option<usize>,
}

impl Default for NewsSettings {
    fn default() -> Self {
        Self {
            max_buttons: defaults::max_buttons(),
            items_per_page: None,
        }
    }
}

/// Citation statistics settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Whether to fetch the statistics document at all
    #[serde(default = "defaults::stats_enabled")]
    pub enabled: bool,

    /// Statistics document name, relative to the site source
    #[serde(default = "defaults::stats_document")]
    pub document: String,

    /// Give up on the statistics fetch after this many seconds
    #[serde(default = "defaults::stats_timeout")]
    pub timeout_secs: u64,

    /// Text shown for banner fields that are not resolved yet
    #[serde(default = "defaults::placeholder")]
    pub placeholder: String,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::stats_enabled(),
            document: defaults::stats_document(),
            timeout_secs: defaults::stats_timeout(),
            placeholder: defaults::placeholder(),
        }
    }
}

/// Terminal rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Maximum line width in columns
    #[serde(default = "defaults::width")]
    pub width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: defaults::width(),
        }
    }
}

mod defaults {
    pub fn source() -> String {
        "data".into()
    }

    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; homepage/1.0)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // News defaults
    pub fn max_buttons() -> usize {
        7
    }

    // Stats defaults
    pub fn stats_enabled() -> bool {
        true
    }
    pub fn stats_document() -> String {
        "citations.json".into()
    }
    pub fn stats_timeout() -> u64 {
        10
    }
    pub fn placeholder() -> String {
        "...".into()
    }

    pub fn width() -> usize {
        100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.site.source, "data");
        assert_eq!(config.news.max_buttons, 7);
        assert_eq!(config.news.items_per_page, None);
        assert_eq!(config.stats.document, "citations.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_section() {
        let config: Config = toml::from_str(
            r#"
            [news]
            items_per_page = 5

            [stats]
            enabled = false
            "#,
        )
        .unwrap();
        assert_eq!(config.news.items_per_page, Some(5));
        assert_eq!(config.news.max_buttons, 7);
        assert!(!config.stats.enabled);
        assert_eq!(config.stats.timeout_secs, 10);
    }

    #[test]
    fn test_validate_rejects_zero_items_per_page() {
        let mut config = Config::default();
        config.news.items_per_page = Some(0);
        assert!(matches!(config.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.http.user_agent = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides_from_lookup() {
        let mut config = Config::default();
        config
            .apply_overrides_from(|key| match key {
                ENV_SOURCE => Some("https://example.org/data/".into()),
                ENV_ITEMS_PER_PAGE => Some("25".into()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.site.source, "https://example.org/data/");
        assert_eq!(config.news.items_per_page, Some(25));
        assert_eq!(config.stats.document, "citations.json");
    }

    #[test]
    fn test_bad_override_is_config_error() {
        let mut config = Config::default();
        let result = config.apply_overrides_from(|key| {
            (key == ENV_ITEMS_PER_PAGE).then(|| "ten".to_string())
        });
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default("/nonexistent/homepage.toml");
        assert_eq!(config.render.width, 100);
    }
}
