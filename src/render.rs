//! Terminal rendering of news frames.
//!
//! Presentation only: a `RenderFrame` goes in, text comes out.

use scraper::Html;
use unicode_segmentation::UnicodeSegmentation;

use crate::feed::{ButtonSpec, RenderFrame};
use crate::models::NewsItem;

const ELLIPSIS: &str = "…";
const DATE_WIDTH: usize = 10;

/// Renders frames as plain text lines.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    width: usize,
    /// Shown in the date column of items without a usable date
    placeholder: String,
}

impl TextRenderer {
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(20),
            placeholder: "-".repeat(DATE_WIDTH),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Render the whole frame: banner, items, controls.
    pub fn render(&self, frame: &RenderFrame) -> String {
        let mut lines = Vec::new();

        if let Some(banner) = &frame.banner {
            lines.push(self.render_banner(banner));
            lines.push(String::new());
        }

        if frame.items.is_empty() {
            lines.push("No news yet.".to_string());
        } else {
            lines.extend(frame.items.iter().map(|item| self.render_item(item)));
        }

        if frame.controls_visible {
            lines.push(String::new());
            lines.push(format!(
                "{}   Page {}/{}",
                render_controls(&frame.buttons),
                frame.page,
                frame.total_pages
            ));
        }

        lines.join("\n")
    }

    pub fn render_banner(&self, banner: &str) -> String {
        truncate(&format!("* {}", strip_markup(banner)), self.width)
    }

    pub fn render_item(&self, item: &NewsItem) -> String {
        let date = if item.parsed_date().is_some() {
            item.date.trim()
        } else {
            self.placeholder.as_str()
        };
        let line = format!(
            "{:<width$}  {:<13} {}",
            date,
            format!("[{}]", item.category),
            strip_markup(&item.content),
            width = DATE_WIDTH
        );
        truncate(&line, self.width)
    }
}

/// One control line, e.g. `‹ 1 … 4 [5] 6 … 12 ›`. Disabled arrows are blank.
pub fn render_controls(buttons: &[ButtonSpec]) -> String {
    buttons
        .iter()
        .map(|button| match *button {
            ButtonSpec::Prev { disabled, .. } => (if disabled { " " } else { "‹" }).to_string(),
            ButtonSpec::Next { disabled, .. } => (if disabled { " " } else { "›" }).to_string(),
            ButtonSpec::Page {
                number,
                active: true,
                ..
            } => format!("[{number}]"),
            ButtonSpec::Page { number, .. } => number.to_string(),
            ButtonSpec::Ellipsis => ELLIPSIS.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text content of an HTML fragment with whitespace collapsed.
pub fn strip_markup(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text: String = fragment.root_element().text().collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut `text` to at most `width` grapheme clusters, marking the cut.
pub fn truncate(text: &str, width: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(1);
    let mut out: String = graphemes[..keep].concat();
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{NewsFeed, compute_window};
    use crate::models::NewsCategory;

    fn item(id: &str, date: &str, content: &str) -> NewsItem {
        NewsItem {
            id: id.into(),
            date: date.into(),
            content: content.into(),
            category: NewsCategory::Publication,
            related_id: None,
            pinned: false,
            auto_generated: false,
        }
    }

    #[test]
    fn test_strip_markup() {
        assert_eq!(
            strip_markup("Our paper on <em>Ocean  heat</em> was published in <em>Nature</em>."),
            "Our paper on Ocean heat was published in Nature."
        );
        assert_eq!(strip_markup("plain &amp; simple"), "plain & simple");
    }

    #[test]
    fn test_truncate_graphemes() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
        assert_eq!(truncate("🌍🌍🌍🌍", 3), "🌍🌍…");
    }

    #[test]
    fn test_render_controls() {
        assert_eq!(render_controls(&compute_window(2, 3, 7)), "‹ 1 [2] 3 ›");
        assert_eq!(render_controls(&compute_window(1, 3, 7)), "  [1] 2 3 ›");
        assert_eq!(
            render_controls(&compute_window(5, 12, 7)),
            "‹ 1 … 4 [5] 6 … 12 ›"
        );
    }

    #[test]
    fn test_render_item_line() {
        let renderer = TextRenderer::new(80);
        assert_eq!(
            renderer.render_item(&item("a", "2024-03-01", "Released <em>SST</em>")),
            "2024-03-01  [publication] Released SST"
        );
        assert!(
            renderer
                .render_item(&item("b", "bad", "x"))
                .starts_with("----------")
        );

        let renderer = TextRenderer::new(80).with_placeholder("undated");
        assert_eq!(
            renderer.render_item(&item("c", "", "Soon")),
            "undated     [publication] Soon"
        );
    }

    #[test]
    fn test_render_single_page_hides_controls() {
        let feed = NewsFeed::new(vec![item("a", "2024-01-01", "Hello")], 10, 7);
        let text = TextRenderer::new(80).render(&feed.frame());
        assert!(!text.contains("Page"));
        assert!(text.contains("Hello"));
    }

    #[test]
    fn test_render_multi_page() {
        let items = (1..=12)
            .map(|d| item(&format!("n{d}"), &format!("2025-01-{d:02}"), "x"))
            .collect();
        let mut feed = NewsFeed::new(items, 5, 7);
        let text = TextRenderer::new(80).render(&feed.go_to(2));
        assert!(text.ends_with("‹ 1 [2] 3 ›   Page 2/3"));
        assert!(text.starts_with("2025-01-07"));
    }

    #[test]
    fn test_render_empty() {
        let feed = NewsFeed::new(Vec::new(), 10, 7);
        assert_eq!(TextRenderer::new(80).render(&feed.frame()), "No news yet.");
    }
}
