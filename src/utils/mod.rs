//! Utility functions and helpers.

pub mod http;

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_]").expect("static regex"));

/// Whether a source string names an `http(s)` location.
pub fn is_remote(source: &str) -> bool {
    Url::parse(source)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Lowercase, turn spaces into underscores and drop anything that is not
/// a letter, digit or underscore. Non-ASCII letters are kept.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase().replace(' ', "_");
    NON_SLUG_CHARS.replace_all(&lowered, "").into_owned()
}

/// The first `n` characters of `text`.
pub fn take_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_remote() {
        assert!(is_remote("https://example.org/data/"));
        assert!(is_remote("http://localhost:8000"));
        assert!(!is_remote("data"));
        assert!(!is_remote("/srv/www/data"));
        assert!(!is_remote("file:///srv/www/data"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Best Paper Award"), "best_paper_award");
        assert_eq!(slugify("IEEE GRSS (2024)!"), "ieee_grss_2024");
        assert_eq!(slugify("Ünïcode"), "ünïcode");
        assert_eq!(slugify("国家 奖学金"), "国家_奖学金");
    }

    #[test]
    fn test_take_chars() {
        assert_eq!(take_chars("abcdef", 3), "abc");
        assert_eq!(take_chars("ab", 3), "ab");
        assert_eq!(take_chars("优秀青年奖", 2), "优秀");
    }
}
