//! Citation statistics and the pinned banner figures.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The citation statistics document.
///
/// ```json
/// {"citedby": 1520, "publications": {"key": {"num_citations": 42}}}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CitationStats {
    #[serde(default)]
    pub citedby: u64,

    #[serde(default)]
    pub publications: HashMap<String, PublicationStats>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PublicationStats {
    #[serde(default)]
    pub num_citations: u64,
}

impl CitationStats {
    /// Citation count for a publication's citation key.
    pub fn citations_for(&self, key: &str) -> Option<u64> {
        self.publications.get(key).map(|p| p.num_citations)
    }
}

/// Figures shown in the pinned statistics banner.
///
/// Unset fields render as the placeholder until they resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerStats {
    pub total_downloads: Option<u64>,
    pub total_citations: Option<u64>,
    pub highly_cited_count: Option<usize>,
}

impl BannerStats {
    /// Merge a later patch; fields the patch lacks keep their value.
    pub fn merge(self, patch: BannerStats) -> Self {
        Self {
            total_downloads: patch.total_downloads.or(self.total_downloads),
            total_citations: patch.total_citations.or(self.total_citations),
            highly_cited_count: patch.highly_cited_count.or(self.highly_cited_count),
        }
    }

    /// Fill the banner template.
    ///
    /// Supported placeholders: `{downloads}`, `{citations}`, `{highly_cited}`.
    pub fn fill(&self, template: &str, placeholder: &str) -> String {
        fn show<T: ToString>(value: Option<T>, placeholder: &str) -> String {
            value.map_or_else(|| placeholder.to_string(), |v| v.to_string())
        }

        template
            .replace("{downloads}", &show(self.total_downloads, placeholder))
            .replace("{citations}", &show(self.total_citations, placeholder))
            .replace("{highly_cited}", &show(self.highly_cited_count, placeholder))
    }
}
