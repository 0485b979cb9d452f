//! Citation statistics fetch.
//!
//! A single best-effort attempt. Every failure is logged and absorbed;
//! the banner keeps its placeholder text.

use std::time::Duration;

use crate::error::{AppError, Result};
use crate::models::{BannerStats, CitationStats};
use crate::storage::ContentSource;

/// Fetch and parse the statistics document, or `None` on any failure.
pub async fn fetch_citation_stats(
    source: &dyn ContentSource,
    document: &str,
    timeout: Duration,
) -> Option<CitationStats> {
    match tokio::time::timeout(timeout, read_stats(source, document)).await {
        Ok(Ok(stats)) => {
            log::info!(
                "Citation stats loaded: {} total citations, {} publications",
                stats.citedby,
                stats.publications.len()
            );
            Some(stats)
        }
        Ok(Err(e)) => {
            log::warn!("Citation stats unavailable: {}", e);
            None
        }
        Err(_) => {
            log::warn!(
                "Citation stats fetch from {} timed out after {:?}",
                document,
                timeout
            );
            None
        }
    }
}

async fn read_stats(source: &dyn ContentSource, document: &str) -> Result<CitationStats> {
    let bytes = source
        .read_document(document)
        .await?
        .ok_or_else(|| AppError::load(document, "document not found"))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// The banner figures the statistics document contributes.
pub fn banner_patch(stats: &CitationStats) -> BannerStats {
    BannerStats {
        total_citations: Some(stats.citedby),
        ..Default::default()
    }
}
