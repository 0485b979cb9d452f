//! News generation for newly added content.
//!
//! Builds the standard news entry for a publication, dataset or award and
//! inserts it at the top of the unpinned news in `news.json`.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{AppError, Result};
use crate::models::{Award, DATE_FORMAT, Dataset, NewsCategory, NewsItem, Publication};
use crate::services::content::{ContentKind, ContentStore, NewsDocument};
use crate::storage::LocalStorage;
use crate::utils::{slugify, take_chars};

/// Which kind of entity a news entry announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnounceKind {
    Publication,
    Dataset,
    Award,
}

impl FromStr for AnnounceKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "publication" | "paper" => Ok(Self::Publication),
            "dataset" => Ok(Self::Dataset),
            "award" => Ok(Self::Award),
            other => Err(AppError::validation(format!(
                "Unknown announcement kind '{other}' (expected publication, dataset or award)"
            ))),
        }
    }
}

impl fmt::Display for AnnounceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Publication => "publication",
            Self::Dataset => "dataset",
            Self::Award => "award",
        })
    }
}

fn status_phrase(status: &str) -> &'static str {
    match status {
        "published" => "was published in",
        "accepted" => "was accepted by",
        "under_review" => "was submitted to",
        _ => "appeared in",
    }
}

/// The date a news entry carries: the entity's `added_date` when it parses,
/// otherwise `fallback`.
fn news_date(added_date: &str, fallback: NaiveDate) -> String {
    NaiveDate::parse_from_str(added_date.trim(), DATE_FORMAT)
        .unwrap_or(fallback)
        .format(DATE_FORMAT)
        .to_string()
}

pub fn news_for_publication(publication: &Publication, today: NaiveDate) -> NewsItem {
    NewsItem {
        id: format!("news_{}", publication.id),
        date: news_date(&publication.added_date, today),
        content: format!(
            "Our paper on <em>{}</em> {} <em>{}</em>.",
            publication.title,
            status_phrase(&publication.status),
            publication.venue
        ),
        category: NewsCategory::Publication,
        related_id: Some(publication.id.clone()),
        pinned: false,
        auto_generated: true,
    }
}

pub fn news_for_dataset(dataset: &Dataset, today: NaiveDate) -> NewsItem {
    NewsItem {
        id: format!("news_{}", dataset.id),
        date: news_date(&dataset.added_date, today),
        content: format!(
            "Released <em>{}</em> dataset with <strong>{}+</strong> downloads.",
            dataset.name, dataset.downloads
        ),
        category: NewsCategory::Dataset,
        related_id: Some(dataset.id.clone()),
        pinned: false,
        auto_generated: true,
    }
}

pub fn news_for_award(award: &Award, today: NaiveDate) -> NewsItem {
    let year = award.year.map(|y| y.to_string()).unwrap_or_default();
    NewsItem {
        id: slugify(&format!(
            "news_award_{}_{}",
            year,
            take_chars(&award.name, 20)
        )),
        date: news_date(&award.added_date, today),
        content: format!(
            "Received <em>{}</em> from {}.",
            award.name, award.organization
        ),
        category: NewsCategory::Award,
        related_id: None,
        pinned: false,
        auto_generated: true,
    }
}

/// Insert `item` ahead of the existing unpinned news.
///
/// Returns `false` and leaves `items` alone when the id already exists.
pub fn insert_news(items: &mut Vec<NewsItem>, item: NewsItem) -> bool {
    if items.iter().any(|n| n.id == item.id) {
        return false;
    }
    let (mut ordered, regular): (Vec<_>, Vec<_>) = items.drain(..).partition(|n| n.pinned);
    ordered.push(item);
    ordered.extend(regular);
    *items = ordered;
    true
}

/// Generate the news entry for an existing entity and save `news.json`.
///
/// `key` is the entity id, or for awards (which have no id) the zero-based
/// position in `awards.json`. Returns `None` when the entry already exists.
pub async fn announce(
    storage: &LocalStorage,
    kind: AnnounceKind,
    key: &str,
    today: NaiveDate,
) -> Result<Option<NewsItem>> {
    let content = ContentStore::load(storage).await?;
    let item = match kind {
        AnnounceKind::Publication => content
            .publication(key)
            .map(|publication| news_for_publication(publication, today))
            .ok_or_else(|| AppError::not_found("publication", key))?,
        AnnounceKind::Dataset => content
            .dataset(key)
            .map(|dataset| news_for_dataset(dataset, today))
            .ok_or_else(|| AppError::not_found("dataset", key))?,
        AnnounceKind::Award => key
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|idx| content.award_by_index(idx))
            .map(|award| news_for_award(award, today))
            .ok_or_else(|| AppError::not_found("award", key))?,
    };

    let name = ContentKind::News.file_name();
    let mut doc: NewsDocument = storage.read_json(name).await?.unwrap_or_default();
    if !insert_news(&mut doc.news, item.clone()) {
        log::info!("News entry '{}' already exists, nothing to do", item.id);
        return Ok(None);
    }

    storage.write_json(name, &doc).await?;
    log::info!("Added news entry '{}' to {}", item.id, name);
    Ok(Some(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::content::tests::write_site;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn regular(id: &str) -> NewsItem {
        NewsItem {
            id: id.into(),
            date: "2024-01-01".into(),
            content: String::new(),
            category: NewsCategory::default(),
            related_id: None,
            pinned: false,
            auto_generated: false,
        }
    }

    #[test]
    fn test_publication_news() {
        let publication = Publication {
            id: "ocean_heat_2023".into(),
            title: "Ocean heat".into(),
            venue: "Nature".into(),
            status: "accepted".into(),
            added_date: "2024-02-03".into(),
            ..Default::default()
        };
        let item = news_for_publication(&publication, today());
        assert_eq!(item.id, "news_ocean_heat_2023");
        assert_eq!(item.date, "2024-02-03");
        assert_eq!(
            item.content,
            "Our paper on <em>Ocean heat</em> was accepted by <em>Nature</em>."
        );
        assert_eq!(item.related(), Some("ocean_heat_2023"));
        assert!(item.auto_generated);
    }

    #[test]
    fn test_unknown_status_phrase() {
        let publication = Publication {
            id: "p".into(),
            title: "T".into(),
            venue: "V".into(),
            status: "preprint".into(),
            ..Default::default()
        };
        let item = news_for_publication(&publication, today());
        assert_eq!(item.content, "Our paper on <em>T</em> appeared in <em>V</em>.");
        assert_eq!(item.date, "2025-06-01");
    }

    #[test]
    fn test_dataset_news() {
        let dataset = Dataset {
            id: "global_sst".into(),
            name: "Global SST".into(),
            downloads: 1200,
            ..Default::default()
        };
        let item = news_for_dataset(&dataset, today());
        assert_eq!(item.id, "news_global_sst");
        assert_eq!(
            item.content,
            "Released <em>Global SST</em> dataset with <strong>1200+</strong> downloads."
        );
        assert_eq!(item.category, NewsCategory::Dataset);
    }

    #[test]
    fn test_award_news_id() {
        let award = Award {
            year: Some(2024),
            name: "Outstanding Young Scientist Award".into(),
            organization: "AGU".into(),
            ..Default::default()
        };
        let item = news_for_award(&award, today());
        assert_eq!(item.id, "news_award_2024_outstanding_young_sc");
        assert_eq!(item.content, "Received <em>Outstanding Young Scientist Award</em> from AGU.");
        assert_eq!(item.related(), None);
    }

    #[test]
    fn test_insert_after_pinned() {
        let mut pinned = regular("stats");
        pinned.pinned = true;
        let mut items = vec![regular("old"), pinned];

        assert!(insert_news(&mut items, regular("new")));
        let ids: Vec<&str> = items.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["stats", "new", "old"]);
    }

    #[test]
    fn test_insert_duplicate_rejected() {
        let mut items = vec![regular("a")];
        assert!(!insert_news(&mut items, regular("a")));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("Paper".parse::<AnnounceKind>().unwrap(), AnnounceKind::Publication);
        assert_eq!("award".parse::<AnnounceKind>().unwrap(), AnnounceKind::Award);
        assert!("talk".parse::<AnnounceKind>().is_err());
    }

    #[tokio::test]
    async fn test_announce_writes_news() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        write_site(&storage).await;

        let item = announce(&storage, AnnounceKind::Publication, "sea_ice_2024", today())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(item.id, "news_sea_ice_2024");

        let doc: NewsDocument = storage.read_json("news.json").await.unwrap().unwrap();
        assert_eq!(doc.news.len(), 5);
        assert_eq!(doc.news[0].id, "stats");
        assert_eq!(doc.news[1].id, "news_sea_ice_2024");

        let again = announce(&storage, AnnounceKind::Publication, "sea_ice_2024", today())
            .await
            .unwrap();
        assert!(again.is_none());
    }

    #[tokio::test]
    async fn test_announce_award_by_index() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        write_site(&storage).await;

        let item = announce(&storage, AnnounceKind::Award, "0", today())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(item.id, "news_award_2024_young_scientist_awar");

        let missing = announce(&storage, AnnounceKind::Award, "3", today()).await;
        assert!(matches!(missing, Err(AppError::NotFound { .. })));
    }

    #[test]
    fn test_award_ids_keep_non_ascii_names() {
        let award = |name: &str| Award {
            year: Some(2024),
            name: name.into(),
            organization: "University".into(),
            ..Default::default()
        };
        let first = news_for_award(&award("国家奖学金"), today());
        let second = news_for_award(&award("优秀毕业生"), today());
        assert_eq!(first.id, "news_award_2024_国家奖学金");
        assert_eq!(second.id, "news_award_2024_优秀毕业生");

        let mut items = Vec::new();
        assert!(insert_news(&mut items, first));
        assert!(insert_news(&mut items, second));
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn test_announce_unknown_dataset() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        write_site(&storage).await;

        let result = announce(&storage, AnnounceKind::Dataset, "ghost", today()).await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }
}
