//! Partitions news into the pinned slot and the date-sorted feed.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::models::NewsItem;

/// News split into pinned items and the paged feed.
#[derive(Debug, Clone, Default)]
pub struct NewsAggregator {
    pinned: Vec<NewsItem>,
    feed: Vec<NewsItem>,
}

impl NewsAggregator {
    /// Partition by `pinned` and sort the feed newest first.
    ///
    /// The sort is stable: equal dates keep their input order. Items whose
    /// date does not parse sort after every dated item.
    pub fn load(items: Vec<NewsItem>) -> Self {
        let (pinned, mut feed): (Vec<_>, Vec<_>) = items.into_iter().partition(|n| n.pinned);

        for item in feed.iter().filter(|n| n.parsed_date().is_none()) {
            log::debug!(
                "News item '{}' has unparseable date '{}', sorting it last",
                item.id,
                item.date
            );
        }

        let mut keyed: Vec<(Option<NaiveDate>, NewsItem)> =
            feed.drain(..).map(|n| (n.parsed_date(), n)).collect();
        keyed.sort_by(|(a, _), (b, _)| newest_first(a, b));
        feed.extend(keyed.into_iter().map(|(_, n)| n));

        Self { pinned, feed }
    }

    /// Pinned items in load order.
    pub fn pinned(&self) -> &[NewsItem] {
        &self.pinned
    }

    /// The sorted, unpinned feed.
    pub fn feed(&self) -> &[NewsItem] {
        &self.feed
    }

    /// Content of the first pinned item. Only one banner slot exists.
    pub fn pinned_banner(&self) -> Option<&str> {
        self.pinned.first().map(|n| n.content.as_str())
    }
}

fn newest_first(a: &Option<NaiveDate>, b: &Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
