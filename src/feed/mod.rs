//! News feed computation, independent of any I/O.
//!
//! - `aggregator`: pinned/feed partition and date sort
//! - `pagination`: page windows and slices
//! - `navigator`: the page state machine

pub mod aggregator;
pub mod navigator;
pub mod pagination;

pub use aggregator::NewsAggregator;
pub use navigator::{NewsFeed, RenderFrame};
pub use pagination::{ButtonSpec, DEFAULT_MAX_BUTTONS, compute_window, slice, total_pages};
