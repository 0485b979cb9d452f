//! Service layer for the homepage tooling.
//!
//! This module contains the business logic for:
//! - Document loading (`ContentStore`)
//! - Citation statistics (`fetch_citation_stats`)
//! - Per-run context (`Session`)
//! - News generation (`announce`)

pub mod announce;
pub mod content;
pub mod session;
pub mod stats;

pub use announce::{AnnounceKind, announce, insert_news};
pub use content::{ContentKind, ContentStore};
pub use session::{Session, join_stats};
pub use stats::{banner_patch, fetch_citation_stats};
