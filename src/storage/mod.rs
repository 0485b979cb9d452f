//! Content sources for the homepage documents.
//!
//! A source hands out raw document bytes by name. Two backends exist:
//!
//! ```text
//! data/                      https://example.org/data/
//! ├── config.json            ├── config.json
//! ├── publications.json      ├── ...
//! ├── ...                    └── citations.json
//! └── citations.json
//! ```
//!
//! `LocalStorage` also writes, which the announcement tooling needs.

pub mod http;
pub mod local;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Config;
use crate::utils::{http::create_async_client, is_remote};

// Re-export for convenience
pub use http::HttpStorage;
pub use local::LocalStorage;

/// Trait for content document backends.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Human-readable location, for logs.
    fn describe(&self) -> String;

    /// Read a document by name. `None` means the document does not exist.
    async fn read_document(&self, name: &str) -> Result<Option<Vec<u8>>>;
}

/// Open the source named by `site.source`.
pub fn open(config: &Config) -> Result<Box<dyn ContentSource>> {
    let source = config.site.source.trim();
    if is_remote(source) {
        let client = create_async_client(&config.http)?;
        Ok(Box::new(HttpStorage::new(source, client)?))
    } else {
        Ok(Box::new(LocalStorage::new(source)))
    }
}
