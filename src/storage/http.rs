//! HTTP storage implementation for a published site.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::error::Result;
use crate::storage::ContentSource;

/// Reads documents relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpStorage {
    base: Url,
    client: Client,
}

impl HttpStorage {
    /// Create a storage rooted at `base_url`. A missing trailing slash is
    /// added so documents resolve inside the directory.
    pub fn new(base_url: &str, client: Client) -> Result<Self> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base, client })
    }

    /// Full URL of a document.
    pub fn document_url(&self, name: &str) -> Result<Url> {
        Ok(self.base.join(name)?)
    }
}

#[async_trait]
impl ContentSource for HttpStorage {
    fn describe(&self) -> String {
        self.base.to_string()
    }

    async fn read_document(&self, name: &str) -> Result<Option<Vec<u8>>> {
        let url = self.document_url(name)?;
        log::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let bytes = response.error_for_status()?.bytes().await?;
        Ok(Some(bytes.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_url_adds_trailing_slash() {
        let storage = HttpStorage::new("https://example.org/site/data", Client::new()).unwrap();
        assert_eq!(
            storage.document_url("news.json").unwrap().as_str(),
            "https://example.org/site/data/news.json"
        );
    }

    #[test]
    fn test_document_url_keeps_existing_slash() {
        let storage = HttpStorage::new("https://example.org/", Client::new()).unwrap();
        assert_eq!(
            storage.document_url("code-tools.json").unwrap().as_str(),
            "https://example.org/code-tools.json"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(HttpStorage::new("not a url", Client::new()).is_err());
    }
}
