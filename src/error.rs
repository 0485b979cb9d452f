// src/error.rs

//! Unified error handling for the homepage tooling.

use std::fmt;

use thiserror::Error;

/// Result type alias for homepage operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A required content document could not be loaded
    #[error("Failed to load {document}: {message}")]
    Load { document: String, message: String },

    /// Lookup of a content entity failed
    #[error("No {kind} found for '{id}'")]
    NotFound { kind: String, id: String },
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a document load error.
    pub fn load(document: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Load {
            document: document.into(),
            message: message.to_string(),
        }
    }

    /// Create a lookup error.
    pub fn not_found(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Whether this error must abort the initial render.
    pub fn is_fatal_load(&self) -> bool {
        matches!(self, Self::Load { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_message() {
        let err = AppError::load("news.json", "expected value at line 1");
        assert_eq!(
            err.to_string(),
            "Failed to load news.json: expected value at line 1"
        );
        assert!(err.is_fatal_load());
    }

    #[test]
    fn test_not_found_is_not_fatal() {
        let err = AppError::not_found("publication", "deep_learning_2024");
        assert!(!err.is_fatal_load());
        assert_eq!(
            err.to_string(),
            "No publication found for 'deep_learning_2024'"
        );
    }
}
