//! Search-results provider errors.

use super::error_code::{self, ThemeErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("missing API key: set search.api_key or SERPAPI_KEY")]
    MissingApiKey,

    #[error("search request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("unexpected search response: {reason}")]
    InvalidResponse { reason: String },

    #[error("failed to read corpus file {path}: {reason}")]
    CorpusFile { path: String, reason: String },
}

impl ThemeErrorCode for SearchError {
    fn error_code(&self) -> &'static str {
        error_code::SEARCH_ERROR
    }
}
