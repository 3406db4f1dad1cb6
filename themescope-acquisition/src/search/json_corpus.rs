//! Offline corpus source: a JSON array of `DocumentRecord`s or a saved
//! SerpApi response.

use std::path::{Path, PathBuf};

use themescope_core::errors::SearchError;
use themescope_core::models::DocumentRecord;
use themescope_core::traits::ISearchProvider;

use super::serpapi;

pub struct JsonCorpusProvider {
    path: PathBuf,
}

impl JsonCorpusProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ISearchProvider for JsonCorpusProvider {
    fn search(&self) -> Result<Vec<DocumentRecord>, SearchError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| SearchError::CorpusFile {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        if content.trim_start().starts_with('[') {
            serde_json::from_str(&content).map_err(|e| SearchError::CorpusFile {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })
        } else {
            serpapi::parse_response(&content)
        }
    }

    fn name(&self) -> &str {
        "json-corpus"
    }
}
