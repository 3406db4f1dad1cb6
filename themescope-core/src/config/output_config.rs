//! Output artifact configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Per-document keyword table. Default: "scholar_keywords.csv".
    pub keywords_path: Option<String>,
    /// Cluster summary table. Default: "summary_result.csv".
    pub summary_path: Option<String>,
    /// Entries in the corpus-wide phrase report. Default: 5.
    pub top_phrases: Option<usize>,
}

impl OutputConfig {
    pub fn effective_keywords_path(&self) -> &str {
        self.keywords_path
            .as_deref()
            .unwrap_or(constants::DEFAULT_KEYWORDS_PATH)
    }

    pub fn effective_summary_path(&self) -> &str {
        self.summary_path
            .as_deref()
            .unwrap_or(constants::DEFAULT_SUMMARY_PATH)
    }

    pub fn effective_top_phrases(&self) -> usize {
        self.top_phrases.unwrap_or(constants::DEFAULT_TOP_PHRASES)
    }
}
