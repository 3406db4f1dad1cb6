//! Full-text acquisition configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AcquisitionConfig {
    /// Attempt PDF downloads at all. Default: true.
    pub enabled: Option<bool>,
    /// Fetch timeout in seconds. Default: 10.
    pub timeout_secs: Option<u64>,
    /// Minimum payload size in bytes. Default: 50_000.
    pub min_pdf_bytes: Option<usize>,
    /// Minimum word count of parsed text. Default: 100.
    pub min_word_count: Option<usize>,
    /// User-Agent header. Default: "Mozilla/5.0".
    pub user_agent: Option<String>,
    /// Block-signal substrings, matched case-insensitively.
    #[serde(default)]
    pub block_signals: Vec<String>,
}

impl AcquisitionConfig {
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn effective_timeout_secs(&self) -> u64 {
        self.timeout_secs
            .unwrap_or(constants::DEFAULT_FETCH_TIMEOUT_SECS)
    }

    pub fn effective_min_pdf_bytes(&self) -> usize {
        self.min_pdf_bytes.unwrap_or(constants::DEFAULT_MIN_PDF_BYTES)
    }

    pub fn effective_min_word_count(&self) -> usize {
        self.min_word_count
            .unwrap_or(constants::DEFAULT_MIN_WORD_COUNT)
    }

    pub fn effective_user_agent(&self) -> &str {
        self.user_agent
            .as_deref()
            .unwrap_or(constants::DEFAULT_USER_AGENT)
    }

    /// Lower-cased block signals; the compiled defaults when none are set.
    pub fn effective_block_signals(&self) -> Vec<String> {
        if self.block_signals.is_empty() {
            constants::DEFAULT_BLOCK_SIGNALS
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            self.block_signals.iter().map(|s| s.to_lowercase()).collect()
        }
    }
}
