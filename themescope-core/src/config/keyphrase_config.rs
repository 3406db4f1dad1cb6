//! Keyphrase extraction configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KeyphraseConfig {
    /// Phrases kept per document. Default: 5.
    pub top_n: Option<usize>,
    /// Shortest candidate, in tokens. Default: 1.
    pub min_ngram: Option<usize>,
    /// Longest candidate, in tokens. Default: 3.
    pub max_ngram: Option<usize>,
    /// Candidate cap per document. Default: 2000.
    pub max_candidates: Option<usize>,
}

impl KeyphraseConfig {
    pub fn effective_top_n(&self) -> usize {
        self.top_n.unwrap_or(constants::DEFAULT_TOP_N)
    }

    pub fn effective_min_ngram(&self) -> usize {
        self.min_ngram.unwrap_or(constants::DEFAULT_MIN_NGRAM)
    }

    pub fn effective_max_ngram(&self) -> usize {
        self.max_ngram.unwrap_or(constants::DEFAULT_MAX_NGRAM)
    }

    pub fn effective_max_candidates(&self) -> usize {
        self.max_candidates
            .unwrap_or(constants::DEFAULT_MAX_CANDIDATES)
    }
}
