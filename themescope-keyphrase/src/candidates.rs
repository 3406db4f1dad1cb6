//! Candidate phrase generation.
//!
//! Tokens are runs of two or more word characters in lower-cased text.
//! Stop words are dropped first, then every run of `min_ngram..=max_ngram`
//! consecutive remaining tokens becomes a candidate. Candidates are unique
//! and ordered by first occurrence (start position, then length).
//!
//! The whole text is scanned before the cap applies. When there are more
//! distinct candidates than `max_candidates`, the most frequent ones are
//! kept, so phrases recurring late in a long paper still compete.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use themescope_core::config::KeyphraseConfig;
use themescope_core::errors::KeyphraseError;

use crate::stopwords::is_stop_word;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateSettings {
    pub min_ngram: usize,
    pub max_ngram: usize,
    /// Distinct candidates sent to the embedder; frequency decides who stays.
    pub max_candidates: usize,
}

impl CandidateSettings {
    pub fn from_config(config: &KeyphraseConfig) -> Result<Self, KeyphraseError> {
        let settings = Self {
            min_ngram: config.effective_min_ngram(),
            max_ngram: config.effective_max_ngram(),
            max_candidates: config.effective_max_candidates(),
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), KeyphraseError> {
        if self.min_ngram == 0 || self.min_ngram > self.max_ngram {
            return Err(KeyphraseError::InvalidRange {
                min: self.min_ngram,
                max: self.max_ngram,
            });
        }
        Ok(())
    }
}

impl Default for CandidateSettings {
    fn default() -> Self {
        Self {
            min_ngram: themescope_core::constants::DEFAULT_MIN_NGRAM,
            max_ngram: themescope_core::constants::DEFAULT_MAX_NGRAM,
            max_candidates: themescope_core::constants::DEFAULT_MAX_CANDIDATES,
        }
    }
}

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("static token pattern"))
}

/// Lower-cased content tokens with stop words removed, in text order.
pub fn content_tokens(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    token_pattern()
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|t| !is_stop_word(t))
        .map(str::to_string)
        .collect()
}

/// Unique candidate phrases in first-occurrence order.
///
/// Above `settings.max_candidates`, keeps the most frequent candidates
/// (ties go to the earlier one) and drops the rest.
pub fn candidate_phrases(text: &str, settings: &CandidateSettings) -> Vec<String> {
    let tokens = content_tokens(text);
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut ordered: Vec<String> = Vec::new();

    for start in 0..tokens.len() {
        for n in settings.min_ngram..=settings.max_ngram {
            let end = start + n;
            if end > tokens.len() {
                break;
            }
            let phrase = tokens[start..end].join(" ");
            let count = counts.entry(phrase.clone()).or_insert(0);
            if *count == 0 {
                ordered.push(phrase);
            }
            *count += 1;
        }
    }

    if ordered.len() <= settings.max_candidates {
        return ordered;
    }

    let mut ranked: Vec<usize> = (0..ordered.len()).collect();
    ranked.sort_by(|&a, &b| counts[&ordered[b]].cmp(&counts[&ordered[a]]).then(a.cmp(&b)));
    ranked.truncate(settings.max_candidates);
    ranked.sort_unstable();
    ranked.into_iter().map(|i| ordered[i].clone()).collect()
}
