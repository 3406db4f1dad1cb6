//! Embedding-ranked keyphrase extractor.
//!
//! Candidates are scored by cosine similarity between the candidate's
//! embedding and the embedding of the whole text. The top `top_n` survive,
//! best first; equal scores keep candidate order.

use std::sync::Arc;

use themescope_core::config::KeyphraseConfig;
use themescope_core::embedding_span;
use themescope_core::errors::KeyphraseError;
use themescope_core::traits::{IEmbeddingProvider, IKeyphraseExtractor, ScoredPhrase};
use tracing::debug;

use crate::candidates::{candidate_phrases, CandidateSettings};
use crate::similarity::cosine_similarity;

pub struct EmbeddingKeyphraseExtractor {
    embedder: Arc<dyn IEmbeddingProvider>,
    top_n: usize,
    settings: CandidateSettings,
}

impl EmbeddingKeyphraseExtractor {
    pub fn new(embedder: Arc<dyn IEmbeddingProvider>, top_n: usize, settings: CandidateSettings) -> Self {
        Self {
            embedder,
            top_n,
            settings,
        }
    }

    pub fn from_config(
        embedder: Arc<dyn IEmbeddingProvider>,
        config: &KeyphraseConfig,
    ) -> Result<Self, KeyphraseError> {
        let settings = CandidateSettings::from_config(config)?;
        Ok(Self::new(embedder, config.effective_top_n(), settings))
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn settings(&self) -> &CandidateSettings {
        &self.settings
    }
}

impl IKeyphraseExtractor for EmbeddingKeyphraseExtractor {
    fn extract(&self, text: &str) -> Result<Vec<ScoredPhrase>, KeyphraseError> {
        self.settings.validate()?;
        let candidates = candidate_phrases(text, &self.settings);
        if candidates.is_empty() || self.top_n == 0 {
            return Ok(Vec::new());
        }

        let _span = embedding_span!(self.embedder.name(), candidates.len() + 1).entered();
        let doc_vector = self.embedder.embed(text)?;
        let vectors = self.embedder.embed_batch(&candidates)?;

        let mut scored: Vec<ScoredPhrase> = candidates
            .into_iter()
            .zip(vectors.iter())
            .map(|(phrase, v)| ScoredPhrase::new(phrase, cosine_similarity(&doc_vector, v)))
            .collect();

        // Stable: ties keep first-occurrence order.
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(self.top_n);

        debug!(kept = scored.len(), "keyphrases ranked");
        Ok(scored)
    }

    fn name(&self) -> &str {
        "embedding-keyphrase"
    }
}
