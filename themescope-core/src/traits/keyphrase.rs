use serde::{Deserialize, Serialize};

use crate::errors::KeyphraseError;

/// A candidate phrase with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPhrase {
    pub phrase: String,
    pub score: f64,
}

impl ScoredPhrase {
    pub fn new(phrase: impl Into<String>, score: f64) -> Self {
        Self {
            phrase: phrase.into(),
            score,
        }
    }
}

/// Keyphrase extraction model.
pub trait IKeyphraseExtractor: Send + Sync {
    /// Ranked phrases for `text`, highest score first.
    fn extract(&self, text: &str) -> Result<Vec<ScoredPhrase>, KeyphraseError>;

    fn name(&self) -> &str;
}
