//! Feature-hashing embedding provider.
//!
//! Hashes word terms and character trigrams into fixed-dimension buckets.
//! No model files, works offline, and phrases sharing words or stems land
//! close together.

use std::collections::BTreeMap;

use themescope_core::errors::EmbeddingError;
use themescope_core::traits::IEmbeddingProvider;

/// Weight of a whole-word feature relative to a trigram feature.
const WORD_WEIGHT: f32 = 1.0;
const TRIGRAM_WEIGHT: f32 = 0.35;

/// Deterministic hashed-feature embedder.
pub struct HashedEmbedder {
    dimensions: usize,
}

impl HashedEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Hash a feature into a bucket index using FNV-1a.
    fn bucket(feature: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in feature.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    fn terms(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase())
            .collect()
    }

    /// Padded character trigrams of a term: "care" -> "#ca", "car", "are", "re#".
    fn trigrams(term: &str) -> Vec<String> {
        let chars: Vec<char> = std::iter::once('#')
            .chain(term.chars())
            .chain(std::iter::once('#'))
            .collect();
        chars.windows(3).map(|w| w.iter().collect()).collect()
    }

    fn vector(&self, text: &str) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.dimensions];
        let terms = Self::terms(text);
        if terms.is_empty() {
            return vec;
        }

        let mut weights: BTreeMap<String, f32> = BTreeMap::new();
        for term in &terms {
            *weights.entry(format!("w:{term}")).or_default() += WORD_WEIGHT;
            for tri in Self::trigrams(term) {
                *weights.entry(format!("t:{tri}")).or_default() += TRIGRAM_WEIGHT;
            }
        }

        for (feature, weight) in &weights {
            vec[Self::bucket(feature, self.dimensions)] += weight;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl IEmbeddingProvider for HashedEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if self.dimensions == 0 {
            return Err(EmbeddingError::DimensionMismatch {
                expected: 1,
                actual: 0,
            });
        }
        Ok(self.vector(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed"
    }

    fn is_available(&self) -> bool {
        true
    }
}
