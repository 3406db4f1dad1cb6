//! EmbeddingEngine: the main entry point for themescope-embeddings.
//!
//! Wraps the configured provider with a phrase cache and dimension checks.
//! Implements `IEmbeddingProvider` so it can be used anywhere a provider is
//! expected.

use themescope_core::config::EmbeddingConfig;
use themescope_core::errors::EmbeddingError;
use themescope_core::traits::IEmbeddingProvider;
use tracing::{debug, info};

use crate::cache::PhraseCache;
use crate::providers;

pub struct EmbeddingEngine {
    provider: Box<dyn IEmbeddingProvider>,
    cache: PhraseCache,
}

impl EmbeddingEngine {
    /// Create an engine from configuration.
    pub fn new(config: &EmbeddingConfig) -> Self {
        let provider = providers::create_provider(config);
        info!(
            provider = provider.name(),
            dims = provider.dimensions(),
            "EmbeddingEngine initialized"
        );
        Self::with_provider(provider, config.effective_cache_size())
    }

    /// Wrap an explicit provider.
    pub fn with_provider(provider: Box<dyn IEmbeddingProvider>, cache_size: u64) -> Self {
        Self {
            provider,
            cache: PhraseCache::new(cache_size),
        }
    }

    pub fn active_provider(&self) -> &str {
        self.provider.name()
    }

    pub fn cache(&self) -> &PhraseCache {
        &self.cache
    }

    fn check_dimensions(&self, embedding: &[f32]) -> Result<(), EmbeddingError> {
        let expected = self.provider.dimensions();
        if embedding.len() != expected {
            return Err(EmbeddingError::DimensionMismatch {
                expected,
                actual: embedding.len(),
            });
        }
        Ok(())
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if let Some(hit) = self.cache.get(text) {
            return Ok(hit);
        }
        let embedding = self.provider.embed(text)?;
        self.check_dimensions(&embedding)?;
        self.cache.insert(text, embedding.clone());
        Ok(embedding)
    }

    /// Only cache misses reach the provider; each distinct miss is embedded once.
    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let mut results: Vec<Option<Vec<f32>>> = texts.iter().map(|t| self.cache.get(t)).collect();

        let mut misses: Vec<String> = Vec::new();
        for (text, slot) in texts.iter().zip(&results) {
            if slot.is_none() && !misses.contains(text) {
                misses.push(text.clone());
            }
        }

        if !misses.is_empty() {
            debug!(
                total = texts.len(),
                misses = misses.len(),
                "embedding batch cache misses"
            );
            let fresh = self.provider.embed_batch(&misses)?;
            if fresh.len() != misses.len() {
                return Err(EmbeddingError::InferenceFailed {
                    reason: format!(
                        "provider returned {} vectors for {} texts",
                        fresh.len(),
                        misses.len()
                    ),
                });
            }
            for (text, embedding) in misses.iter().zip(fresh) {
                self.check_dimensions(&embedding)?;
                self.cache.insert(text, embedding.clone());
                for (slot, t) in results.iter_mut().zip(texts) {
                    if slot.is_none() && t == text {
                        *slot = Some(embedding.clone());
                    }
                }
            }
        }

        results
            .into_iter()
            .map(|slot| {
                slot.ok_or_else(|| EmbeddingError::InferenceFailed {
                    reason: "missing embedding after batch".to_string(),
                })
            })
            .collect()
    }

    fn dimensions(&self) -> usize {
        self.provider.dimensions()
    }

    fn name(&self) -> &str {
        "themescope-embedding-engine"
    }

    fn is_available(&self) -> bool {
        self.provider.is_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(dims: usize) -> EmbeddingEngine {
        EmbeddingEngine::new(&EmbeddingConfig {
            provider: Some("hashed".to_string()),
            dimensions: Some(dims),
            ..Default::default()
        })
    }

    #[test]
    fn uses_configured_dimensions() {
        let e = engine(128);
        assert_eq!(e.dimensions(), 128);
        assert_eq!(e.embed("partner").unwrap().len(), 128);
    }

    #[test]
    fn embed_is_cached() {
        let e = engine(64);
        let a = e.embed("social support").unwrap();
        assert!(e.cache().get("social support").is_some());
        let b = e.embed("social support").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn batch_preserves_duplicates_and_order() {
        let e = engine(64);
        let texts: Vec<String> = ["a b", "c d", "a b"].iter().map(|s| s.to_string()).collect();
        let out = e.embed_batch(&texts).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], out[2]);
        assert_ne!(out[0], out[1]);
    }

    #[test]
    fn onnx_without_model_degrades_to_hashed() {
        let e = EmbeddingEngine::new(&EmbeddingConfig {
            provider: Some("onnx".to_string()),
            model_path: Some("/nonexistent/model.onnx".to_string()),
            dimensions: Some(32),
            ..Default::default()
        });
        assert_eq!(e.active_provider(), "hashed");
        assert_eq!(e.embed("x").unwrap().len(), 32);
    }
}
