//! Engine behavior against misbehaving providers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use proptest::prelude::*;
use themescope_core::errors::EmbeddingError;
use themescope_core::traits::IEmbeddingProvider;
use themescope_embeddings::{EmbeddingEngine, HashedEmbedder};

/// Counts provider calls so cache behavior is observable.
struct CountingProvider {
    inner: HashedEmbedder,
    calls: Arc<AtomicUsize>,
}

impl IEmbeddingProvider for CountingProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.embed(text)
    }
    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }
    fn name(&self) -> &str {
        "counting"
    }
    fn is_available(&self) -> bool {
        true
    }
}

/// Claims one dimension count, returns another.
struct LyingProvider;

impl IEmbeddingProvider for LyingProvider {
    fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(vec![0.5; 3])
    }
    fn dimensions(&self) -> usize {
        8
    }
    fn name(&self) -> &str {
        "lying"
    }
    fn is_available(&self) -> bool {
        true
    }
}

#[test]
fn repeated_phrases_hit_the_provider_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let engine = EmbeddingEngine::with_provider(
        Box::new(CountingProvider {
            inner: HashedEmbedder::new(16),
            calls: Arc::clone(&calls),
        }),
        100,
    );

    let texts: Vec<String> = ["support", "partner", "support", "support"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    engine.embed_batch(&texts).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    engine.embed("partner").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn dimension_mismatch_is_rejected() {
    let engine = EmbeddingEngine::with_provider(Box::new(LyingProvider), 10);
    match engine.embed("anything") {
        Err(EmbeddingError::DimensionMismatch { expected, actual }) => {
            assert_eq!(expected, 8);
            assert_eq!(actual, 3);
        }
        other => panic!("expected DimensionMismatch, got {other:?}"),
    }
}

proptest! {
    #[test]
    fn batch_matches_individual(words in proptest::collection::vec("[a-z]{1,8}( [a-z]{1,8}){0,2}", 1..12)) {
        let engine = EmbeddingEngine::with_provider(Box::new(HashedEmbedder::new(32)), 100);
        let reference = HashedEmbedder::new(32);
        let batch = engine.embed_batch(&words).unwrap();
        prop_assert_eq!(batch.len(), words.len());
        for (w, v) in words.iter().zip(&batch) {
            prop_assert_eq!(v, &reference.embed(w).unwrap());
        }
    }
}
