//! Semantic Clusterer: embed the flattened phrase list, then cluster it.

use std::sync::Arc;

use themescope_core::clustering_span;
use themescope_core::config::ClusteringConfig;
use themescope_core::errors::ClusteringError;
use themescope_core::traits::{IClusterer, IEmbeddingProvider};
use tracing::info;

use crate::agglomerative::AgglomerativeClusterer;

pub struct SemanticClusterer {
    embedder: Arc<dyn IEmbeddingProvider>,
    clusterer: Box<dyn IClusterer>,
    n_clusters: usize,
}

impl SemanticClusterer {
    pub fn new(
        embedder: Arc<dyn IEmbeddingProvider>,
        clusterer: Box<dyn IClusterer>,
        n_clusters: usize,
    ) -> Self {
        Self {
            embedder,
            clusterer,
            n_clusters,
        }
    }

    /// Agglomerative clusterer with the configured linkage and cluster count.
    pub fn from_config(embedder: Arc<dyn IEmbeddingProvider>, config: &ClusteringConfig) -> Self {
        Self::new(
            embedder,
            Box::new(AgglomerativeClusterer::new(config.effective_linkage())),
            config.effective_n_clusters(),
        )
    }

    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    /// One label in `0..n_clusters` per phrase, positionally aligned.
    ///
    /// # Errors
    /// Precondition failures are reported before any embedding call.
    pub fn assign(&self, phrases: &[String]) -> Result<Vec<usize>, ClusteringError> {
        if phrases.is_empty() {
            return Err(ClusteringError::EmptyCorpus);
        }
        if self.n_clusters == 0 {
            return Err(ClusteringError::ZeroClusters);
        }
        if self.n_clusters > phrases.len() {
            return Err(ClusteringError::TooManyClusters {
                requested: self.n_clusters,
                available: phrases.len(),
            });
        }

        let _span = clustering_span!(phrases.len(), self.n_clusters).entered();
        let vectors = self.embedder.embed_batch(phrases)?;
        let labels = self.clusterer.cluster(&vectors, self.n_clusters)?;

        if labels.len() != phrases.len() {
            return Err(ClusteringError::LabelCountMismatch {
                expected: phrases.len(),
                actual: labels.len(),
            });
        }
        if let Some(bad) = labels.iter().find(|&&l| l >= self.n_clusters) {
            return Err(ClusteringError::Failed {
                reason: format!("label {bad} outside 0..{}", self.n_clusters),
            });
        }

        info!(
            phrases = phrases.len(),
            clusters = self.n_clusters,
            clusterer = self.clusterer.name(),
            "phrases clustered"
        );
        Ok(labels)
    }
}
