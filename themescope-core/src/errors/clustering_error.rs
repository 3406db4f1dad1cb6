//! Corpus-level clustering errors. All of these are fatal for a run.

use super::error_code::{self, ThemeErrorCode};
use super::EmbeddingError;

#[derive(Debug, thiserror::Error)]
pub enum ClusteringError {
    #[error("corpus has no phrases to cluster")]
    EmptyCorpus,

    #[error("cluster count must be at least 1")]
    ZeroClusters,

    #[error("cluster count {requested} exceeds available phrase occurrences {available}")]
    TooManyClusters { requested: usize, available: usize },

    #[error("embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("clusterer returned {actual} labels for {expected} phrases")]
    LabelCountMismatch { expected: usize, actual: usize },

    #[error("clustering failed: {reason}")]
    Failed { reason: String },
}

impl ThemeErrorCode for ClusteringError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyCorpus => error_code::EMPTY_CORPUS,
            Self::ZeroClusters => error_code::ZERO_CLUSTERS,
            Self::TooManyClusters { .. } => error_code::CLUSTER_COUNT_EXCEEDS_PHRASES,
            Self::Embedding(e) => e.error_code(),
            Self::LabelCountMismatch { .. } | Self::Failed { .. } => {
                error_code::CLUSTERING_FAILED
            }
        }
    }
}
