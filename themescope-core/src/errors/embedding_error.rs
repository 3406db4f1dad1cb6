//! Embedding collaborator errors.

use super::error_code::{self, ThemeErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("failed to load model {path}: {reason}")]
    ModelLoadFailed { path: String, reason: String },

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("embedding provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },
}

impl ThemeErrorCode for EmbeddingError {
    fn error_code(&self) -> &'static str {
        error_code::EMBEDDING_ERROR
    }
}
