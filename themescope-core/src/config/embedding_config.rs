//! Embedding provider configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Provider names accepted by `embedding.provider`.
pub const PROVIDERS: [&str; 2] = ["hashed", "onnx"];

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// "hashed" or "onnx". Default: "hashed".
    pub provider: Option<String>,
    /// Path to the ONNX model file.
    pub model_path: Option<String>,
    /// Vector dimensions. Default: 384.
    pub dimensions: Option<usize>,
    /// Phrase vector cache entries. Default: 10_000.
    pub cache_size: Option<u64>,
    /// Token positions fed to the ONNX model; longer text is truncated.
    /// Default: 512.
    pub max_sequence_length: Option<usize>,
    /// Feed a zeroed `token_type_ids` input to the ONNX model. Default: true.
    pub token_type_ids: Option<bool>,
}

impl EmbeddingConfig {
    pub fn effective_provider(&self) -> &str {
        self.provider.as_deref().unwrap_or("hashed")
    }

    pub fn effective_dimensions(&self) -> usize {
        self.dimensions
            .unwrap_or(constants::DEFAULT_EMBEDDING_DIMENSIONS)
    }

    pub fn effective_cache_size(&self) -> u64 {
        self.cache_size
            .unwrap_or(constants::DEFAULT_EMBEDDING_CACHE_SIZE)
    }

    pub fn effective_max_sequence_length(&self) -> usize {
        self.max_sequence_length
            .unwrap_or(constants::DEFAULT_MAX_SEQUENCE_LENGTH)
    }

    pub fn effective_token_type_ids(&self) -> bool {
        self.token_type_ids.unwrap_or(true)
    }
}
