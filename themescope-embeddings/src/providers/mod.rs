//! Embedding providers and config-driven selection.

pub mod hashed;
pub mod onnx_provider;

pub use hashed::HashedEmbedder;
pub use onnx_provider::OnnxProvider;

use themescope_core::config::EmbeddingConfig;
use themescope_core::traits::IEmbeddingProvider;
use tracing::warn;

/// Build the configured provider.
///
/// An ONNX model that fails to load degrades to the hashed provider with a
/// warning instead of aborting the run.
pub fn create_provider(config: &EmbeddingConfig) -> Box<dyn IEmbeddingProvider> {
    let dims = config.effective_dimensions();
    match (config.effective_provider(), config.model_path.as_deref()) {
        ("onnx", Some(path)) => match OnnxProvider::load(path, dims) {
            Ok(provider) => Box::new(
                provider
                    .with_max_sequence_length(config.effective_max_sequence_length())
                    .with_token_type_ids(config.effective_token_type_ids()),
            ),
            Err(e) => {
                warn!(error = %e, "ONNX model unavailable, using hashed embeddings");
                Box::new(HashedEmbedder::new(dims))
            }
        },
        _ => Box::new(HashedEmbedder::new(dims)),
    }
}
