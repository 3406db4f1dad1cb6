//! # themescope-embeddings
//!
//! Maps phrases to fixed-length vectors for semantic clustering and
//! keyphrase ranking. Providers: feature-hashed terms (always available)
//! and ONNX sentence-embedding models.

pub mod cache;
pub mod engine;
pub mod providers;

pub use engine::EmbeddingEngine;
pub use providers::{HashedEmbedder, OnnxProvider};
