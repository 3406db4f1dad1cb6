//! # themescope-clustering
//!
//! Corpus-level analysis of extracted phrases:
//! - [`CorpusIndex`]: phrase to owning documents
//! - [`AgglomerativeClusterer`]: Ward / average linkage hierarchical clustering
//! - [`SemanticClusterer`]: embeds the flattened phrase list and clusters it
//! - [`summarize_clusters`]: representative phrase and document coverage per cluster

pub mod agglomerative;
pub mod corpus_index;
pub mod semantic;
pub mod summarizer;

pub use agglomerative::AgglomerativeClusterer;
pub use corpus_index::{flatten_phrases, CorpusIndex};
pub use semantic::SemanticClusterer;
pub use summarizer::summarize_clusters;
