//! Corpus data model shared by every stage.

pub mod cluster_summary;
pub mod document;
pub mod extracted;

pub use cluster_summary::ClusterSummary;
pub use document::{DocumentRecord, ResourceLink};
pub use extracted::ExtractedDocument;
