//! Span definitions per stage: document processing, embedding, clustering.

/// Create a per-document span. `index` is zero-based.
#[macro_export]
macro_rules! document_span {
    ($index:expr) => {
        tracing::info_span!("themescope.document", index = $index)
    };
}

/// Create an embedding span.
#[macro_export]
macro_rules! embedding_span {
    ($provider:expr, $count:expr) => {
        tracing::info_span!("themescope.embedding", provider = %$provider, count = $count)
    };
}

/// Create a corpus clustering span.
#[macro_export]
macro_rules! clustering_span {
    ($phrases:expr, $n_clusters:expr) => {
        tracing::info_span!(
            "themescope.clustering",
            phrases = $phrases,
            n_clusters = $n_clusters
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const DOCUMENT: &str = "themescope.document";
    pub const EMBEDDING: &str = "themescope.embedding";
    pub const CLUSTERING: &str = "themescope.clustering";
}
