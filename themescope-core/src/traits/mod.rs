//! Collaborator seams. Each external model or service sits behind one trait
//! so the core stages can run against real providers or test stubs.

pub mod clusterer;
pub mod embedding;
pub mod fetcher;
pub mod keyphrase;
pub mod search;

pub use clusterer::IClusterer;
pub use embedding::IEmbeddingProvider;
pub use fetcher::{FetchedPayload, IDocumentFetcher, IPdfTextParser};
pub use keyphrase::{IKeyphraseExtractor, ScoredPhrase};
pub use search::ISearchProvider;
