//! # themescope-keyphrase
//!
//! Keyphrase extraction: candidate 1-3 word spans with English stopwords
//! removed, ranked by embedding similarity to the whole text.

pub mod candidates;
pub mod extractor;
pub mod similarity;
pub mod stopwords;

pub use candidates::CandidateSettings;
pub use extractor::EmbeddingKeyphraseExtractor;
