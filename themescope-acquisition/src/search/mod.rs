//! Search-results providers: SerpApi Google Scholar and local JSON corpora.

pub mod json_corpus;
pub mod serpapi;

pub use json_corpus::JsonCorpusProvider;
pub use serpapi::SerpApiProvider;
