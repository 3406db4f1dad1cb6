//! # themescope-acquisition
//!
//! Produces the best available text per search result: validated PDF body
//! text when a usable PDF link exists, otherwise title + snippet.
//! Also hosts the search-results providers that feed the corpus.

pub mod acquirer;
pub mod fetch;
pub mod parse;
pub mod search;
pub mod validate;

pub use acquirer::{Acquisition, AcquisitionPolicy, TextAcquirer};
pub use fetch::HttpPdfFetcher;
pub use parse::PdfExtractParser;
pub use search::{JsonCorpusProvider, SerpApiProvider};
