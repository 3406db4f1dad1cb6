use crate::errors::SearchError;
use crate::models::DocumentRecord;

/// Source of academic search results.
pub trait ISearchProvider: Send + Sync {
    /// Fetch the corpus, in provider order.
    fn search(&self) -> Result<Vec<DocumentRecord>, SearchError>;

    fn name(&self) -> &str;
}
