//! Umbrella error and non-fatal diagnostic collection.

use super::error_code::ThemeErrorCode;
use super::{
    AcquisitionError, ClusteringError, ConfigError, EmbeddingError, KeyphraseError,
    SearchError, TableError,
};

/// Errors that abort a Themescope run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("Acquisition error: {0}")]
    Acquisition(#[from] AcquisitionError),

    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("Keyphrase error: {0}")]
    Keyphrase(#[from] KeyphraseError),

    #[error("Clustering error: {0}")]
    Clustering(#[from] ClusteringError),

    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ThemeErrorCode for ThemeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Acquisition(e) => e.error_code(),
            Self::Search(e) => e.error_code(),
            Self::Embedding(e) => e.error_code(),
            Self::Keyphrase(e) => e.error_code(),
            Self::Clustering(e) => e.error_code(),
            Self::Table(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type ThemeResult<T> = Result<T, ThemeError>;

/// Result of a corpus pass that accumulates non-fatal errors.
/// Partial results are returned even when some documents degrade.
#[derive(Debug, Default)]
pub struct PipelineOutcome<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Non-fatal errors, each tagged with the zero-based document index.
    pub errors: Vec<(usize, ThemeError)>,
}

impl<T: Default> PipelineOutcome<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    /// Record a non-fatal error for the document at `index`.
    pub fn add_error(&mut self, index: usize, error: impl Into<ThemeError>) {
        self.errors.push((index, error.into()));
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
