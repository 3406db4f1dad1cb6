//! Error handling for Themescope.
//! One error enum per subsystem, `thiserror` only.

pub mod acquisition_error;
pub mod clustering_error;
pub mod config_error;
pub mod embedding_error;
pub mod error_code;
pub mod keyphrase_error;
pub mod search_error;
pub mod table_error;
pub mod theme_error;

pub use acquisition_error::AcquisitionError;
pub use clustering_error::ClusteringError;
pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use error_code::ThemeErrorCode;
pub use keyphrase_error::KeyphraseError;
pub use search_error::SearchError;
pub use table_error::TableError;
pub use theme_error::{PipelineOutcome, ThemeError, ThemeResult};
