//! Keyphrase extraction errors.

use super::error_code::{self, ThemeErrorCode};
use super::EmbeddingError;

#[derive(Debug, thiserror::Error)]
pub enum KeyphraseError {
    #[error("embedding failed during extraction: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("invalid n-gram range {min}..={max}")]
    InvalidRange { min: usize, max: usize },
}

impl ThemeErrorCode for KeyphraseError {
    fn error_code(&self) -> &'static str {
        error_code::KEYPHRASE_ERROR
    }
}
