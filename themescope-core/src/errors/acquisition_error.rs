//! Full-text acquisition failures. Always recovered by the fallback path.

use super::error_code::{self, ThemeErrorCode};

/// Why full text could not be used for a document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AcquisitionError {
    #[error("no PDF resource link")]
    NoPdfLink,

    #[error("full-text acquisition disabled")]
    Disabled,

    #[error("fetch of {url} failed: {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("response is not a PDF (content type {content_type:?})")]
    NotPdf { content_type: String },

    #[error("payload too small: {size} bytes, minimum {min}")]
    PayloadTooSmall { size: usize, min: usize },

    #[error("PDF parse failed: {reason}")]
    ParseFailed { reason: String },

    #[error("parsed text too short: {words} words, minimum {min}")]
    TextTooShort { words: usize, min: usize },

    #[error("text contains block signal {signal:?}")]
    BlockSignal { signal: String },
}

impl ThemeErrorCode for AcquisitionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoPdfLink => error_code::NO_PDF_LINK,
            Self::Disabled => error_code::ACQUISITION_DISABLED,
            Self::FetchFailed { .. } => error_code::FETCH_FAILED,
            Self::NotPdf { .. } => error_code::NOT_A_PDF,
            Self::PayloadTooSmall { .. } => error_code::PAYLOAD_TOO_SMALL,
            Self::ParseFailed { .. } => error_code::PDF_PARSE_FAILED,
            Self::TextTooShort { .. } => error_code::TEXT_TOO_SHORT,
            Self::BlockSignal { .. } => error_code::BLOCK_SIGNAL,
        }
    }
}
