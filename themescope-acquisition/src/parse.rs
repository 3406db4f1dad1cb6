//! PDF to plain text via `pdf-extract` (pure Rust, in-memory).

use std::panic::{self, AssertUnwindSafe};

use themescope_core::errors::AcquisitionError;
use themescope_core::traits::IPdfTextParser;

#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractParser;

impl IPdfTextParser for PdfExtractParser {
    fn parse(&self, bytes: &[u8]) -> Result<String, AcquisitionError> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| AcquisitionError::ParseFailed {
            reason: e.to_string(),
        })
    }
}

/// Run `parser` on `bytes`, reporting a panic inside it as `ParseFailed`.
///
/// `pdf-extract` panics on some well-formed files it does not support
/// (Type3 fonts, unknown encodings).
pub fn parse_guarded(parser: &dyn IPdfTextParser, bytes: &[u8]) -> Result<String, AcquisitionError> {
    panic::catch_unwind(AssertUnwindSafe(|| parser.parse(bytes))).unwrap_or_else(|payload| {
        let reason = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Err(AcquisitionError::ParseFailed {
            reason: format!("parser panicked: {reason}"),
        })
    })
}
