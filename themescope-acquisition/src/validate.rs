//! Payload and text validation for fetched PDFs.
//!
//! Small or non-PDF responses are usually error pages; short text or
//! block-signal phrases usually mean a login wall or viewer wrapper.

use themescope_core::errors::AcquisitionError;
use themescope_core::traits::FetchedPayload;

/// Reject payloads whose content type does not mention PDF or whose size is
/// below `min_bytes`.
pub fn validate_payload(payload: &FetchedPayload, min_bytes: usize) -> Result<(), AcquisitionError> {
    if !payload.content_type.to_lowercase().contains("pdf") {
        return Err(AcquisitionError::NotPdf {
            content_type: payload.content_type.clone(),
        });
    }
    if payload.bytes.len() < min_bytes {
        return Err(AcquisitionError::PayloadTooSmall {
            size: payload.bytes.len(),
            min: min_bytes,
        });
    }
    Ok(())
}

/// Reject parsed text with fewer than `min_words` whitespace-separated words
/// or containing any of `block_signals` (lower-case, matched case-insensitively).
pub fn validate_text(
    text: &str,
    min_words: usize,
    block_signals: &[String],
) -> Result<(), AcquisitionError> {
    let words = text.split_whitespace().count();
    if words < min_words {
        return Err(AcquisitionError::TextTooShort {
            words,
            min: min_words,
        });
    }
    let lower = text.to_lowercase();
    if let Some(signal) = block_signals.iter().find(|s| lower.contains(s.as_str())) {
        return Err(AcquisitionError::BlockSignal {
            signal: signal.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals() -> Vec<String> {
        themescope_core::constants::DEFAULT_BLOCK_SIGNALS
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn rejects_html_content_type() {
        let payload = FetchedPayload {
            content_type: "text/html; charset=utf-8".to_string(),
            bytes: vec![0; 100_000],
        };
        assert!(matches!(
            validate_payload(&payload, 50_000),
            Err(AcquisitionError::NotPdf { .. })
        ));
    }

    #[test]
    fn rejects_tiny_pdf() {
        let payload = FetchedPayload {
            content_type: "application/pdf".to_string(),
            bytes: vec![0; 49_999],
        };
        assert!(matches!(
            validate_payload(&payload, 50_000),
            Err(AcquisitionError::PayloadTooSmall { size: 49_999, .. })
        ));
    }

    #[test]
    fn accepts_pdf_at_threshold() {
        let payload = FetchedPayload {
            content_type: "Application/PDF".to_string(),
            bytes: vec![0; 50_000],
        };
        assert!(validate_payload(&payload, 50_000).is_ok());
    }

    #[test]
    fn rejects_short_text() {
        assert!(matches!(
            validate_text(&words(99), 100, &signals()),
            Err(AcquisitionError::TextTooShort { words: 99, .. })
        ));
        assert!(validate_text(&words(100), 100, &signals()).is_ok());
    }

    #[test]
    fn block_signal_is_case_insensitive() {
        let text = format!("{} Access DENIED {}", words(60), words(60));
        match validate_text(&text, 100, &signals()) {
            Err(AcquisitionError::BlockSignal { signal }) => assert_eq!(signal, "access denied"),
            other => panic!("expected BlockSignal, got {other:?}"),
        }
    }

    #[test]
    fn researchgate_wrapper_is_rejected() {
        let text = format!("download from ResearchGate {}", words(200));
        assert!(validate_text(&text, 100, &signals()).is_err());
    }
}
