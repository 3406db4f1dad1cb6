use serde::{Deserialize, Serialize};

/// Per-document result of acquisition + extraction.
///
/// `used_full_text` is true exactly when `source_url` is set. Build values
/// through [`ExtractedDocument::full_text`] or [`ExtractedDocument::fallback`]
/// to keep that pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Zero-based position in the corpus.
    pub index: usize,
    /// Ranked phrases, best first. At most `top_n` entries.
    pub phrases: Vec<String>,
    pub used_full_text: bool,
    pub source_url: Option<String>,
}

impl ExtractedDocument {
    /// A document whose phrases came from parsed PDF text at `url`.
    pub fn full_text(index: usize, phrases: Vec<String>, url: impl Into<String>) -> Self {
        Self {
            index,
            phrases,
            used_full_text: true,
            source_url: Some(url.into()),
        }
    }

    /// A document whose phrases came from title + snippet.
    pub fn fallback(index: usize, phrases: Vec<String>) -> Self {
        Self {
            index,
            phrases,
            used_full_text: false,
            source_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_pair_flag_and_url() {
        let a = ExtractedDocument::full_text(0, vec![], "http://x/a.pdf");
        assert!(a.used_full_text && a.source_url.is_some());
        let b = ExtractedDocument::fallback(1, vec!["x".into()]);
        assert!(!b.used_full_text && b.source_url.is_none());
    }
}
