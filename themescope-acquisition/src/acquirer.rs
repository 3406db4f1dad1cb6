//! Text Acquirer: full text when a usable PDF exists, title + snippet otherwise.
//!
//! Policy, in order:
//! 1. First resource link with format "pdf" (any case); none means fallback.
//! 2. Fetch it (bounded timeout, browser-like User-Agent).
//! 3. Reject non-PDF content types and payloads below the size floor.
//! 4. Parse to text, pages concatenated in order. A parser panic counts
//!    as a parse failure.
//! 5. Reject text that is too short or carries a block signal.
//!
//! Every failure in 2-5 falls back to `"{title}. {snippet}"`. The returned
//! text is lower-cased and trimmed either way.

use themescope_core::config::AcquisitionConfig;
use themescope_core::errors::AcquisitionError;
use themescope_core::models::DocumentRecord;
use themescope_core::traits::{IDocumentFetcher, IPdfTextParser};
use tracing::{debug, warn};

use crate::{parse, validate};

/// Outcome of acquisition for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acquisition {
    /// Parsed PDF text from `url`.
    FullText { text: String, url: String },
    /// Title + snippet text. `pdf_link` is the PDF link that was tried, if any.
    Fallback {
        text: String,
        pdf_link: Option<String>,
        reason: AcquisitionError,
    },
}

impl Acquisition {
    /// Normalized text handed to the extractor.
    pub fn text(&self) -> &str {
        match self {
            Self::FullText { text, .. } | Self::Fallback { text, .. } => text,
        }
    }

    pub fn used_full_text(&self) -> bool {
        matches!(self, Self::FullText { .. })
    }

    /// The PDF the text came from; `None` on the fallback path.
    pub fn source_url(&self) -> Option<&str> {
        match self {
            Self::FullText { url, .. } => Some(url),
            Self::Fallback { .. } => None,
        }
    }

    /// The PDF link found on the record, whether or not it was usable.
    pub fn pdf_link(&self) -> Option<&str> {
        match self {
            Self::FullText { url, .. } => Some(url),
            Self::Fallback { pdf_link, .. } => pdf_link.as_deref(),
        }
    }

    pub fn fallback_reason(&self) -> Option<&AcquisitionError> {
        match self {
            Self::FullText { .. } => None,
            Self::Fallback { reason, .. } => Some(reason),
        }
    }
}

/// Thresholds applied to fetched PDFs.
#[derive(Debug, Clone)]
pub struct AcquisitionPolicy {
    pub enabled: bool,
    pub min_pdf_bytes: usize,
    pub min_word_count: usize,
    /// Lower-case substrings.
    pub block_signals: Vec<String>,
}

impl AcquisitionPolicy {
    pub fn from_config(config: &AcquisitionConfig) -> Self {
        Self {
            enabled: config.effective_enabled(),
            min_pdf_bytes: config.effective_min_pdf_bytes(),
            min_word_count: config.effective_min_word_count(),
            block_signals: config.effective_block_signals(),
        }
    }
}

impl Default for AcquisitionPolicy {
    fn default() -> Self {
        Self::from_config(&AcquisitionConfig::default())
    }
}

pub struct TextAcquirer {
    fetcher: Box<dyn IDocumentFetcher>,
    parser: Box<dyn IPdfTextParser>,
    policy: AcquisitionPolicy,
}

impl TextAcquirer {
    pub fn new(
        fetcher: Box<dyn IDocumentFetcher>,
        parser: Box<dyn IPdfTextParser>,
        policy: AcquisitionPolicy,
    ) -> Self {
        Self {
            fetcher,
            parser,
            policy,
        }
    }

    pub fn policy(&self) -> &AcquisitionPolicy {
        &self.policy
    }

    /// Acquire text for the record at zero-based `index`.
    pub fn acquire(&self, index: usize, record: &DocumentRecord) -> Acquisition {
        let Some(link) = record.first_pdf_link() else {
            debug!(index, "no PDF link, using title and snippet");
            return Self::fallback(record, None, AcquisitionError::NoPdfLink);
        };

        if !self.policy.enabled {
            return Self::fallback(record, Some(link.url.clone()), AcquisitionError::Disabled);
        }

        match self.full_text(&link.url) {
            Ok(text) => Acquisition::FullText {
                text: normalize(&text),
                url: link.url.clone(),
            },
            Err(reason) => {
                warn!(
                    result = index + 1,
                    url = %link.url,
                    reason = %reason,
                    "Fallback to abstract"
                );
                Self::fallback(record, Some(link.url.clone()), reason)
            }
        }
    }

    fn full_text(&self, url: &str) -> Result<String, AcquisitionError> {
        let payload = self.fetcher.fetch(url)?;
        validate::validate_payload(&payload, self.policy.min_pdf_bytes)?;
        let text = parse::parse_guarded(self.parser.as_ref(), &payload.bytes)?;
        validate::validate_text(&text, self.policy.min_word_count, &self.policy.block_signals)?;
        Ok(text)
    }

    fn fallback(
        record: &DocumentRecord,
        pdf_link: Option<String>,
        reason: AcquisitionError,
    ) -> Acquisition {
        Acquisition::Fallback {
            text: normalize(&record.fallback_text()),
            pdf_link,
            reason,
        }
    }
}

fn normalize(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}
