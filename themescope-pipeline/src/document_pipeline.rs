//! Per-Document Pipeline.
//!
//! For each search result: acquire text, extract phrases, emit an
//! [`ExtractedDocument`] and a keyword-table row, and feed the phrase
//! frequency counter. Output order always equals corpus order, whether the
//! documents are processed sequentially or on the rayon pool.

use std::sync::Arc;

use rayon::prelude::*;
use themescope_acquisition::{Acquisition, TextAcquirer};
use themescope_core::document_span;
use themescope_core::errors::{AcquisitionError, KeyphraseError, PipelineOutcome};
use themescope_core::models::{DocumentRecord, ExtractedDocument};
use themescope_core::traits::IKeyphraseExtractor;
use tracing::{info, warn};

use crate::frequency::PhraseFrequency;

/// One row of the keyword table.
///
/// `pdf_url` carries the PDF link found on the record even when the text
/// fell back to title + snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRow {
    pub title: String,
    pub phrases: Vec<String>,
    pub used_pdf: bool,
    pub pdf_url: Option<String>,
}

/// Everything a corpus pass produces, in corpus order.
#[derive(Debug, Default)]
pub struct PipelineRun {
    pub documents: Vec<ExtractedDocument>,
    pub rows: Vec<KeywordRow>,
    pub frequency: PhraseFrequency,
}

struct ProcessedDocument {
    extracted: ExtractedDocument,
    row: KeywordRow,
    fallback: Option<AcquisitionError>,
    extraction_error: Option<KeyphraseError>,
}

pub struct DocumentPipeline {
    acquirer: TextAcquirer,
    extractor: Arc<dyn IKeyphraseExtractor>,
    parallel: bool,
}

impl DocumentPipeline {
    pub fn new(acquirer: TextAcquirer, extractor: Arc<dyn IKeyphraseExtractor>) -> Self {
        Self {
            acquirer,
            extractor,
            parallel: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn run(&self, records: &[DocumentRecord]) -> PipelineOutcome<PipelineRun> {
        self.run_with_progress(records, |_, _| {})
    }

    /// Process the corpus, calling `on_document(index, row)` once per
    /// document in corpus order.
    ///
    /// Sequentially, the callback fires as soon as each document is done,
    /// before the next one is acquired. The parallel pass calls it after the
    /// whole batch, re-sequenced by index.
    ///
    /// Fallbacks with a real cause and extraction failures are recorded as
    /// non-fatal errors; records without a PDF link and offline runs are not.
    pub fn run_with_progress<F>(
        &self,
        records: &[DocumentRecord],
        mut on_document: F,
    ) -> PipelineOutcome<PipelineRun>
    where
        F: FnMut(usize, &KeywordRow),
    {
        let mut outcome = PipelineOutcome::new(PipelineRun::default());

        if self.parallel {
            let mut processed: Vec<(usize, ProcessedDocument)> = records
                .par_iter()
                .enumerate()
                .map(|(i, r)| (i, self.process(i, r)))
                .collect();
            processed.sort_by_key(|(i, _)| *i);
            for (index, doc) in processed {
                on_document(index, &doc.row);
                Self::absorb(&mut outcome, index, doc);
            }
        } else {
            for (index, record) in records.iter().enumerate() {
                let doc = self.process(index, record);
                on_document(index, &doc.row);
                Self::absorb(&mut outcome, index, doc);
            }
        }

        info!(
            documents = outcome.data.documents.len(),
            full_text = outcome.data.rows.iter().filter(|r| r.used_pdf).count(),
            phrases = outcome.data.frequency.total(),
            issues = outcome.error_count(),
            "corpus pass complete"
        );
        outcome
    }

    fn absorb(outcome: &mut PipelineOutcome<PipelineRun>, index: usize, doc: ProcessedDocument) {
        if let Some(reason) = doc.fallback {
            outcome.add_error(index, reason);
        }
        if let Some(err) = doc.extraction_error {
            outcome.add_error(index, err);
        }
        outcome.data.frequency.add_all(&doc.extracted.phrases);
        outcome.data.documents.push(doc.extracted);
        outcome.data.rows.push(doc.row);
    }

    fn process(&self, index: usize, record: &DocumentRecord) -> ProcessedDocument {
        let _span = document_span!(index).entered();
        let acquisition = self.acquirer.acquire(index, record);

        let (phrases, extraction_error) = match self.extractor.extract(acquisition.text()) {
            Ok(scored) => (scored.into_iter().map(|s| s.phrase).collect(), None),
            Err(e) => {
                warn!(result = index + 1, error = %e, "keyphrase extraction failed, no phrases kept");
                (Vec::new(), Some(e))
            }
        };

        let row = KeywordRow {
            title: record.title.clone(),
            phrases: phrases.clone(),
            used_pdf: acquisition.used_full_text(),
            pdf_url: acquisition.pdf_link().map(str::to_string),
        };

        let (extracted, fallback) = match acquisition {
            Acquisition::FullText { url, .. } => {
                (ExtractedDocument::full_text(index, phrases, url), None)
            }
            Acquisition::Fallback { reason, .. } => {
                let reason = match reason {
                    AcquisitionError::NoPdfLink | AcquisitionError::Disabled => None,
                    other => Some(other),
                };
                (ExtractedDocument::fallback(index, phrases), reason)
            }
        };

        ProcessedDocument {
            extracted,
            row,
            fallback,
            extraction_error,
        }
    }
}
