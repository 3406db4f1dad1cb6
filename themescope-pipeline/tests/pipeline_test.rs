//! Corpus pass over the fixture corpus with canned collaborators.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use test_fixtures::{long_text, pdf_payload, record, sample_corpus, ScriptedExtractor, StaticFetcher, Utf8Parser};
use themescope_acquisition::{AcquisitionPolicy, TextAcquirer};
use themescope_core::errors::{AcquisitionError, ThemeError};
use themescope_core::traits::{FetchedPayload, IDocumentFetcher};
use themescope_pipeline::DocumentPipeline;

const PDF_URL: &str = "https://papers.example.edu/responsiveness.pdf";
const BLOCKED_URL: &str = "https://www.researchgate.net/capitalization.pdf";

fn extractor() -> ScriptedExtractor {
    ScriptedExtractor::new()
        .on("introduction", &["partner responsiveness", "intimacy"])
        .on("social support", &["social support", "relationship satisfaction"])
        .on("capitalization", &["good news", "supportive partner"])
        .on("dyadic", &["dyadic coping", "relationship satisfaction"])
}

fn pipeline(parallel: bool) -> DocumentPipeline {
    let body = format!("Introduction {}", long_text(150));
    let fetcher = StaticFetcher::new().with(PDF_URL, pdf_payload(&body, 60_000));
    let acquirer = TextAcquirer::new(
        Box::new(fetcher),
        Box::new(Utf8Parser),
        AcquisitionPolicy::default(),
    );
    DocumentPipeline::new(acquirer, Arc::new(extractor())).with_parallel(parallel)
}

#[test]
fn corpus_pass_follows_fallback_policy() {
    let outcome = pipeline(false).run(&sample_corpus());
    let run = &outcome.data;

    assert_eq!(run.documents.len(), 4);
    assert_eq!(run.rows.len(), 4);
    let used: Vec<bool> = run.rows.iter().map(|r| r.used_pdf).collect();
    assert_eq!(used, vec![true, false, false, false]);

    assert_eq!(run.documents[0].source_url.as_deref(), Some(PDF_URL));
    assert_eq!(run.documents[0].phrases, vec!["partner responsiveness", "intimacy"]);
    assert!(run.documents[1..].iter().all(|d| d.source_url.is_none()));

    // The tried link stays in the table row even though the text fell back.
    assert_eq!(run.rows[2].pdf_url.as_deref(), Some(BLOCKED_URL));
    assert_eq!(run.rows[1].pdf_url, None);
}

#[test]
fn documents_keep_corpus_indices() {
    let outcome = pipeline(false).run(&sample_corpus());
    let indices: Vec<usize> = outcome.data.documents.iter().map(|d| d.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
}

#[test]
fn frequency_counts_every_occurrence() {
    let outcome = pipeline(false).run(&sample_corpus());
    let freq = &outcome.data.frequency;
    assert_eq!(freq.total(), 8);
    assert_eq!(freq.count("relationship satisfaction"), 2);
    assert_eq!(freq.top(1), vec![("relationship satisfaction".to_string(), 2)]);
}

#[test]
fn only_real_fallback_causes_are_recorded() {
    let outcome = pipeline(false).run(&sample_corpus());
    assert_eq!(outcome.error_count(), 1);
    let (index, err) = &outcome.errors[0];
    assert_eq!(*index, 2);
    assert!(matches!(
        err,
        ThemeError::Acquisition(AcquisitionError::FetchFailed { .. })
    ));
}

#[test]
fn parallel_pass_matches_sequential() {
    let corpus = sample_corpus();
    let seq = pipeline(false).run(&corpus);
    let par = pipeline(true).run(&corpus);
    assert_eq!(seq.data.documents, par.data.documents);
    assert_eq!(seq.data.rows, par.data.rows);
    assert_eq!(seq.data.frequency.top(10), par.data.frequency.top(10));
}

#[test]
fn progress_is_reported_in_corpus_order() {
    let mut seen = Vec::new();
    pipeline(true).run_with_progress(&sample_corpus(), |i, row| seen.push((i, row.title.clone())));
    let indices: Vec<usize> = seen.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert!(seen[3].1.starts_with("Dyadic coping"));
}

/// Notes how many progress callbacks had fired each time a fetch starts.
struct ProgressRecordingFetcher {
    progress: Arc<AtomicUsize>,
    seen_at_fetch: Arc<Mutex<Vec<usize>>>,
}

impl IDocumentFetcher for ProgressRecordingFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedPayload, AcquisitionError> {
        let done = self.progress.load(Ordering::SeqCst);
        self.seen_at_fetch.lock().unwrap().push(done);
        Err(AcquisitionError::FetchFailed {
            url: url.to_string(),
            reason: "timed out".to_string(),
        })
    }
}

#[test]
fn sequential_progress_fires_before_next_document_is_fetched() {
    let progress = Arc::new(AtomicUsize::new(0));
    let seen_at_fetch = Arc::new(Mutex::new(Vec::new()));
    let fetcher = ProgressRecordingFetcher {
        progress: Arc::clone(&progress),
        seen_at_fetch: Arc::clone(&seen_at_fetch),
    };
    let acquirer = TextAcquirer::new(
        Box::new(fetcher),
        Box::new(Utf8Parser),
        AcquisitionPolicy::default(),
    );
    let pipeline = DocumentPipeline::new(acquirer, Arc::new(extractor()));
    let corpus: Vec<_> = (0..3)
        .map(|i| {
            let url = format!("https://papers.example.edu/{i}.pdf");
            record(&format!("Paper {i}"), "dyadic coping", Some(url.as_str()))
        })
        .collect();

    let outcome = pipeline.run_with_progress(&corpus, |_, _| {
        progress.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(*seen_at_fetch.lock().unwrap(), vec![0, 1, 2]);
    assert_eq!(progress.load(Ordering::SeqCst), 3);
    assert_eq!(outcome.data.rows.len(), 3);
}

#[test]
fn parser_panic_degrades_one_document_only() {
    let crashing = "https://papers.example.edu/type3.pdf";
    let body = format!("Introduction {}", long_text(150));
    let corpus = vec![
        record("Type3 fonts", "dyadic coping in couples", Some(crashing)),
        record("Responsiveness", "intimacy", Some(PDF_URL)),
    ];

    for parallel in [false, true] {
        let fetcher = StaticFetcher::new()
            .with(PDF_URL, pdf_payload(&body, 60_000))
            .with(crashing, pdf_payload(&format!("%PANIC {body}"), 60_000));
        let acquirer = TextAcquirer::new(
            Box::new(fetcher),
            Box::new(Utf8Parser),
            AcquisitionPolicy::default(),
        );
        let outcome = DocumentPipeline::new(acquirer, Arc::new(extractor()))
            .with_parallel(parallel)
            .run(&corpus);

        let used: Vec<bool> = outcome.data.rows.iter().map(|r| r.used_pdf).collect();
        assert_eq!(used, vec![false, true]);
        assert_eq!(
            outcome.data.documents[0].phrases,
            vec!["dyadic coping", "relationship satisfaction"]
        );
        assert_eq!(outcome.error_count(), 1);
        assert!(matches!(
            outcome.errors[0],
            (0, ThemeError::Acquisition(AcquisitionError::ParseFailed { .. }))
        ));
    }
}

#[test]
fn extraction_failure_yields_empty_phrases_and_continues() {
    let corpus = vec![
        record("Broken", "!fail", None),
        record("Dyadic coping", "in couples", None),
    ];
    let outcome = pipeline(false).run(&corpus);
    assert!(outcome.data.documents[0].phrases.is_empty());
    assert_eq!(outcome.data.documents[1].phrases.len(), 2);
    assert_eq!(outcome.error_count(), 1);
    assert!(matches!(outcome.errors[0], (0, ThemeError::Keyphrase(_))));
}

#[test]
fn empty_corpus_is_a_clean_empty_run() {
    let outcome = pipeline(false).run(&[]);
    assert!(outcome.is_clean());
    assert!(outcome.data.documents.is_empty());
    assert!(outcome.data.frequency.is_empty());
}
