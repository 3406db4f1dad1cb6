//! Shared fixtures for Themescope tests: fixture file loading, canned
//! corpora, and stub collaborators that stand in for network services and
//! models.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::de::DeserializeOwned;
use themescope_core::errors::{
    AcquisitionError, ClusteringError, EmbeddingError, KeyphraseError, SearchError,
};
use themescope_core::models::{DocumentRecord, ExtractedDocument, ResourceLink};
use themescope_core::traits::{
    FetchedPayload, IClusterer, IDocumentFetcher, IEmbeddingProvider, IKeyphraseExtractor,
    IPdfTextParser, ISearchProvider, ScoredPhrase,
};

/// Root directory of fixture data files.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// The four-document sample corpus.
pub fn sample_corpus() -> Vec<DocumentRecord> {
    load_fixture("corpus/scholar_results.json")
}

// ── Builders ────────────────────────────────────────────────────────────────

/// A record with an optional PDF link.
pub fn record(title: &str, snippet: &str, pdf_url: Option<&str>) -> DocumentRecord {
    let mut doc = DocumentRecord::new(title, snippet);
    if let Some(url) = pdf_url {
        doc.resource_links.push(ResourceLink::new("PDF", url));
    }
    doc
}

/// An extracted document on the fallback path with the given phrases.
pub fn extracted(index: usize, phrases: &[&str]) -> ExtractedDocument {
    ExtractedDocument::fallback(index, phrases.iter().map(|p| p.to_string()).collect())
}

/// `n` space-separated words drawn from a small academic vocabulary.
pub fn long_text(n: usize) -> String {
    const VOCAB: [&str; 8] = [
        "partner", "support", "relationship", "satisfaction", "couples", "stress",
        "responsiveness", "intimacy",
    ];
    (0..n).map(|i| VOCAB[i % VOCAB.len()]).collect::<Vec<_>>().join(" ")
}

/// A PDF payload whose body is `text` padded with spaces to `size` bytes.
pub fn pdf_payload(text: &str, size: usize) -> FetchedPayload {
    let mut bytes = text.as_bytes().to_vec();
    if bytes.len() < size {
        bytes.resize(size, b' ');
    }
    FetchedPayload {
        content_type: "application/pdf".to_string(),
        bytes,
    }
}

// ── Stub collaborators ──────────────────────────────────────────────────────

/// Serves canned responses per URL; unknown URLs fail like a network error.
#[derive(Default)]
pub struct StaticFetcher {
    responses: HashMap<String, Result<FetchedPayload, AcquisitionError>>,
    calls: AtomicUsize,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, payload: FetchedPayload) -> Self {
        self.responses.insert(url.to_string(), Ok(payload));
        self
    }

    pub fn with_error(mut self, url: &str, error: AcquisitionError) -> Self {
        self.responses.insert(url.to_string(), Err(error));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IDocumentFetcher for StaticFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedPayload, AcquisitionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(url) {
            Some(Ok(p)) => Ok(p.clone()),
            Some(Err(e)) => Err(e.clone()),
            None => Err(AcquisitionError::FetchFailed {
                url: url.to_string(),
                reason: "connection refused".to_string(),
            }),
        }
    }
}

/// Treats payload bytes as UTF-8 text. Bytes starting with `%FAIL` fail to
/// parse; bytes starting with `%PANIC` panic the way `pdf-extract` does on
/// unsupported fonts.
pub struct Utf8Parser;

impl IPdfTextParser for Utf8Parser {
    fn parse(&self, bytes: &[u8]) -> Result<String, AcquisitionError> {
        if bytes.starts_with(b"%PANIC") {
            panic!("unsupported font encoding");
        }
        if bytes.starts_with(b"%FAIL") {
            return Err(AcquisitionError::ParseFailed {
                reason: "corrupt xref table".to_string(),
            });
        }
        Ok(String::from_utf8_lossy(bytes).trim_end().to_string())
    }
}

/// Blake3-derived embeddings: deterministic, dimension 32, no semantics.
pub struct HashEmbedder;

impl IEmbeddingProvider for HashEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let hash = blake3::hash(text.as_bytes());
        Ok(hash.as_bytes().iter().map(|&b| b as f32 / 255.0).collect())
    }
    fn dimensions(&self) -> usize {
        32
    }
    fn name(&self) -> &str {
        "hash"
    }
    fn is_available(&self) -> bool {
        true
    }
}

/// Looks phrases up in a fixed table; unknown phrases are an error.
pub struct LookupEmbedder {
    table: HashMap<String, Vec<f32>>,
    dims: usize,
}

impl LookupEmbedder {
    pub fn new(entries: &[(&str, Vec<f32>)]) -> Self {
        let dims = entries.first().map(|(_, v)| v.len()).unwrap_or(0);
        Self {
            table: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            dims,
        }
    }
}

impl IEmbeddingProvider for LookupEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.table
            .get(text)
            .cloned()
            .ok_or_else(|| EmbeddingError::InferenceFailed {
                reason: format!("no vector for {text:?}"),
            })
    }
    fn dimensions(&self) -> usize {
        self.dims
    }
    fn name(&self) -> &str {
        "lookup"
    }
    fn is_available(&self) -> bool {
        true
    }
}

/// Always fails.
pub struct FailingEmbedder;

impl IEmbeddingProvider for FailingEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Err(EmbeddingError::ProviderUnavailable {
            provider: "failing".to_string(),
        })
    }
    fn dimensions(&self) -> usize {
        4
    }
    fn name(&self) -> &str {
        "failing"
    }
    fn is_available(&self) -> bool {
        false
    }
}

/// Returns a fixed label vector regardless of input, and counts calls.
pub struct FixedLabelClusterer {
    labels: Vec<usize>,
    calls: AtomicUsize,
}

impl FixedLabelClusterer {
    pub fn new(labels: Vec<usize>) -> Self {
        Self {
            labels,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IClusterer for FixedLabelClusterer {
    fn cluster(
        &self,
        _vectors: &[Vec<f32>],
        _n_clusters: usize,
    ) -> Result<Vec<usize>, ClusteringError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.labels.clone())
    }
    fn name(&self) -> &str {
        "fixed"
    }
}

/// Extracts phrases from a script keyed by a substring of the text; text
/// matching no key yields no phrases. Text containing `!fail` errors.
#[derive(Default)]
pub struct ScriptedExtractor {
    script: Vec<(String, Vec<String>)>,
}

impl ScriptedExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, needle: &str, phrases: &[&str]) -> Self {
        self.script.push((
            needle.to_lowercase(),
            phrases.iter().map(|p| p.to_string()).collect(),
        ));
        self
    }
}

impl IKeyphraseExtractor for ScriptedExtractor {
    fn extract(&self, text: &str) -> Result<Vec<ScoredPhrase>, KeyphraseError> {
        if text.contains("!fail") {
            return Err(KeyphraseError::Embedding(EmbeddingError::InferenceFailed {
                reason: "scripted failure".to_string(),
            }));
        }
        let phrases = self
            .script
            .iter()
            .find(|(needle, _)| text.contains(needle.as_str()))
            .map(|(_, p)| p.clone())
            .unwrap_or_default();
        let n = phrases.len();
        Ok(phrases
            .into_iter()
            .enumerate()
            .map(|(i, p)| ScoredPhrase::new(p, (n - i) as f64 / n as f64))
            .collect())
    }
    fn name(&self) -> &str {
        "scripted"
    }
}

/// Serves a fixed corpus.
pub struct StaticSearch(pub Vec<DocumentRecord>);

impl ISearchProvider for StaticSearch {
    fn search(&self) -> Result<Vec<DocumentRecord>, SearchError> {
        Ok(self.0.clone())
    }
    fn name(&self) -> &str {
        "static"
    }
}
