//! Corpus-level theme analysis: index, flatten, cluster, summarize.

use chrono::{DateTime, Utc};
use serde::Serialize;
use themescope_clustering::{flatten_phrases, summarize_clusters, CorpusIndex, SemanticClusterer};
use themescope_core::errors::ClusteringError;
use themescope_core::models::{ClusterSummary, ExtractedDocument};
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Sorted by document coverage, highest first.
    pub summaries: Vec<ClusterSummary>,
    pub total_documents: usize,
    /// Length of the flattened phrase list.
    pub total_phrases: usize,
    pub n_clusters: usize,
    pub generated_at: DateTime<Utc>,
}

pub struct ThemeAnalysis {
    clusterer: SemanticClusterer,
}

impl ThemeAnalysis {
    pub fn new(clusterer: SemanticClusterer) -> Self {
        Self { clusterer }
    }

    /// Runs once, after every document has been processed.
    ///
    /// # Errors
    /// Any clustering failure aborts the analysis; no partial summary is
    /// produced.
    pub fn run(&self, documents: &[ExtractedDocument]) -> Result<AnalysisReport, ClusteringError> {
        let index = CorpusIndex::build(documents);
        let phrases = flatten_phrases(documents);
        let labels = self.clusterer.assign(&phrases)?;
        let summaries = summarize_clusters(&phrases, &labels, &index)?;

        info!(
            documents = documents.len(),
            phrases = phrases.len(),
            distinct = index.len(),
            clusters = summaries.len(),
            "theme analysis complete"
        );

        Ok(AnalysisReport {
            summaries,
            total_documents: documents.len(),
            total_phrases: phrases.len(),
            n_clusters: self.clusterer.n_clusters(),
            generated_at: Utc::now(),
        })
    }
}
