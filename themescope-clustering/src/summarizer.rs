//! Cluster Summarizer.
//!
//! Per cluster: the most frequent phrase (ties to the first encountered),
//! the number of distinct documents owning any of its phrases, and the raw
//! phrase count. Clusters appear in first-encounter order of their label,
//! then are stably sorted by coverage, highest first.

use std::collections::{BTreeSet, HashMap};

use themescope_core::errors::ClusteringError;
use themescope_core::models::ClusterSummary;

use crate::corpus_index::CorpusIndex;

struct ClusterAccumulator<'a> {
    cluster_id: usize,
    /// Distinct phrases in first-encounter order with their counts.
    counts: Vec<(&'a str, usize)>,
    documents: BTreeSet<usize>,
    phrase_count: usize,
}

impl<'a> ClusterAccumulator<'a> {
    fn new(cluster_id: usize) -> Self {
        Self {
            cluster_id,
            counts: Vec::new(),
            documents: BTreeSet::new(),
            phrase_count: 0,
        }
    }

    fn add(&mut self, phrase: &'a str, index: &CorpusIndex) {
        self.phrase_count += 1;
        match self.counts.iter_mut().find(|(p, _)| *p == phrase) {
            Some((_, c)) => *c += 1,
            None => self.counts.push((phrase, 1)),
        }
        if let Some(docs) = index.documents(phrase) {
            self.documents.extend(docs.iter().copied());
        }
    }

    fn finish(self) -> ClusterSummary {
        // Strictly greater keeps the earliest phrase on ties.
        let mut best: Option<(&str, usize)> = None;
        for &(phrase, count) in &self.counts {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((phrase, count));
            }
        }
        ClusterSummary {
            cluster_id: self.cluster_id,
            representative_phrase: best.map(|(p, _)| p.to_string()).unwrap_or_default(),
            doc_coverage: self.documents.len(),
            phrase_count: self.phrase_count,
        }
    }
}

/// Summaries sorted by document coverage, descending.
///
/// # Errors
/// `LabelCountMismatch` when `labels` is not aligned with `phrases`.
pub fn summarize_clusters(
    phrases: &[String],
    labels: &[usize],
    index: &CorpusIndex,
) -> Result<Vec<ClusterSummary>, ClusteringError> {
    if phrases.len() != labels.len() {
        return Err(ClusteringError::LabelCountMismatch {
            expected: phrases.len(),
            actual: labels.len(),
        });
    }

    let mut order: Vec<ClusterAccumulator<'_>> = Vec::new();
    let mut slot: HashMap<usize, usize> = HashMap::new();
    for (phrase, &label) in phrases.iter().zip(labels) {
        let pos = *slot.entry(label).or_insert_with(|| {
            order.push(ClusterAccumulator::new(label));
            order.len() - 1
        });
        order[pos].add(phrase, index);
    }

    let mut summaries: Vec<ClusterSummary> = order.into_iter().map(ClusterAccumulator::finish).collect();
    summaries.sort_by(|a, b| b.doc_coverage.cmp(&a.doc_coverage));
    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use themescope_core::models::ExtractedDocument;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn index_of(docs: &[&[&str]]) -> CorpusIndex {
        let docs: Vec<ExtractedDocument> = docs
            .iter()
            .enumerate()
            .map(|(i, p)| ExtractedDocument::fallback(i, strings(p)))
            .collect();
        CorpusIndex::build(&docs)
    }

    #[test]
    fn representative_is_the_mode() {
        let index = index_of(&[&["x", "y", "y"]]);
        let out = summarize_clusters(&strings(&["x", "y", "y"]), &[0, 0, 0], &index).unwrap();
        assert_eq!(out[0].representative_phrase, "y");
        assert_eq!(out[0].phrase_count, 3);
    }

    #[test]
    fn mode_ties_go_to_first_encountered() {
        let index = index_of(&[&["q", "p"], &["p", "q"]]);
        let out = summarize_clusters(&strings(&["q", "p", "p", "q"]), &[0, 0, 0, 0], &index).unwrap();
        assert_eq!(out[0].representative_phrase, "q");
    }

    #[test]
    fn coverage_counts_each_document_once() {
        let index = index_of(&[&["a", "b"]]);
        let out = summarize_clusters(&strings(&["a", "b"]), &[3, 3], &index).unwrap();
        assert_eq!(out[0].doc_coverage, 1);
        assert_eq!(out[0].cluster_id, 3);
    }

    #[test]
    fn coverage_ties_keep_encounter_order() {
        let index = index_of(&[&["a"], &["b"], &["c"]]);
        let out = summarize_clusters(&strings(&["a", "b", "c"]), &[7, 2, 5], &index).unwrap();
        let ids: Vec<usize> = out.iter().map(|s| s.cluster_id).collect();
        assert_eq!(ids, vec![7, 2, 5]);
    }

    #[test]
    fn misaligned_labels_are_rejected() {
        let index = index_of(&[&["a"]]);
        let err = summarize_clusters(&strings(&["a"]), &[0, 1], &index).unwrap_err();
        assert!(matches!(err, ClusteringError::LabelCountMismatch { expected: 1, actual: 2 }));
    }

    #[test]
    fn empty_input_yields_no_summaries() {
        let out = summarize_clusters(&[], &[], &CorpusIndex::default()).unwrap();
        assert!(out.is_empty());
    }
}
