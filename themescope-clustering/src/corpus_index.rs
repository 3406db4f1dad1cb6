//! Phrase to owning-document index.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use themescope_core::models::ExtractedDocument;

/// For each phrase, the set of document indices whose phrase list contains it.
/// Built once from the extracted corpus and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusIndex {
    entries: BTreeMap<String, BTreeSet<usize>>,
}

impl CorpusIndex {
    pub fn build(documents: &[ExtractedDocument]) -> Self {
        let mut entries: BTreeMap<String, BTreeSet<usize>> = BTreeMap::new();
        for doc in documents {
            for phrase in &doc.phrases {
                entries.entry(phrase.clone()).or_default().insert(doc.index);
            }
        }
        Self { entries }
    }

    /// Owning documents of `phrase`, if it occurs anywhere.
    pub fn documents(&self, phrase: &str) -> Option<&BTreeSet<usize>> {
        self.entries.get(phrase)
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.entries.contains_key(phrase)
    }

    /// Number of distinct phrases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<usize>)> {
        self.entries.iter().map(|(p, d)| (p.as_str(), d))
    }
}

/// Every document's phrases concatenated in document order, duplicates kept.
pub fn flatten_phrases(documents: &[ExtractedDocument]) -> Vec<String> {
    documents
        .iter()
        .flat_map(|doc| doc.phrases.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(index: usize, phrases: &[&str]) -> ExtractedDocument {
        ExtractedDocument::fallback(index, phrases.iter().map(|p| p.to_string()).collect())
    }

    fn corpus() -> Vec<ExtractedDocument> {
        vec![doc(0, &["a", "b"]), doc(1, &["b", "c"]), doc(2, &["a"])]
    }

    #[test]
    fn index_maps_phrases_to_owning_documents() {
        let index = CorpusIndex::build(&corpus());
        assert_eq!(index.len(), 3);
        assert_eq!(index.documents("a").unwrap().iter().copied().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(index.documents("b").unwrap().iter().copied().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(index.documents("c").unwrap().len(), 1);
        assert!(index.documents("d").is_none());
    }

    #[test]
    fn duplicates_within_a_document_collapse() {
        let index = CorpusIndex::build(&[doc(0, &["x", "x"])]);
        assert_eq!(index.documents("x").unwrap().len(), 1);
    }

    #[test]
    fn build_is_idempotent() {
        assert_eq!(CorpusIndex::build(&corpus()), CorpusIndex::build(&corpus()));
    }

    #[test]
    fn flatten_keeps_document_order_and_duplicates() {
        assert_eq!(flatten_phrases(&corpus()), vec!["a", "b", "b", "c", "a"]);
    }

    #[test]
    fn documents_without_phrases_contribute_nothing() {
        let docs = vec![doc(0, &[]), doc(1, &["z"])];
        assert_eq!(flatten_phrases(&docs), vec!["z"]);
        assert_eq!(CorpusIndex::build(&docs).len(), 1);
    }
}
