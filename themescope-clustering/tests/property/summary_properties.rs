use proptest::prelude::*;
use themescope_core::models::ExtractedDocument;
use themescope_clustering::{flatten_phrases, summarize_clusters, CorpusIndex};

fn corpus_strategy() -> impl Strategy<Value = Vec<ExtractedDocument>> {
    proptest::collection::vec(proptest::collection::vec("[a-e]{1,2}", 0..5), 1..8).prop_map(|docs| {
        docs.into_iter()
            .enumerate()
            .map(|(i, phrases)| ExtractedDocument::fallback(i, phrases))
            .collect()
    })
}

proptest! {
    #[test]
    fn summaries_conserve_phrases_and_bound_coverage(
        docs in corpus_strategy(),
        n_clusters in 1usize..5,
        seed in any::<u64>(),
    ) {
        let flat = flatten_phrases(&docs);
        prop_assume!(!flat.is_empty());
        let index = CorpusIndex::build(&docs);
        let labels: Vec<usize> = (0..flat.len())
            .map(|i| ((seed.wrapping_mul(31).wrapping_add(i as u64 * 17)) % n_clusters as u64) as usize)
            .collect();

        let summaries = summarize_clusters(&flat, &labels, &index).unwrap();

        prop_assert_eq!(summaries.iter().map(|s| s.phrase_count).sum::<usize>(), flat.len());
        for s in &summaries {
            prop_assert!(s.phrase_count >= 1);
            prop_assert!(s.doc_coverage >= 1);
            prop_assert!(s.doc_coverage <= docs.len());
        }
        for pair in summaries.windows(2) {
            prop_assert!(pair[0].doc_coverage >= pair[1].doc_coverage);
        }
    }

    #[test]
    fn index_lists_every_owning_document(docs in corpus_strategy()) {
        let index = CorpusIndex::build(&docs);
        for doc in &docs {
            for phrase in &doc.phrases {
                prop_assert!(index.documents(phrase).unwrap().contains(&doc.index));
            }
        }
        prop_assert_eq!(index, CorpusIndex::build(&docs));
    }
}
