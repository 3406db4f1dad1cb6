use std::sync::Arc;

use test_fixtures::{extracted, FailingEmbedder, FixedLabelClusterer, HashEmbedder, LookupEmbedder};
use themescope_core::config::{ClusteringConfig, Linkage};
use themescope_core::errors::ClusteringError;
use themescope_clustering::{
    flatten_phrases, summarize_clusters, AgglomerativeClusterer, CorpusIndex, SemanticClusterer,
};

fn semantic(labels: Vec<usize>, n_clusters: usize) -> SemanticClusterer {
    SemanticClusterer::new(
        Arc::new(HashEmbedder),
        Box::new(FixedLabelClusterer::new(labels)),
        n_clusters,
    )
}

#[test]
fn three_document_scenario() {
    let docs = vec![
        extracted(0, &["a", "b"]),
        extracted(1, &["b", "c"]),
        extracted(2, &["a"]),
    ];
    let index = CorpusIndex::build(&docs);
    let flat = flatten_phrases(&docs);
    assert_eq!(flat, vec!["a", "b", "b", "c", "a"]);

    // X = 0 for the a's, Y = 1 for b, b, c.
    let labels = semantic(vec![0, 1, 1, 1, 0], 2).assign(&flat).unwrap();
    let summaries = summarize_clusters(&flat, &labels, &index).unwrap();

    assert_eq!(summaries.len(), 2);
    let x = summaries.iter().find(|s| s.cluster_id == 0).unwrap();
    assert_eq!((x.representative_phrase.as_str(), x.doc_coverage, x.phrase_count), ("a", 2, 2));
    let y = summaries.iter().find(|s| s.cluster_id == 1).unwrap();
    assert_eq!((y.representative_phrase.as_str(), y.doc_coverage, y.phrase_count), ("b", 2, 3));
    // Equal coverage keeps encounter order.
    assert_eq!(summaries[0].cluster_id, 0);
}

#[test]
fn preconditions_fail_before_embedding() {
    let flat: Vec<String> = vec!["a".into(), "b".into()];
    let failing = |n| {
        SemanticClusterer::new(
            Arc::new(FailingEmbedder),
            Box::new(AgglomerativeClusterer::default()),
            n,
        )
    };
    assert!(matches!(
        failing(3).assign(&flat),
        Err(ClusteringError::TooManyClusters { requested: 3, available: 2 })
    ));
    assert!(matches!(failing(0).assign(&flat), Err(ClusteringError::ZeroClusters)));
    assert!(matches!(failing(1).assign(&[]), Err(ClusteringError::EmptyCorpus)));
    assert!(matches!(failing(1).assign(&flat), Err(ClusteringError::Embedding(_))));
}

#[test]
fn misbehaving_clusterer_is_reported() {
    let flat: Vec<String> = vec!["a".into(), "b".into()];
    assert!(matches!(
        semantic(vec![0], 1).assign(&flat),
        Err(ClusteringError::LabelCountMismatch { expected: 2, actual: 1 })
    ));
    assert!(matches!(
        semantic(vec![0, 5], 2).assign(&flat),
        Err(ClusteringError::Failed { .. })
    ));
}

#[test]
fn semantically_close_phrases_share_a_cluster() {
    let embedder = LookupEmbedder::new(&[
        ("social support", vec![1.0, 0.0]),
        ("partner support", vec![0.95, 0.05]),
        ("conflict", vec![0.0, 1.0]),
        ("hostility", vec![0.05, 0.95]),
    ]);
    let clusterer = SemanticClusterer::from_config(
        Arc::new(embedder),
        &ClusteringConfig {
            n_clusters: Some(2),
            linkage: Some(Linkage::Ward),
        },
    );
    let flat: Vec<String> = ["social support", "conflict", "partner support", "hostility"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(clusterer.assign(&flat).unwrap(), vec![0, 1, 0, 1]);
}

#[test]
fn identical_phrases_cluster_without_error() {
    let docs = vec![extracted(0, &["stress", "stress"]), extracted(1, &["stress"])];
    let flat = flatten_phrases(&docs);
    let clusterer = SemanticClusterer::new(
        Arc::new(HashEmbedder),
        Box::new(AgglomerativeClusterer::default()),
        2,
    );
    let labels = clusterer.assign(&flat).unwrap();
    let summaries = summarize_clusters(&flat, &labels, &CorpusIndex::build(&docs)).unwrap();
    assert_eq!(summaries.iter().map(|s| s.phrase_count).sum::<usize>(), 3);
    assert!(summaries.iter().all(|s| s.representative_phrase == "stress"));
}
