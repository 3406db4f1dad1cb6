//! Error display and code mapping.

use themescope_core::errors::{
    AcquisitionError, ClusteringError, EmbeddingError, PipelineOutcome, ThemeError,
    ThemeErrorCode,
};

#[test]
fn too_many_clusters_names_the_constraint() {
    let err = ClusteringError::TooManyClusters {
        requested: 10,
        available: 4,
    };
    let msg = err.to_string();
    assert!(msg.contains("10"));
    assert!(msg.contains("4"));
    assert_eq!(err.error_code(), "CLUSTER_COUNT_EXCEEDS_PHRASES");
}

#[test]
fn umbrella_error_delegates_code() {
    let err: ThemeError = ClusteringError::EmptyCorpus.into();
    assert_eq!(err.error_code(), "EMPTY_CORPUS");

    let err: ThemeError = AcquisitionError::BlockSignal {
        signal: "access denied".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "BLOCK_SIGNAL");
}

#[test]
fn embedding_error_inside_clustering_keeps_embedding_code() {
    let err = ClusteringError::from(EmbeddingError::InferenceFailed {
        reason: "boom".to_string(),
    });
    assert_eq!(err.error_code(), "EMBEDDING_ERROR");
}

#[test]
fn pipeline_outcome_collects_non_fatal_errors() {
    let mut outcome: PipelineOutcome<Vec<usize>> = PipelineOutcome::new(vec![1, 2]);
    assert!(outcome.is_clean());
    outcome.add_error(3, AcquisitionError::NoPdfLink);
    assert_eq!(outcome.error_count(), 1);
    assert_eq!(outcome.errors[0].0, 3);
}
