use serde::{Deserialize, Serialize};

/// Aggregate statistics for one semantic cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub cluster_id: usize,
    /// Most frequent phrase in the cluster; ties go to the first encountered.
    pub representative_phrase: String,
    /// Distinct documents contributing at least one phrase.
    pub doc_coverage: usize,
    /// Raw phrase occurrences, duplicates included.
    pub phrase_count: usize,
}
