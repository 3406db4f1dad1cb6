//! Semantic clustering configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Merge criterion for agglomerative clustering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Linkage {
    /// Minimum increase in within-cluster variance.
    #[default]
    Ward,
    /// Mean pairwise distance.
    Average,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Target cluster count. Default: 10.
    pub n_clusters: Option<usize>,
    /// Default: ward.
    pub linkage: Option<Linkage>,
}

impl ClusteringConfig {
    pub fn effective_n_clusters(&self) -> usize {
        self.n_clusters.unwrap_or(constants::DEFAULT_N_CLUSTERS)
    }

    pub fn effective_linkage(&self) -> Linkage {
        self.linkage.unwrap_or_default()
    }
}
