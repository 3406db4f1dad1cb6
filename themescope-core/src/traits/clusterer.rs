use crate::errors::ClusteringError;

/// Hierarchical clustering routine.
pub trait IClusterer: Send + Sync {
    /// Partition `vectors` into `n_clusters` groups.
    ///
    /// Returns one label in `0..n_clusters` per input vector, positionally
    /// aligned with `vectors`.
    fn cluster(&self, vectors: &[Vec<f32>], n_clusters: usize)
        -> Result<Vec<usize>, ClusteringError>;

    fn name(&self) -> &str;
}
