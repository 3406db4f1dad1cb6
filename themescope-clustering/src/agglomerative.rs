//! Agglomerative (bottom-up) hierarchical clustering.
//!
//! Starts with one cluster per vector and repeatedly merges the closest pair
//! until `n_clusters` remain. Inter-cluster distances are maintained with the
//! Lance–Williams recurrence, so each merge costs O(n) updates and a full
//! run is O(n^3) time and O(n^2) memory.
//!
//! Ward works on squared Euclidean distances, average linkage on plain
//! Euclidean distances. Equal distances merge the lowest `(i, j)` pair.

use themescope_core::config::Linkage;
use themescope_core::errors::ClusteringError;
use themescope_core::traits::IClusterer;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct AgglomerativeClusterer {
    linkage: Linkage,
}

impl AgglomerativeClusterer {
    pub fn new(linkage: Linkage) -> Self {
        Self { linkage }
    }

    pub fn linkage(&self) -> Linkage {
        self.linkage
    }

    fn pair_distance(&self, a: &[f32], b: &[f32]) -> f64 {
        let squared: f64 = a
            .iter()
            .zip(b)
            .map(|(x, y)| {
                let d = *x as f64 - *y as f64;
                d * d
            })
            .sum();
        match self.linkage {
            Linkage::Ward => squared,
            Linkage::Average => squared.sqrt(),
        }
    }

    /// Distance from `k` to the union of `i` and `j`.
    fn merged_distance(&self, d_ki: f64, d_kj: f64, d_ij: f64, n_i: f64, n_j: f64, n_k: f64) -> f64 {
        match self.linkage {
            Linkage::Ward => {
                ((n_i + n_k) * d_ki + (n_j + n_k) * d_kj - n_k * d_ij) / (n_i + n_j + n_k)
            }
            Linkage::Average => (n_i * d_ki + n_j * d_kj) / (n_i + n_j),
        }
    }
}

impl IClusterer for AgglomerativeClusterer {
    fn cluster(
        &self,
        vectors: &[Vec<f32>],
        n_clusters: usize,
    ) -> Result<Vec<usize>, ClusteringError> {
        let n = vectors.len();
        if n == 0 {
            return Err(ClusteringError::EmptyCorpus);
        }
        if n_clusters == 0 {
            return Err(ClusteringError::ZeroClusters);
        }
        if n_clusters > n {
            return Err(ClusteringError::TooManyClusters {
                requested: n_clusters,
                available: n,
            });
        }
        let dims = vectors[0].len();
        if let Some(bad) = vectors.iter().find(|v| v.len() != dims) {
            return Err(ClusteringError::Failed {
                reason: format!("mixed vector dimensions {dims} and {}", bad.len()),
            });
        }

        let mut dist = vec![vec![0.0f64; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = self.pair_distance(&vectors[i], &vectors[j]);
                dist[i][j] = d;
                dist[j][i] = d;
            }
        }

        // `parent[p]` is the slot that absorbed point p's cluster; each
        // merged cluster lives in the lower of the two slots.
        let mut parent: Vec<usize> = (0..n).collect();
        let mut size = vec![1usize; n];
        let mut active = vec![true; n];
        let mut remaining = n;

        while remaining > n_clusters {
            let mut best: Option<(usize, usize, f64)> = None;
            for i in 0..n {
                if !active[i] {
                    continue;
                }
                for j in (i + 1)..n {
                    if !active[j] {
                        continue;
                    }
                    let d = dist[i][j];
                    if best.map_or(true, |(_, _, bd)| d < bd) {
                        best = Some((i, j, d));
                    }
                }
            }
            let Some((i, j, d_ij)) = best else {
                break;
            };

            let (n_i, n_j) = (size[i] as f64, size[j] as f64);
            for k in 0..n {
                if !active[k] || k == i || k == j {
                    continue;
                }
                let d = self.merged_distance(dist[k][i], dist[k][j], d_ij, n_i, n_j, size[k] as f64);
                dist[i][k] = d;
                dist[k][i] = d;
            }
            size[i] += size[j];
            active[j] = false;
            for p in parent.iter_mut() {
                if *p == j {
                    *p = i;
                }
            }
            remaining -= 1;
        }

        // Relabel slots by first appearance so label 0 holds position 0.
        let mut slot_label: Vec<Option<usize>> = vec![None; n];
        let mut next = 0;
        let labels = parent
            .iter()
            .map(|&slot| {
                *slot_label[slot].get_or_insert_with(|| {
                    let label = next;
                    next += 1;
                    label
                })
            })
            .collect();

        debug!(points = n, clusters = next, linkage = ?self.linkage, "agglomerative clustering done");
        Ok(labels)
    }

    fn name(&self) -> &str {
        match self.linkage {
            Linkage::Ward => "agglomerative-ward",
            Linkage::Average => "agglomerative-average",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ward() -> AgglomerativeClusterer {
        AgglomerativeClusterer::new(Linkage::Ward)
    }

    #[test]
    fn separates_two_obvious_groups() {
        let vectors = vec![
            vec![0.0, 0.0],
            vec![10.0, 10.0],
            vec![0.1, 0.0],
            vec![10.0, 10.1],
            vec![0.0, 0.2],
        ];
        let labels = ward().cluster(&vectors, 2).unwrap();
        assert_eq!(labels, vec![0, 1, 0, 1, 0]);
    }

    #[test]
    fn average_linkage_agrees_on_clear_structure() {
        let vectors = vec![vec![0.0], vec![0.5], vec![9.0], vec![9.5]];
        let labels = AgglomerativeClusterer::new(Linkage::Average)
            .cluster(&vectors, 2)
            .unwrap();
        assert_eq!(labels, vec![0, 0, 1, 1]);
    }

    #[test]
    fn one_cluster_per_point_when_counts_match() {
        let vectors = vec![vec![1.0], vec![2.0], vec![3.0]];
        assert_eq!(ward().cluster(&vectors, 3).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn single_cluster_collects_everything() {
        let vectors = vec![vec![1.0], vec![5.0], vec![-3.0]];
        assert_eq!(ward().cluster(&vectors, 1).unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn identical_vectors_do_not_panic() {
        let vectors = vec![vec![0.5, 0.5]; 6];
        let labels = ward().cluster(&vectors, 3).unwrap();
        assert_eq!(labels.len(), 6);
        let distinct: std::collections::BTreeSet<_> = labels.iter().collect();
        assert_eq!(distinct.len(), 3);
    }

    #[test]
    fn identical_vectors_merge_in_index_order() {
        let vectors = vec![vec![1.0]; 4];
        assert_eq!(ward().cluster(&vectors, 3).unwrap(), vec![0, 0, 1, 2]);
    }

    #[test]
    fn precondition_errors() {
        assert!(matches!(ward().cluster(&[], 1), Err(ClusteringError::EmptyCorpus)));
        assert!(matches!(
            ward().cluster(&[vec![1.0]], 0),
            Err(ClusteringError::ZeroClusters)
        ));
        assert!(matches!(
            ward().cluster(&[vec![1.0]], 2),
            Err(ClusteringError::TooManyClusters { requested: 2, available: 1 })
        ));
    }

    #[test]
    fn mixed_dimensions_fail() {
        let err = ward().cluster(&[vec![1.0], vec![1.0, 2.0]], 1).unwrap_err();
        assert!(matches!(err, ClusteringError::Failed { .. }));
    }

    #[test]
    fn result_is_deterministic() {
        let vectors: Vec<Vec<f32>> = (0..20).map(|i| vec![(i * 7 % 11) as f32, (i % 3) as f32]).collect();
        assert_eq!(ward().cluster(&vectors, 4).unwrap(), ward().cluster(&vectors, 4).unwrap());
    }
}
