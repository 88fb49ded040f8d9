use crate::Energy;
use ndarray::Array2;

/// Distance matrix → affinity matrix of identical shape.
pub trait Affinity {
    fn affinity(&self, distances: &Array2<Energy>) -> Array2<Energy>;
}

/// Affinity matrix → positive number of clusters.
pub trait Estimator {
    fn estimate(&self, affinity: &Array2<Energy>) -> usize;
}

/// Distance matrix and cluster count → one label per sample.
pub trait Clusterer {
    fn cluster(&self, distances: &Array2<Energy>, k: usize) -> Vec<usize>;
}
