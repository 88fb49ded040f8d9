use super::stages::Affinity;
use super::stages::Clusterer;
use super::stages::Estimator;
use crate::Energy;
use crate::Error;
use crate::Result;
use crate::distance::Config;
use crate::distance::DistanceMatrix;
use ndarray::Array2;
use ndarray::ArrayD;

/// Everything produced by one pass of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    pub distances: Array2<Energy>,
    pub affinity: Array2<Energy>,
    pub k: usize,
    pub labels: Vec<usize>,
}

/// Distance matrix → affinity → cluster count → labels.
pub struct Pipeline<A, E, C> {
    config: Config,
    affinity: A,
    estimator: E,
    clusterer: C,
}

impl<A, E, C> Pipeline<A, E, C>
where
    A: Affinity,
    E: Estimator,
    C: Clusterer,
{
    pub fn new(config: Config, affinity: A, estimator: E, clusterer: C) -> Self {
        Self {
            config,
            affinity,
            estimator,
            clusterer,
        }
    }

    pub fn run(&self, samples: &ArrayD<Energy>) -> Result<Clustering> {
        let distances = DistanceMatrix::try_from(samples)?.compute(&self.config)?;
        let n = distances.nrows();
        let affinity = self.affinity.affinity(&distances);
        if affinity.dim() != distances.dim() {
            return Err(Error::CollaboratorFailure(format!(
                "affinity has shape {:?}, distances {:?}",
                affinity.dim(),
                distances.dim()
            )));
        }
        let k = self.estimator.estimate(&affinity);
        if k == 0 {
            return Err(Error::CollaboratorFailure(
                "estimated zero clusters".to_string(),
            ));
        }
        log::info!("{:<32}{:<32}", "estimated cluster count", k);
        let labels = self.clusterer.cluster(&distances, k);
        if labels.len() != n {
            return Err(Error::CollaboratorFailure(format!(
                "{} labels for {} samples",
                labels.len(),
                n
            )));
        }
        Ok(Clustering {
            distances,
            affinity,
            k,
            labels,
        })
    }
}
