use super::assembler::Assembler;
use super::config::Config;
use super::executor::Executor;
use super::executor::Job;
use super::executor::Parallel;
use super::executor::Serial;
use super::partition::Granularity;
use super::partition::Partition;
use super::progress::Progress;
use super::progress::Silent;
use super::samples::Samples;
use crate::Energy;
use crate::Error;
use crate::Result;
use crate::workers::Pool;
use ndarray::Array2;
use ndarray::ArrayD;
use ndarray::ArrayView3;
use ndarray::ArrayViewD;
use std::time::Instant;

/// Pairwise distance matrix over a validated collection of samples.
///
/// Shape validation happens on construction and metric validation happens
/// when the [`Config`] is built, so both execution paths see identical
/// input and fail identically. A computation is all-or-nothing: the
/// caller receives either the complete symmetric matrix or one error.
#[derive(Debug, Clone, Copy)]
pub struct DistanceMatrix<'a> {
    samples: Samples<'a>,
}

impl<'a> DistanceMatrix<'a> {
    pub fn n(&self) -> usize {
        self.samples.n()
    }
    pub fn samples(&self) -> Samples<'a> {
        self.samples
    }

    /// complete `n x n` matrix under `config`
    pub fn compute(&self, config: &Config) -> Result<Array2<Energy>> {
        self.compute_with(config, &Silent)
    }

    /// complete `n x n` matrix under `config`, reporting each finished chunk
    pub fn compute_with(&self, config: &Config, progress: &dyn Progress) -> Result<Array2<Energy>> {
        let n = self.n();
        let start = Instant::now();
        let kernel = config.kernel();
        let partition = Partition::new(n, config.granularity());
        let job = Job::new(self.samples, &kernel);
        log::info!(
            "{:<32}{:<32}",
            "computing distance matrix",
            format!("{} samples {} chunks", n, partition.len())
        );
        let blocks = if config.parallel() {
            Parallel::from((job, Pool::new(config.workers())?)).run(partition, progress)
        } else {
            Serial::from(job).run(partition, progress)
        };
        progress.finish();
        let mut assembler = Assembler::new(n);
        for block in blocks? {
            assembler.absorb(block)?;
        }
        let matrix = assembler.finish()?;
        log::info!(
            "{:<32}{:<32}",
            "constructed distance matrix",
            format!("{:.2?}", start.elapsed())
        );
        Ok(matrix)
    }
}

impl<'a> From<Samples<'a>> for DistanceMatrix<'a> {
    fn from(samples: Samples<'a>) -> Self {
        Self { samples }
    }
}

impl<'a> From<ArrayView3<'a, Energy>> for DistanceMatrix<'a> {
    fn from(data: ArrayView3<'a, Energy>) -> Self {
        Self::from(Samples::from(data))
    }
}

impl<'a> TryFrom<ArrayViewD<'a, Energy>> for DistanceMatrix<'a> {
    type Error = Error;
    fn try_from(data: ArrayViewD<'a, Energy>) -> Result<Self> {
        Samples::try_from(data).map(Self::from)
    }
}

impl<'a> TryFrom<&'a ArrayD<Energy>> for DistanceMatrix<'a> {
    type Error = Error;
    fn try_from(data: &'a ArrayD<Energy>) -> Result<Self> {
        Samples::try_from(data).map(Self::from)
    }
}

/// Distance matrix over `samples` with the chunking chosen by `config`.
///
/// `samples` must have rank 2 (`(n, features)`, one row per sample) or
/// rank 3 (`(n, rows, features)`); any other rank fails with
/// [`Error::InvalidInputShape`] before any work is dispatched.
pub fn compute_distance_matrix(samples: &ArrayD<Energy>, config: &Config) -> Result<Array2<Energy>> {
    DistanceMatrix::try_from(samples)?.compute(config)
}

/// Distance matrix with explicit scheduling granularity.
///
/// Equal, element for element, to [`compute_distance_matrix`] on the same
/// input for every granularity.
pub fn compute_distance_matrix_chunked(
    samples: &ArrayD<Energy>,
    granularity: Granularity,
    config: &Config,
) -> Result<Array2<Energy>> {
    let config = config.clone().with_granularity(granularity);
    DistanceMatrix::try_from(samples)?.compute(&config)
}
