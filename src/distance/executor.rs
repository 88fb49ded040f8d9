use super::chunk::Block;
use super::chunk::Chunk;
use super::metric::Pairwise;
use super::partition::Partition;
use super::progress::Progress;
use super::samples::Samples;
use crate::Energy;
use crate::Result;
use crate::workers::Pool;

/// Strategy for running every chunk of a partition.
///
/// Serial and parallel executors evaluate the same pure function on the
/// same inputs, so their blocks are bit-identical; only the order in which
/// blocks arrive may differ.
pub trait Executor {
    fn run(&self, partition: Partition, progress: &dyn Progress) -> Result<Vec<Block>>;
}

/// Computes the cost of every pair in one chunk.
///
/// Holds only shared references, so one job is shared by
/// every worker without synchronization.
pub struct Job<'s, 'p, P: Pairwise> {
    samples: Samples<'s>,
    pairwise: &'p P,
}

impl<'s, 'p, P: Pairwise> Job<'s, 'p, P> {
    pub fn new(samples: Samples<'s>, pairwise: &'p P) -> Self {
        Self { samples, pairwise }
    }
    /// costs for `k1..k2`, in that order
    pub fn execute(&self, chunk: Chunk) -> Result<Block> {
        let n = self.samples.n();
        chunk
            .pairs(n)
            .map(|pair| {
                self.pairwise
                    .cost(self.samples.sample(pair.i()), self.samples.sample(pair.j()))
            })
            .collect::<Result<Vec<Energy>>>()
            .map(|values| Block::from((chunk, values)))
    }
}

/// Walks chunks one at a time on the calling thread.
///
/// A panicking chunk surfaces as the same [`Error::WorkerFailure`](crate::Error)
/// the parallel path reports, and stops the walk.
pub struct Serial<'s, 'p, P: Pairwise> {
    job: Job<'s, 'p, P>,
}

impl<'s, 'p, P: Pairwise> From<Job<'s, 'p, P>> for Serial<'s, 'p, P> {
    fn from(job: Job<'s, 'p, P>) -> Self {
        Self { job }
    }
}

impl<P: Pairwise> Executor for Serial<'_, '_, P> {
    fn run(&self, partition: Partition, progress: &dyn Progress) -> Result<Vec<Block>> {
        partition
            .map(|chunk| {
                let block = Pool::guard(chunk, || self.job.execute(chunk))?;
                progress.tick(&chunk);
                Ok(block)
            })
            .collect()
    }
}

/// Distributes chunks across a fixed worker pool.
pub struct Parallel<'s, 'p, P: Pairwise> {
    job: Job<'s, 'p, P>,
    pool: Pool,
}

impl<'s, 'p, P: Pairwise> From<(Job<'s, 'p, P>, Pool)> for Parallel<'s, 'p, P> {
    fn from((job, pool): (Job<'s, 'p, P>, Pool)) -> Self {
        Self { job, pool }
    }
}

impl<P: Pairwise> Executor for Parallel<'_, '_, P> {
    fn run(&self, partition: Partition, progress: &dyn Progress) -> Result<Vec<Block>> {
        log::debug!("{:<32}{:<32}", "dispatching chunks to workers", self.pool.size());
        self.pool.dispatch(partition.collect(), |chunk| {
            let block = self.job.execute(chunk)?;
            progress.tick(&chunk);
            Ok(block)
        })
    }
}
