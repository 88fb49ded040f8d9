use crate::Chunk;
use crate::Error;
use crate::Result;
use rayon::prelude::*;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// Fixed pool of OS threads that executes chunks independently.
///
/// Jobs share nothing mutable: each receives its own [`Chunk`] and returns
/// an owned result. The first failing chunk flags the pool so chunks that
/// have not started yet are skipped, and the failure is returned once.
pub struct Pool {
    threads: rayon::ThreadPool,
    size: usize,
}

impl Pool {
    /// Pool with exactly `size` workers.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidConfig("worker pool needs at least one worker".to_string()));
        }
        let threads = rayon::ThreadPoolBuilder::new()
            .num_threads(size)
            .thread_name(|i| format!("cassa-worker-{}", i))
            .build()
            .map_err(|e| Error::InvalidConfig(format!("worker pool: {}", e)))?;
        log::debug!("{:<32}{:<32}", "spawned worker pool", size);
        Ok(Self { threads, size })
    }
    /// Pool sized to the host's available parallelism, read at call time.
    pub fn host() -> Result<Self> {
        Self::new(num_cpus::get())
    }
    pub fn size(&self) -> usize {
        self.size
    }

    /// Run `job` for every chunk and collect the results.
    ///
    /// Blocks until every chunk has reported or one has failed. Errors
    /// returned by the job pass through unchanged; a panic is caught and
    /// surfaced as [`Error::WorkerFailure`] for that chunk. Results from
    /// chunks that completed before a failure are discarded.
    pub fn dispatch<T, F>(&self, chunks: Vec<Chunk>, job: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(Chunk) -> Result<T> + Sync,
    {
        let ref cancelled = AtomicBool::new(false);
        let ref job = job;
        self.threads.install(|| {
            chunks
                .into_par_iter()
                .map(|chunk| Self::attempt(chunk, job, cancelled))
                .collect::<Result<Vec<Option<T>>>>()
                .map(|results| results.into_iter().flatten().collect())
        })
    }

    /// `Ok(None)` means the chunk was skipped because another one failed;
    /// the failing chunk's `Err` is guaranteed to be in the same collection.
    fn attempt<T, F>(chunk: Chunk, job: &F, cancelled: &AtomicBool) -> Result<Option<T>>
    where
        F: Fn(Chunk) -> Result<T>,
    {
        if cancelled.load(Ordering::Relaxed) {
            return Ok(None);
        }
        Self::guard(chunk, || job(chunk)).map(Some).inspect_err(|_| {
            cancelled.store(true, Ordering::Relaxed);
        })
    }

    /// Run one chunk's work, converting a panic into [`Error::WorkerFailure`]
    /// for that chunk. Shared by the pool and by single-threaded callers so
    /// both report a crashing chunk the same way.
    pub fn guard<T, F>(chunk: Chunk, work: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        std::panic::catch_unwind(AssertUnwindSafe(work)).unwrap_or_else(|panic| {
            log::debug!("{:<32}{:<32}", "worker panicked on chunk", chunk);
            Err(Error::WorkerFailure {
                chunk,
                cause: Self::describe(panic),
            })
        })
    }

    fn describe(panic: Box<dyn Any + Send>) -> String {
        panic
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "worker panicked".to_string())
    }
}
