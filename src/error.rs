use crate::distance::Chunk;
use thiserror::Error;

/// Failures surfaced by a distance-matrix computation.
///
/// Validation errors (`UnsupportedMetric`, rank-level `InvalidInputShape`)
/// are raised before any chunk is dispatched, so the serial and parallel
/// paths report identical errors for identical input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Requested metric name is not one of the built-in metrics.
    #[error("unsupported metric {0:?}: only \"emd\" is implemented")]
    UnsupportedMetric(String),

    /// Tensor rank is unsupported, or two samples cannot be matched row-to-row.
    #[error("invalid input shape: {0}")]
    InvalidInputShape(String),

    /// A worker died while executing a chunk. The whole computation is aborted.
    #[error("worker failed on chunk {chunk}: {cause}")]
    WorkerFailure { chunk: Chunk, cause: String },

    /// A downstream stage broke its contract (shape, count, or label length).
    #[error("collaborator failed: {0}")]
    CollaboratorFailure(String),

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidConfig(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
