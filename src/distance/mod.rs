//! Pairwise distance-matrix engine.
//!
//! The upper triangle of an `n x n` matrix (diagonal included) is flattened
//! into `n(n+1)/2` linear [`Pair`] indices, cut into contiguous [`Chunk`]s by
//! a [`Partition`], computed by an [`Executor`], and scattered back into a
//! dense symmetric matrix by the [`Assembler`].
//!
//! ## Entry Points
//!
//! - [`compute_distance_matrix`] — default chunking
//! - [`compute_distance_matrix_chunked`] — caller-chosen [`Granularity`]
//! - [`DistanceMatrix`] — reusable engine with progress reporting
mod assembler;
mod chunk;
mod config;
mod executor;
mod matrix;
mod metric;
mod pair;
mod partition;
mod progress;
mod samples;
#[cfg(test)]
mod tests;

pub use assembler::*;
pub use chunk::*;
pub use config::*;
pub use executor::*;
pub use matrix::*;
pub use metric::*;
pub use pair::*;
pub use partition::*;
pub use progress::*;
pub use samples::*;
