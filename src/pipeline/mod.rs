//! Seams for the stages that consume the distance matrix.
//!
//! The affinity transform, cluster-count estimation, and clustering
//! algorithm live outside this crate; [`Pipeline`] only wires them
//! behind the distance engine and checks that each honors its contract.
mod runner;
mod stages;

pub use runner::*;
pub use stages::*;
