//! Optimal transport between samples viewed as uniform point clouds.
//!
//! ## Core Types
//!
//! - [`Measure`] — ground distance between two rows
//! - [`Ground`] — the built-in ground measures
//! - [`Coupling`] — a transport plan with a total cost
//! - [`Assignment`] — exact one-to-one coupling (Kuhn–Munkres)
//!
//! [`emd`] ties them together for a pair of samples.
mod assignment;
mod coupling;
mod emd;
mod measure;

pub use assignment::*;
pub use coupling::*;
pub use emd::*;
pub use measure::*;
