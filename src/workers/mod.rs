//! Fixed-size worker pool for embarrassingly parallel chunk dispatch.
//!
//! ## Core Types
//!
//! - [`Pool`] — rayon thread pool sized explicitly or from host parallelism
mod pool;

pub use pool::*;
