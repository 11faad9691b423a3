//! Online aggregation with confidence bounds.
//!
//! Values from a stream are folded one at a time into a running average; after
//! each fold the estimator reports a half-width `epsilon` such that the true
//! mean lies in `mean ± epsilon` with the configured confidence. Callers stop
//! reading the stream once `epsilon` is small enough.

pub mod aggregation;
pub mod confidence;
pub mod config;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
