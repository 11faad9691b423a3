//! Bounds fixed ahead of sampling.
//!
//! When the caller commits to drawing exactly `planned` samples from a known
//! domain, the interval that will hold after the last draw is known before the
//! first one. It does not move as values arrive.

use crate::confidence::bounds::hoeffding_half_width;
use crate::confidence::{Bounds, ConfidenceError};

/// Confidence used when a deterministic bound is requested without one.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

pub fn average(confidence: f64, bounds: Bounds, planned: u64) -> Result<f64, ConfidenceError> {
    if planned == 0 {
        return Err(ConfidenceError::ZeroPlannedSamples);
    }
    hoeffding_half_width(confidence, planned, bounds)
}
