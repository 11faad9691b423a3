//! Large-sample confidence bounds for running averages.
//!
//! Valid when the sample is large enough for the Central Limit Theorem to hold
//! and small relative to the population, so sampling without replacement
//! behaves like sampling with replacement. Neither condition is checked here;
//! callers decide when `n_seen` is large enough to trust the interval.

use crate::confidence::bounds::hoeffding_half_width;
use crate::confidence::{Bounds, ConfidenceError};

/// Half-width of the large-sample interval for an average after `n_seen`
/// observations drawn from `bounds`.
pub fn average(confidence: f64, n_seen: u64, bounds: Bounds) -> Result<f64, ConfidenceError> {
    hoeffding_half_width(confidence, n_seen, bounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrinks_with_more_observations() {
        let b = Bounds::new(0.0, 100.0).unwrap();
        let e10 = average(0.9, 10, b).unwrap();
        let e1000 = average(0.9, 1000, b).unwrap();
        assert!(e1000 < e10);
        assert!((e10 / e1000 - 10.0).abs() < 1e-9);
    }

    #[test]
    fn zero_observations_is_a_domain_error() {
        let b = Bounds::new(0.0, 1.0).unwrap();
        assert_eq!(average(0.9, 0, b), Err(ConfidenceError::NoObservations));
    }
}
