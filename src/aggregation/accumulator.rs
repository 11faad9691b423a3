use crate::confidence::{Bounds, ConfidenceError};
use crate::utils::math::normal_probability;

/// Running-mean state handed back to the caller after every fold.
///
/// Besides the mean and count it keeps Welford's `m2` (sum of squared
/// deviations from the running mean) and the observed value range, all updated
/// in O(1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanAccumulator {
    count: u64,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl MeanAccumulator {
    /// Accumulator holding exactly one observation.
    pub fn seed(value: f64) -> Result<Self, ConfidenceError> {
        if !value.is_finite() {
            return Err(ConfidenceError::NonFiniteValue(value));
        }
        Ok(Self {
            count: 1,
            mean: value,
            m2: 0.0,
            min: value,
            max: value,
        })
    }

    /// Returns a new accumulator with `value` folded in. `self` is untouched.
    pub fn push(&self, value: f64) -> Result<Self, ConfidenceError> {
        if !value.is_finite() {
            return Err(ConfidenceError::NonFiniteValue(value));
        }
        let count = self.count + 1;
        let delta = value - self.mean;
        let mean = self.mean + delta / count as f64;
        Ok(Self {
            count,
            mean,
            m2: self.m2 + delta * (value - mean),
            min: self.min.min(value),
            max: self.max.max(value),
        })
    }

    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Running sum, recovered as `mean * count`.
    #[inline]
    pub fn sum(&self) -> f64 {
        self.mean * self.count as f64
    }

    /// Smallest range containing every folded value.
    pub fn observed_range(&self) -> Bounds {
        Bounds::point(self.min).widened(self.max)
    }

    /// Unbiased sample variance; 0 with fewer than two observations.
    pub fn sample_variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    /// Estimated standard error of the mean, `s / sqrt(n)`.
    pub fn std_error(&self) -> f64 {
        (self.sample_variance() / self.count as f64).sqrt()
    }

    /// Probability that `mean ± epsilon` covers the true mean if the sampling
    /// distribution of the mean were normal with the observed spread.
    ///
    /// Returns `NaN` while the spread is zero.
    pub fn clt_coverage(&self, epsilon: f64) -> f64 {
        let se = self.std_error();
        if se <= 0.0 {
            return f64::NAN;
        }
        2.0 * normal_probability(epsilon / se) - 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold_all(values: &[f64]) -> MeanAccumulator {
        let mut acc = MeanAccumulator::seed(values[0]).unwrap();
        for &v in &values[1..] {
            acc = acc.push(v).unwrap();
        }
        acc
    }

    #[test]
    fn seed_starts_at_value() {
        let acc = MeanAccumulator::seed(4.5).unwrap();
        assert_eq!(acc.count(), 1);
        assert_eq!(acc.mean(), 4.5);
        assert_eq!(acc.sample_variance(), 0.0);
    }

    #[test]
    fn push_is_incremental_mean() {
        let acc = fold_all(&[2.0, 4.0, 9.0]);
        assert_eq!(acc.count(), 3);
        assert!((acc.mean() - 5.0).abs() < 1e-12);
        assert!((acc.sum() - 15.0).abs() < 1e-12);
    }

    #[test]
    fn push_does_not_mutate_source() {
        let a = MeanAccumulator::seed(1.0).unwrap();
        let b = a.push(3.0).unwrap();
        assert_eq!(a.count(), 1);
        assert_eq!(b.count(), 2);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(MeanAccumulator::seed(f64::NAN).is_err());
        let a = MeanAccumulator::seed(1.0).unwrap();
        assert_eq!(
            a.push(f64::INFINITY),
            Err(ConfidenceError::NonFiniteValue(f64::INFINITY))
        );
    }

    #[test]
    fn variance_matches_two_pass() {
        let xs = [1.0, 2.0, 4.0, 7.0, 11.0];
        let acc = fold_all(&xs);
        let mean = xs.iter().sum::<f64>() / xs.len() as f64;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (xs.len() - 1) as f64;
        assert!((acc.sample_variance() - var).abs() < 1e-12);
    }

    #[test]
    fn observed_range_tracks_extremes() {
        let acc = fold_all(&[3.0, -2.0, 8.0, 1.0]);
        let r = acc.observed_range();
        assert_eq!(r.lower(), -2.0);
        assert_eq!(r.upper(), 8.0);
    }

    #[test]
    fn clt_coverage_is_probability() {
        let acc = fold_all(&[1.0, 2.0, 3.0, 4.0]);
        let c = acc.clt_coverage(acc.std_error() * 1.96);
        assert!((c - 0.95).abs() < 1e-3, "c={c}");
        assert!(MeanAccumulator::seed(1.0).unwrap().clt_coverage(1.0).is_nan());
    }
}
