use crate::confidence::bounds::hoeffding_half_width;
use crate::confidence::{Bounds, ConfidenceError, check_confidence};

/// Standard normal CDF.
pub fn normal_probability(a: f64) -> f64 {
    0.5 * (1.0 + libm::erf(a / (2.0f64).sqrt()))
}

/// `base^exp`, or `None` on overflow.
#[inline]
pub fn int_pow(base: u64, exp: u32) -> Option<u64> {
    base.checked_pow(exp)
}

/// Smallest sample count whose Hoeffding half-width over `[lower, upper]` is
/// at most `target` at the given confidence.
///
/// Fails with [`ConfidenceError::InvalidPrecision`] when that count does not
/// fit in a `u64`.
pub fn required_samples(
    confidence: f64,
    lower: f64,
    upper: f64,
    target: f64,
) -> Result<u64, ConfidenceError> {
    let confidence = check_confidence(confidence)?;
    let bounds = Bounds::new(lower, upper)?;
    if !target.is_finite() || target <= 0.0 {
        return Err(ConfidenceError::InvalidPrecision(target));
    }
    let log_term = (2.0 / (1.0 - confidence)).ln();
    let exact = bounds.width().powi(2) * log_term / (2.0 * target * target);
    if !exact.is_finite() || exact >= u64::MAX as f64 {
        return Err(ConfidenceError::InvalidPrecision(target));
    }
    let mut n = (exact.ceil() as u64).max(1);
    // ceil of a rounded quotient can land one short
    while hoeffding_half_width(confidence, n, bounds)? > target {
        n = n
            .checked_add(1)
            .ok_or(ConfidenceError::InvalidPrecision(target))?;
    }
    Ok(n)
}
