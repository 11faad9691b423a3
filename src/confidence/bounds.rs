use crate::confidence::ConfidenceError;

/// Known (or observed) limits of the value domain, `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    lower: f64,
    upper: f64,
}

impl Bounds {
    pub fn new(lower: f64, upper: f64) -> Result<Self, ConfidenceError> {
        if !lower.is_finite() || !upper.is_finite() || lower > upper {
            return Err(ConfidenceError::InvalidBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Degenerate domain holding a single value.
    pub(crate) fn point(v: f64) -> Self {
        Self { lower: v, upper: v }
    }

    #[inline]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    #[inline]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.lower && v <= self.upper
    }

    /// Smallest bounds covering both `self` and `v`.
    pub(crate) fn widened(self, v: f64) -> Self {
        Self {
            lower: self.lower.min(v),
            upper: self.upper.max(v),
        }
    }
}

/// Rejects confidence levels outside the open interval (0, 1).
pub fn check_confidence(confidence: f64) -> Result<f64, ConfidenceError> {
    if confidence > 0.0 && confidence < 1.0 {
        Ok(confidence)
    } else {
        Err(ConfidenceError::ConfidenceOutOfRange(confidence))
    }
}

/// Hoeffding half-width `(hi - lo) * sqrt(ln(2 / (1 - c)) / (2n))`.
pub(crate) fn hoeffding_half_width(
    confidence: f64,
    n: u64,
    bounds: Bounds,
) -> Result<f64, ConfidenceError> {
    let confidence = check_confidence(confidence)?;
    if n == 0 {
        return Err(ConfidenceError::NoObservations);
    }
    let log_term = (2.0 / (1.0 - confidence)).ln();
    Ok(bounds.width() * (log_term / (2.0 * n as f64)).sqrt())
}
