use crate::aggregation::{ConfidenceAggregationFunction, Estimate, MeanAccumulator};
use crate::confidence::ConfidenceError;

/// Online scalar estimator (e.g., streaming mean).
///
/// Implementations accept values incrementally via [`add`](Estimator::add) and
/// expose the current estimate via [`estimation`](Estimator::estimation).
pub trait Estimator {
    /// Incorporates a new observation.
    fn add(&mut self, v: f64) -> Result<(), ConfidenceError>;

    /// Returns the current estimate, `NaN` before any observation.
    fn estimation(&self) -> f64;
}

/// Keeps the accumulator next to its [`ConfidenceAggregationFunction`] for
/// callers that do not want to thread it through every fold.
#[derive(Debug, Clone)]
pub struct ConfidenceEstimator {
    function: ConfidenceAggregationFunction,
    accumulator: Option<MeanAccumulator>,
}

impl ConfidenceEstimator {
    pub fn new(function: ConfidenceAggregationFunction) -> Self {
        Self {
            function,
            accumulator: None,
        }
    }

    pub fn function(&self) -> &ConfidenceAggregationFunction {
        &self.function
    }

    pub fn accumulator(&self) -> Option<&MeanAccumulator> {
        self.accumulator.as_ref()
    }

    /// Current mean and bound.
    ///
    /// `Ok(None)` before the first observation. Fails with
    /// [`ConfidenceError::EpsilonUnavailable`] while values have been folded
    /// but the strategy cannot bound them yet.
    pub fn estimate(&self) -> Result<Option<Estimate>, ConfidenceError> {
        self.accumulator
            .as_ref()
            .map(|acc| self.function.estimate(acc))
            .transpose()
    }

    /// Like [`estimate`](Self::estimate), but a missing bound is reported as an
    /// infinite half-width.
    pub fn estimate_or_unbounded(&self) -> Option<Estimate> {
        let acc = self.accumulator.as_ref()?;
        Some(Estimate {
            count: acc.count(),
            mean: acc.mean(),
            epsilon: self.function.epsilon().unwrap_or(f64::INFINITY),
            confidence: self.function.confidence(),
        })
    }

    pub fn epsilon(&self) -> Result<f64, ConfidenceError> {
        self.function.epsilon()
    }
}

impl From<ConfidenceAggregationFunction> for ConfidenceEstimator {
    fn from(function: ConfidenceAggregationFunction) -> Self {
        Self::new(function)
    }
}

impl Estimator for ConfidenceEstimator {
    fn add(&mut self, v: f64) -> Result<(), ConfidenceError> {
        let next = self.function.fold(self.accumulator, v)?;
        self.accumulator = Some(next);
        Ok(())
    }

    #[inline]
    fn estimation(&self) -> f64 {
        self.accumulator.map_or(f64::NAN, |a| a.mean())
    }
}
