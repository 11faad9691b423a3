use crate::aggregation::{ConfidenceAggregationFunction, ConfidenceEstimator, Estimate, Estimator};
use crate::confidence::ConfidenceError;

/// Pulls values from a source until the error bound reaches a target precision.
///
/// Each item is the estimate after one more value. Iteration ends when the
/// source is exhausted or once an estimate with `epsilon <= target` has been
/// yielded. A non-finite value produces a single `Err` item and is otherwise
/// skipped, so the caller can decide whether to keep going. While the strategy
/// cannot bound the values seen so far, items carry an infinite `epsilon`.
///
/// A deterministic bound never moves: if it starts above the target, an
/// unbounded source is consumed forever.
pub struct FixedPrecision<I> {
    estimator: ConfidenceEstimator,
    target: f64,
    source: I,
}

impl<I: Iterator<Item = f64>> FixedPrecision<I> {
    pub fn new<S>(
        function: ConfidenceAggregationFunction,
        target: f64,
        source: S,
    ) -> Result<Self, ConfidenceError>
    where
        S: IntoIterator<IntoIter = I>,
    {
        if !target.is_finite() || target <= 0.0 {
            return Err(ConfidenceError::InvalidPrecision(target));
        }
        Ok(Self {
            estimator: ConfidenceEstimator::new(function),
            target,
            source: source.into_iter(),
        })
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Whether the current bound already satisfies the target.
    pub fn reached(&self) -> bool {
        matches!(self.estimator.epsilon(), Ok(e) if e <= self.target)
    }

    pub fn estimator(&self) -> &ConfidenceEstimator {
        &self.estimator
    }

    pub fn into_estimator(self) -> ConfidenceEstimator {
        self.estimator
    }
}

impl<I: Iterator<Item = f64>> Iterator for FixedPrecision<I> {
    type Item = Result<Estimate, ConfidenceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.reached() {
            return None;
        }
        let v = self.source.next()?;
        let step = self.estimator.add(v).and_then(|()| {
            self.estimator
                .estimate_or_unbounded()
                .ok_or(ConfidenceError::NoObservations)
        });
        if let Ok(est) = &step {
            if est.epsilon <= self.target {
                log::debug!("target precision {} reached: {est}", self.target);
            }
        }
        Some(step)
    }
}

pub trait FixedPrecisionExt: Iterator<Item = f64> + Sized {
    /// Shorthand for [`FixedPrecision::new`] over `self`.
    fn until_precision(
        self,
        function: ConfidenceAggregationFunction,
        target: f64,
    ) -> Result<FixedPrecision<Self>, ConfidenceError> {
        FixedPrecision::new(function, target, self)
    }
}

impl<T: Iterator<Item = f64>> FixedPrecisionExt for T {}
