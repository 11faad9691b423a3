use crate::aggregation::{Estimate, MeanAccumulator};
use crate::confidence::{BoundStrategy, Bounds, ConfidenceError, check_confidence, deterministic};

/// Running-average estimator that reports an error bound after every fold.
///
/// The accumulator is owned by the caller: each [`fold`](Self::fold) takes the
/// previous one (or `None` for the first value) and returns the next. The
/// function itself only remembers how many values it has seen and the last
/// half-width it computed.
///
/// ```
/// use confidence_agg::aggregation::ConfidenceAggregationFunction;
///
/// let mut f = ConfidenceAggregationFunction::conservative_confidence_average(0.95, 0.0, 100.0)?;
/// let mut acc = None;
/// for v in [10.0, 20.0, 30.0] {
///     acc = Some(f.fold(acc, v)?);
/// }
/// assert_eq!(acc.map(|a| a.mean()), Some(20.0));
/// assert!(f.epsilon()? > 0.0);
/// # Ok::<(), confidence_agg::confidence::ConfidenceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfidenceAggregationFunction {
    confidence: f64,
    strategy: BoundStrategy,
    observations: u64,
    observed: Option<Bounds>,
    last_epsilon: Option<f64>,
}

impl ConfidenceAggregationFunction {
    fn new(confidence: f64, strategy: BoundStrategy) -> Result<Self, ConfidenceError> {
        let confidence = check_confidence(confidence)?;
        let last_epsilon = if strategy.depends_on_data() {
            None
        } else {
            Some(strategy.epsilon(confidence, 0, None)?)
        };
        log::debug!(
            "confidence aggregation: strategy={}, confidence={confidence}, bounds={:?}",
            strategy.name(),
            strategy.declared_bounds()
        );
        Ok(Self {
            confidence,
            strategy,
            observations: 0,
            observed: None,
            last_epsilon,
        })
    }

    /// Large-sample average whose value domain is the range observed so far.
    pub fn large_sample_confidence_average(confidence: f64) -> Result<Self, ConfidenceError> {
        Self::new(confidence, BoundStrategy::LargeSample { bounds: None })
    }

    /// Large-sample average over a known value domain.
    pub fn large_sample_confidence_average_with_bounds(
        confidence: f64,
        lower: f64,
        upper: f64,
    ) -> Result<Self, ConfidenceError> {
        let bounds = Bounds::new(lower, upper)?;
        Self::new(
            confidence,
            BoundStrategy::LargeSample {
                bounds: Some(bounds),
            },
        )
    }

    pub fn conservative_confidence_average(
        confidence: f64,
        lower: f64,
        upper: f64,
    ) -> Result<Self, ConfidenceError> {
        let bounds = Bounds::new(lower, upper)?;
        Self::new(confidence, BoundStrategy::Conservative { bounds })
    }

    /// Fixed bound for `planned` samples at [`deterministic::DEFAULT_CONFIDENCE`].
    pub fn deterministic_confidence_average(
        lower: f64,
        upper: f64,
        planned: u64,
    ) -> Result<Self, ConfidenceError> {
        Self::deterministic_confidence_average_at(
            deterministic::DEFAULT_CONFIDENCE,
            lower,
            upper,
            planned,
        )
    }

    pub fn deterministic_confidence_average_at(
        confidence: f64,
        lower: f64,
        upper: f64,
        planned: u64,
    ) -> Result<Self, ConfidenceError> {
        let bounds = Bounds::new(lower, upper)?;
        if planned == 0 {
            return Err(ConfidenceError::ZeroPlannedSamples);
        }
        Self::new(confidence, BoundStrategy::Deterministic { bounds, planned })
    }

    /// Folds `value` into `acc` and refreshes the error bound.
    ///
    /// On error nothing changes: neither the count nor the last epsilon.
    pub fn fold(
        &mut self,
        acc: Option<MeanAccumulator>,
        value: f64,
    ) -> Result<MeanAccumulator, ConfidenceError> {
        let next = match acc {
            None => MeanAccumulator::seed(value)?,
            Some(prev) => prev.push(value)?,
        };

        let observations = self.observations + 1;
        let observed = Some(match self.observed {
            None => Bounds::point(value),
            Some(r) => r.widened(value),
        });
        let epsilon = if self.strategy.depends_on_data() {
            match self.strategy.epsilon(self.confidence, observations, observed) {
                Ok(e) => Some(e),
                Err(ConfidenceError::EpsilonUnavailable) => None,
                Err(e) => return Err(e),
            }
        } else {
            self.last_epsilon
        };

        if let Some(bounds) = self.strategy.declared_bounds() {
            if !bounds.contains(value) {
                log::warn!(
                    "value {value} outside declared bounds [{}, {}]; {} bound no longer guaranteed",
                    bounds.lower(),
                    bounds.upper(),
                    self.strategy.name()
                );
            }
        }

        self.observations = observations;
        self.observed = observed;
        self.last_epsilon = epsilon;
        log::trace!(
            "fold #{observations}: value={value}, mean={}, epsilon={epsilon:?}",
            next.mean()
        );
        Ok(next)
    }

    /// Half-width of the current interval.
    pub fn epsilon(&self) -> Result<f64, ConfidenceError> {
        self.last_epsilon.ok_or(ConfidenceError::EpsilonUnavailable)
    }

    #[inline]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    #[inline]
    pub fn observations(&self) -> u64 {
        self.observations
    }

    #[inline]
    pub fn strategy(&self) -> &BoundStrategy {
        &self.strategy
    }

    /// Packages `acc` with the current bound for reporting.
    pub fn estimate(&self, acc: &MeanAccumulator) -> Result<Estimate, ConfidenceError> {
        Ok(Estimate {
            count: acc.count(),
            mean: acc.mean(),
            epsilon: self.epsilon()?,
            confidence: self.confidence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confidence::ErrorKind;

    fn fold_all(
        f: &mut ConfidenceAggregationFunction,
        values: &[f64],
    ) -> Option<MeanAccumulator> {
        let mut acc = None;
        for &v in values {
            acc = Some(f.fold(acc, v).unwrap());
        }
        acc
    }

    #[test]
    fn epsilon_undefined_before_first_fold() {
        let f = ConfidenceAggregationFunction::large_sample_confidence_average(0.9).unwrap();
        assert_eq!(f.epsilon(), Err(ConfidenceError::EpsilonUnavailable));
        assert_eq!(f.epsilon().unwrap_err().kind(), ErrorKind::State);

        let f = ConfidenceAggregationFunction::conservative_confidence_average(0.9, 0.0, 1.0)
            .unwrap();
        assert!(f.epsilon().is_err());
    }

    #[test]
    fn deterministic_epsilon_available_up_front() {
        let f = ConfidenceAggregationFunction::deterministic_confidence_average(0.0, 1.0, 50)
            .unwrap();
        let want = (40.0f64.ln() / 100.0).sqrt();
        assert!((f.epsilon().unwrap() - want).abs() < 1e-12);
        assert_eq!(f.confidence(), deterministic::DEFAULT_CONFIDENCE);
    }

    #[test]
    fn first_fold_seeds_accumulator() {
        let mut f = ConfidenceAggregationFunction::large_sample_confidence_average(0.9).unwrap();
        let acc = f.fold(None, 7.0).unwrap();
        assert_eq!(acc.count(), 1);
        assert_eq!(acc.mean(), 7.0);
        assert_eq!(f.observations(), 1);
    }

    #[test]
    fn large_sample_without_spread_has_no_bound() {
        let mut f = ConfidenceAggregationFunction::large_sample_confidence_average(0.95).unwrap();
        let acc = fold_all(&mut f, &[5.0, 5.0, 5.0]).unwrap();
        assert_eq!(f.observations(), 3);
        assert_eq!(f.epsilon(), Err(ConfidenceError::EpsilonUnavailable));
        assert_eq!(f.estimate(&acc).unwrap_err().kind(), ErrorKind::State);

        f.fold(Some(acc), 1000.0).unwrap();
        let want = 995.0 * (40.0f64.ln() / 8.0).sqrt();
        assert!((f.epsilon().unwrap() - want).abs() < 1e-9);
    }

    #[test]
    fn large_sample_uses_observed_range() {
        let mut f = ConfidenceAggregationFunction::large_sample_confidence_average(0.9).unwrap();
        fold_all(&mut f, &[2.0, 6.0, 4.0, 4.0]);
        let want = 4.0 * (20.0f64.ln() / 8.0).sqrt();
        assert!((f.epsilon().unwrap() - want).abs() < 1e-12);
    }

    #[test]
    fn failed_fold_leaves_state_unchanged() {
        let mut f = ConfidenceAggregationFunction::conservative_confidence_average(0.9, 0.0, 10.0)
            .unwrap();
        let acc = fold_all(&mut f, &[1.0, 2.0]);
        let eps = f.epsilon().unwrap();

        let err = f.fold(acc, f64::NAN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
        assert_eq!(f.observations(), 2);
        assert_eq!(f.epsilon().unwrap(), eps);

        let err = f.fold(None, f64::NEG_INFINITY).unwrap_err();
        assert!(matches!(err, ConfidenceError::NonFiniteValue(_)));
        assert_eq!(f.observations(), 2);
    }

    #[test]
    fn out_of_bounds_values_are_accepted() {
        let mut f = ConfidenceAggregationFunction::conservative_confidence_average(0.9, 0.0, 1.0)
            .unwrap();
        let acc = f.fold(None, 5.0).unwrap();
        assert_eq!(acc.mean(), 5.0);
        assert_eq!(f.observations(), 1);
    }

    #[test]
    fn deterministic_epsilon_does_not_move() {
        let mut f =
            ConfidenceAggregationFunction::deterministic_confidence_average_at(0.9, 0.0, 100.0, 20)
                .unwrap();
        let before = f.epsilon().unwrap();
        fold_all(&mut f, &[1.0, 99.0, 50.0, 3.0, 42.0]);
        assert_eq!(f.epsilon().unwrap(), before);
        assert_eq!(f.observations(), 5);
    }

    #[test]
    fn constructors_validate_configuration() {
        type F = ConfidenceAggregationFunction;
        for c in [0.0, 1.0, -0.5, 2.0] {
            assert!(F::large_sample_confidence_average(c).is_err());
            assert!(F::conservative_confidence_average(c, 0.0, 1.0).is_err());
            assert!(F::deterministic_confidence_average_at(c, 0.0, 1.0, 5).is_err());
        }
        assert_eq!(
            F::conservative_confidence_average(0.5, 2.0, 1.0).unwrap_err().kind(),
            ErrorKind::Configuration
        );
        assert!(F::large_sample_confidence_average_with_bounds(0.5, 2.0, 1.0).is_err());
        assert_eq!(
            F::deterministic_confidence_average(0.0, 1.0, 0).unwrap_err(),
            ConfidenceError::ZeroPlannedSamples
        );
    }

    #[test]
    fn estimate_reports_current_state() {
        let mut f = ConfidenceAggregationFunction::conservative_confidence_average(0.8, 0.0, 10.0)
            .unwrap();
        let acc = fold_all(&mut f, &[4.0, 6.0]).unwrap();
        let est = f.estimate(&acc).unwrap();
        assert_eq!(est.count, 2);
        assert_eq!(est.mean, 5.0);
        assert_eq!(est.confidence, 0.8);
        assert_eq!(est.epsilon, f.epsilon().unwrap());
    }

    #[test]
    fn skewed_sample_mean_and_bound() {
        use crate::testing::{exact_mean, skewed_sample};

        let data = skewed_sample();
        let mut f =
            ConfidenceAggregationFunction::conservative_confidence_average(0.05, 0.0, 10_000.0)
                .unwrap();
        let acc = fold_all(&mut f, &data).unwrap();
        assert!((acc.mean() - exact_mean(&data)).abs() < 1e-12);
        let want = 10_000.0 * ((2.0f64 / 0.95).ln() / 24.0).sqrt();
        assert!((f.epsilon().unwrap() - want).abs() < 1e-9);
    }
}
