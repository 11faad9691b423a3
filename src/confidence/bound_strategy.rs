use crate::confidence::{Bounds, ConfidenceError, conservative, deterministic, large_sample};

/// Rule used to turn a sample count into an error half-width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundStrategy {
    /// CLT-based bound. Without explicit bounds the observed value range is
    /// used as the domain; no bound exists until that range has positive width.
    LargeSample { bounds: Option<Bounds> },
    /// Distribution-free Hoeffding bound over a known domain.
    Conservative { bounds: Bounds },
    /// Bound fixed in advance for a planned number of samples.
    Deterministic { bounds: Bounds, planned: u64 },
}

impl BoundStrategy {
    /// Half-width after `n_seen` observations.
    ///
    /// `observed` is the value range seen so far; only `LargeSample` without
    /// explicit bounds reads it.
    pub fn epsilon(
        &self,
        confidence: f64,
        n_seen: u64,
        observed: Option<Bounds>,
    ) -> Result<f64, ConfidenceError> {
        match *self {
            Self::LargeSample { bounds } => {
                let domain = match (bounds, observed) {
                    (Some(declared), _) => declared,
                    (None, Some(range)) if range.width() > 0.0 => range,
                    (None, Some(_)) => return Err(ConfidenceError::EpsilonUnavailable),
                    (None, None) => return Err(ConfidenceError::NoObservations),
                };
                large_sample::average(confidence, n_seen, domain)
            }
            Self::Conservative { bounds } => conservative::average(confidence, n_seen, bounds),
            Self::Deterministic { bounds, planned } => {
                deterministic::average(confidence, bounds, planned)
            }
        }
    }

    /// Whether the bound moves as observations arrive.
    #[inline]
    pub fn depends_on_data(&self) -> bool {
        !matches!(self, Self::Deterministic { .. })
    }

    /// Declared value domain, if the strategy carries one.
    pub fn declared_bounds(&self) -> Option<Bounds> {
        match *self {
            Self::LargeSample { bounds } => bounds,
            Self::Conservative { bounds } | Self::Deterministic { bounds, .. } => Some(bounds),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::LargeSample { .. } => "large-sample",
            Self::Conservative { .. } => "conservative",
            Self::Deterministic { .. } => "deterministic",
        }
    }
}
