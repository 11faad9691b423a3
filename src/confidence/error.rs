use thiserror::Error;

/// Broad category of a [`ConfidenceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected construction parameters.
    Configuration,
    /// A value or count the math cannot work with.
    Domain,
    /// An accessor queried before the estimator could answer.
    State,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfidenceError {
    #[error("confidence level must lie strictly between 0 and 1, got {0}")]
    ConfidenceOutOfRange(f64),

    #[error("invalid value bounds: lower={lower}, upper={upper}")]
    InvalidBounds { lower: f64, upper: f64 },

    #[error("planned sample count must be > 0")]
    ZeroPlannedSamples,

    #[error("target precision must be finite and > 0, got {0}")]
    InvalidPrecision(f64),

    #[error("observed value is not finite: {0}")]
    NonFiniteValue(f64),

    #[error("error bound requires at least one observation")]
    NoObservations,

    #[error("epsilon is undefined before the first observation")]
    EpsilonUnavailable,
}

impl ConfidenceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfidenceOutOfRange(_)
            | Self::InvalidBounds { .. }
            | Self::ZeroPlannedSamples
            | Self::InvalidPrecision(_) => ErrorKind::Configuration,
            Self::NonFiniteValue(_) | Self::NoObservations => ErrorKind::Domain,
            Self::EpsilonUnavailable => ErrorKind::State,
        }
    }
}
