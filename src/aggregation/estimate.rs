use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Reported state of a running average: `mean ± epsilon` with probability
/// `confidence`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub count: u64,
    pub mean: f64,
    pub epsilon: f64,
    pub confidence: f64,
}

impl Estimate {
    #[inline]
    pub fn lower(&self) -> f64 {
        self.mean - self.epsilon
    }

    #[inline]
    pub fn upper(&self) -> f64 {
        self.mean + self.epsilon
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.lower() && x <= self.upper()
    }
}

impl Display for Estimate {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "n={}, mean={:.6} ± {:.6} (confidence {})",
            self.count, self.mean, self.epsilon, self.confidence
        )
    }
}
