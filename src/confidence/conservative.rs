//! Conservative (distribution-free) confidence bounds for running averages.
//!
//! Built on Hoeffding's inequality: for `n` independent values confined to
//! `[lo, hi]`, `P(|mean - mu| >= eps) <= 2 exp(-2 n eps^2 / (hi - lo)^2)`.
//! Solving for `eps` at error probability `1 - confidence` gives the width
//! returned here. No distributional assumption is made and the bound holds for
//! every `n >= 1`, provided the true domain really is `[lo, hi]`.

use crate::confidence::bounds::hoeffding_half_width;
use crate::confidence::{Bounds, ConfidenceError};

pub fn average(confidence: f64, n_seen: u64, bounds: Bounds) -> Result<f64, ConfidenceError> {
    hoeffding_half_width(confidence, n_seen, bounds)
}
