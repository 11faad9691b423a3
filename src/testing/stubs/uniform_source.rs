use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Endless, seeded stream of values drawn uniformly from `[lower, upper)`.
pub struct UniformSource {
    rng: StdRng,
    seed: u64,
    lower: f64,
    upper: f64,
}

impl UniformSource {
    pub fn new(seed: u64, lower: f64, upper: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            lower,
            upper,
        }
    }

    /// Rewinds to the first value.
    pub fn restart(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    /// Mean of the generating distribution.
    pub fn true_mean(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }
}

impl Iterator for UniformSource {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.rng.random_range(self.lower..self.upper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_stay_in_range() {
        let src = UniformSource::new(7, -3.0, 5.0);
        assert!(src.take(1000).all(|v| (-3.0..5.0).contains(&v)));
    }

    #[test]
    fn restart_replays_sequence() {
        let mut src = UniformSource::new(42, 0.0, 1.0);
        let first: Vec<f64> = src.by_ref().take(5).collect();
        src.restart();
        let again: Vec<f64> = src.by_ref().take(5).collect();
        assert_eq!(first, again);
    }
}
