/// Small skewed sample with one outlier, known mean 16.
pub fn skewed_sample() -> Vec<f64> {
    [10, 10, 10, 0, 5, 2, 7, 70, 33, 15, 23, 7]
        .into_iter()
        .map(f64::from)
        .collect()
}

/// Exact mean of `values`, two-pass.
pub fn exact_mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
