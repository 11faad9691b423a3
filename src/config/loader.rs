use crate::aggregation::ConfidenceAggregationFunction;
use crate::config::BoundChoice;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads a [`BoundChoice`] from a JSON file.
pub fn load_bound_choice<P: AsRef<Path>>(path: P) -> Result<BoundChoice> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read estimator config '{}'", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse estimator config '{}'", path.display()))
}

/// Reads a [`BoundChoice`] from a JSON file and builds the estimator it describes.
pub fn load_estimator<P: AsRef<Path>>(path: P) -> Result<ConfidenceAggregationFunction> {
    let path = path.as_ref();
    let choice = load_bound_choice(path)?;
    let function = choice
        .build()
        .with_context(|| format!("invalid estimator config '{}'", path.display()))?;
    Ok(function)
}
