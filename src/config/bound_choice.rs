use crate::aggregation::ConfidenceAggregationFunction;
use crate::confidence::{ConfidenceError, deterministic};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_confidence() -> f64 {
    deterministic::DEFAULT_CONFIDENCE
}
fn default_lower() -> f64 {
    0.0
}
fn default_upper() -> f64 {
    1.0
}
fn default_planned_samples() -> u64 {
    1_000
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LargeSampleParams {
    #[serde(default = "default_confidence")]
    #[schemars(
        title = "Confidence",
        description = "Probability that the interval covers the true mean (0–1, exclusive).",
        range(min = 0.0, max = 1.0)
    )]
    pub confidence: f64,

    #[serde(default)]
    #[schemars(
        title = "Lower bound",
        description = "Known smallest value. Omit to use the observed range."
    )]
    pub lower: Option<f64>,

    #[serde(default)]
    #[schemars(
        title = "Upper bound",
        description = "Known largest value. Omit to use the observed range."
    )]
    pub upper: Option<f64>,
}
impl Default for LargeSampleParams {
    fn default() -> Self {
        Self {
            confidence: default_confidence(),
            lower: None,
            upper: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ConservativeParams {
    #[serde(default = "default_confidence")]
    #[schemars(
        title = "Confidence",
        description = "Probability that the interval covers the true mean (0–1, exclusive).",
        range(min = 0.0, max = 1.0)
    )]
    pub confidence: f64,

    #[serde(default = "default_lower")]
    #[schemars(title = "Lower bound", description = "Smallest possible value.")]
    pub lower: f64,

    #[serde(default = "default_upper")]
    #[schemars(title = "Upper bound", description = "Largest possible value.")]
    pub upper: f64,
}
impl Default for ConservativeParams {
    fn default() -> Self {
        Self {
            confidence: default_confidence(),
            lower: default_lower(),
            upper: default_upper(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DeterministicParams {
    #[serde(default = "default_confidence")]
    #[schemars(
        title = "Confidence",
        description = "Probability that the interval covers the true mean (0–1, exclusive).",
        range(min = 0.0, max = 1.0)
    )]
    pub confidence: f64,

    #[serde(default = "default_lower")]
    #[schemars(title = "Lower bound", description = "Smallest possible value.")]
    pub lower: f64,

    #[serde(default = "default_upper")]
    #[schemars(title = "Upper bound", description = "Largest possible value.")]
    pub upper: f64,

    #[serde(default = "default_planned_samples")]
    #[schemars(
        title = "Planned samples",
        description = "Number of samples committed to up front.",
        range(min = 1)
    )]
    pub planned_samples: u64,
}
impl Default for DeterministicParams {
    fn default() -> Self {
        Self {
            confidence: default_confidence(),
            lower: default_lower(),
            upper: default_upper(),
            planned_samples: default_planned_samples(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(BoundKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum BoundChoice {
    #[strum_discriminants(strum(
        message = "Large sample",
        detailed_message = "CLT-based bound; needs many samples drawn effectively with replacement."
    ))]
    LargeSample(LargeSampleParams),
    #[strum_discriminants(strum(
        message = "Conservative",
        detailed_message = "Hoeffding bound; valid for any sample size over a known domain."
    ))]
    Conservative(ConservativeParams),
    #[strum_discriminants(strum(
        message = "Deterministic",
        detailed_message = "Fixed bound for a sample count committed to in advance."
    ))]
    Deterministic(DeterministicParams),
}
impl Default for BoundChoice {
    fn default() -> Self {
        Self::Conservative(ConservativeParams::default())
    }
}

impl BoundChoice {
    /// Choice of the given kind with default parameters.
    pub fn default_for(kind: BoundKind) -> Self {
        match kind {
            BoundKind::LargeSample => Self::LargeSample(LargeSampleParams::default()),
            BoundKind::Conservative => Self::Conservative(ConservativeParams::default()),
            BoundKind::Deterministic => Self::Deterministic(DeterministicParams::default()),
        }
    }

    pub fn kind(&self) -> BoundKind {
        self.into()
    }

    /// Validates the parameters and builds the matching estimator.
    pub fn build(&self) -> Result<ConfidenceAggregationFunction, ConfidenceError> {
        type F = ConfidenceAggregationFunction;
        match self {
            Self::LargeSample(p) => match (p.lower, p.upper) {
                (Some(lo), Some(hi)) => {
                    F::large_sample_confidence_average_with_bounds(p.confidence, lo, hi)
                }
                (None, None) => F::large_sample_confidence_average(p.confidence),
                (lo, hi) => Err(ConfidenceError::InvalidBounds {
                    lower: lo.unwrap_or(f64::NAN),
                    upper: hi.unwrap_or(f64::NAN),
                }),
            },
            Self::Conservative(p) => {
                F::conservative_confidence_average(p.confidence, p.lower, p.upper)
            }
            Self::Deterministic(p) => F::deterministic_confidence_average_at(
                p.confidence,
                p.lower,
                p.upper,
                p.planned_samples,
            ),
        }
    }
}
